pub use constants::CLOCK_SPEED;
pub use error::Error;
pub use machine::Machine;
pub use state::{DrawMode, FrameBuffer};

pub mod constants;
mod error;
mod instruction;
mod machine;
mod opcode;
mod operations;
pub mod state;
