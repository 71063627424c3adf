use thiserror::Error;

use crate::constants::MAX_ROM_SIZE;

/// Failures the machine can surface to its host.
///
/// Everything else the instruction set does is defined with wrapping
/// semantics and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The ROM image does not fit in the memory above the program start.
    ///
    /// Nothing is written to memory when this is returned.
    #[error("ROM is {size} bytes but only {max} bytes of program memory exist")]
    RomTooLarge { size: usize, max: usize },

    /// The fetched word matches no known instruction pattern.
    ///
    /// The machine is left untouched, so a retry fails the same way until
    /// the host intervenes.
    #[error("unrecognized opcode {opcode:#06X} at {pc:#05X}")]
    UnknownOpcode { opcode: u16, pc: u16 },
}

impl Error {
    /// Constructs the load failure for an oversized ROM.
    pub(crate) fn rom_too_large(size: usize) -> Self {
        Error::RomTooLarge {
            size,
            max: MAX_ROM_SIZE,
        }
    }
}
