use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use okto_core::{DrawMode, CLOCK_SPEED};

mod keymap;
mod run;

/// A CHIP-8 emulator.
///
/// Key layout: the hexadecimal pad maps to the left four columns of a
/// QWERTY keyboard (1234 / QWER / ASDF / ZXCV). Space holds fast-forward.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM image to run
    rom: PathBuf,

    /// Clip sprites at the display edge instead of wrapping them
    #[arg(long)]
    clip: bool,

    /// CPU cycles per second, overriding the stock 60Hz cadence
    #[arg(long)]
    hz: Option<u32>,

    /// Window size multiplier for each pixel
    #[arg(long, default_value_t = 10)]
    scale: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let draw_mode = if args.clip {
        DrawMode::Clip
    } else {
        DrawMode::Wrap
    };

    // Timers tick once per cycle, so the stock cadence is the timer rate
    let cycle_time = match args.hz {
        Some(hz) => Duration::from_nanos(1_000_000_000 / u64::from(hz.max(1))),
        None => Duration::new(0, CLOCK_SPEED),
    };

    run::run(args.rom, draw_mode, cycle_time, args.scale as usize);
}
