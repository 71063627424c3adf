/// Horizontal pixel count of the display.
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical pixel count of the display.
pub const DISPLAY_HEIGHT: usize = 32;

/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Address at which loaded programs begin.
///
/// Everything below this is reserved for the interpreter; the sprite sheet
/// lives at the bottom of that region.
pub const PROGRAM_START: usize = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the top of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START;

/// Return address slots available to nested subroutine calls.
pub const STACK_DEPTH: usize = 16;

/// Nanoseconds per CPU cycle for hosts that want the stock cadence.
///
/// Timers tick once per cycle, so the stock cadence is the 60Hz timer rate.
pub const CLOCK_SPEED: u32 = 16_666_667;

/// # Sprite Sheet
/// Sprites for the hexadecimal digits 0..F.
///
/// Each glyph is 8x5 pixels with each row encoded as one byte, so the glyph
/// for digit `d` begins at address `d * 5`.
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
