use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, STACK_DEPTH,
};

/// The frame buffer is a flat sequence of 0/1 pixels indexed `y * 64 + x`.
pub type FrameBuffer = [u8; DISPLAY_WIDTH * DISPLAY_HEIGHT];

/// How sprite pixels that land outside the 64x32 grid are composited.
///
/// Some programs rely on sprites wrapping around the display edges, others
/// expect them to be cut off. The mode is host configuration and survives a
/// machine reset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Out-of-range coordinates wrap modulo the display dimensions.
    #[default]
    Wrap,
    /// Out-of-range pixels are dropped.
    Clip,
}

/// A snapshot of the machine's internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - all 16 are ordinary addressable registers
///     - VF doubles as the flag output of the arithmetic, shift, and draw
///       instructions, which overwrite whatever a program stored there
/// - (i) a 16-bit memory address register; masked to the 4K space when used
///   to address memory
///
/// Counter
/// - (pc) a 16-bit program counter, starting at `PROGRAM_START` and moving
///   in units of 2 except on jump, call, return, and skip
///
/// Pointer
/// - (sp) an 8-bit stack pointer; a call stores the return address then
///   increments it, a return decrements it then reads. It is masked modulo
///   the stack depth when indexing, so over- and underflow reuse slots
///   instead of leaving the stack
///
/// Timers
/// - 2 8-bit timers (delay & sound), each decremented at most once per
///   cycle and never below zero
///
/// ## Memory
/// - a 16 slot stack of subroutine return addresses
/// - 4096 bytes of addressable memory; the region below `PROGRAM_START` is
///   reserved and holds the sprite sheet, programs load at `PROGRAM_START`
/// - a 64x32 frame buffer holding the next frame to be drawn, paired with a
///   draw flag that is set whenever pixels may have changed and cleared
///   only by whoever renders the frame
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub draw_mode: DrawMode,
}

impl State {
    pub fn new() -> Self {
        // The bottom of the reserved region holds the sprite sheet
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START as u16,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory,
            frame_buffer: [0; DISPLAY_WIDTH * DISPLAY_HEIGHT],
            // Force an initial render of the blank screen
            draw_flag: true,
            draw_mode: DrawMode::default(),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_state {
    use super::*;

    #[test]
    fn test_new_loads_sprite_sheet() {
        let state = State::new();
        assert_eq!(state.memory[0..80], SPRITE_SHEET);
        assert!(state.memory[80..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_new_points_pc_at_program_start() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_new_requests_a_redraw() {
        let state = State::new();
        assert!(state.draw_flag);
        assert!(state.frame_buffer.iter().all(|&pixel| pixel == 0));
    }
}
