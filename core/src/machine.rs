use log::trace;

use crate::constants::{MAX_ROM_SIZE, PROGRAM_START};
use crate::error::Error;
use crate::instruction;
use crate::state::{DrawMode, FrameBuffer, State};

/// # Machine
/// An interpreter over explicit machine state.
///
/// The host owns a single Machine value and drives it: it decides the cycle
/// cadence, writes key state, renders frames, and consumes the audio cue.
/// Nothing here blocks or loops; `step` always does exactly one cycle's
/// worth of work and returns.
///
/// Supplies interfaces for:
/// - resetting to the power-on state
/// - loading ROM images
/// - pressing and releasing keys
/// - advancing execution one cycle at a time
/// - inspecting the frame buffer for rendering by some display
/// - consuming the beep signal raised by the sound timer
pub struct Machine {
    state: State,
    pressed_keys: [u8; 16],
    audio_cue: bool,
}

impl Machine {
    pub fn new() -> Self {
        Machine {
            state: State::new(),
            pressed_keys: [0; 16],
            audio_cue: false,
        }
    }

    /// A machine whose draw instruction composites with the given mode.
    pub fn with_draw_mode(draw_mode: DrawMode) -> Self {
        let mut machine = Machine::new();
        machine.state.draw_mode = draw_mode;
        machine
    }

    /// Returns every piece of machine state to its power-on value.
    ///
    /// Repeatable; the configured draw mode is host configuration rather
    /// than machine state and survives.
    pub fn reset(&mut self) {
        self.state = State {
            draw_mode: self.state.draw_mode,
            ..State::new()
        };
        self.pressed_keys = [0; 16];
        self.audio_cue = false;
    }

    /// Copies a ROM image into memory at the program start address.
    ///
    /// An image larger than the program space is refused whole; memory is
    /// left exactly as it was.
    ///
    /// # Arguments
    /// * `rom` the raw bytes of a ROM image, no header or metadata
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), Error> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::rom_too_large(rom.len()));
        }
        self.state.memory[PROGRAM_START..PROGRAM_START + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    /// Advances the machine by a single cycle:
    /// one fetch, decode, execute, then one timer decrement phase.
    ///
    /// A word that decodes to nothing is surfaced as an error with the
    /// machine untouched; the host decides whether to stop or inspect.
    pub fn step(&mut self) -> Result<(), Error> {
        let op: u16 = self.fetch();
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        let operation = instruction::from_op(&op).ok_or(Error::UnknownOpcode {
            opcode: op,
            pc: self.state.pc,
        })?;
        self.state = operation(&op, &self.state, self.pressed_keys);
        self.cycle_timers();
        Ok(())
    }

    /// Returns the frame buffer and clears the redraw flag if a redraw is
    /// pending.
    ///
    /// This is the render path: poll, draw the returned frame, and the
    /// flag stays down until pixels change again.
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// The current frame buffer, with no effect on the redraw flag.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Whether pixels may have changed since the last `take_frame`.
    pub fn redraw_needed(&self) -> bool {
        self.state.draw_flag
    }

    /// Consumes the beep signal.
    ///
    /// Raised when the sound timer runs out; true at most once per raise.
    pub fn take_audio_cue(&mut self) -> bool {
        let cue = self.audio_cue;
        self.audio_cue = false;
        cue
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the hexadecimal value of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.pressed_keys[(key & 0xF) as usize] = 0x1;
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the hexadecimal value of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.pressed_keys[(key & 0xF) as usize] = 0x0;
    }

    pub fn is_key_pressed(&self, key: u8) -> bool {
        self.pressed_keys[(key & 0xF) as usize] == 0x1
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    /// Gets the instruction word currently pointed at by the pc.
    ///
    /// Memory is stored as bytes, but instructions are 16 bits so two
    /// subsequent bytes are combined. Both offsets are masked into the 4K
    /// space, which is the policy for a pc that walks past the top of
    /// memory.
    fn fetch(&self) -> u16 {
        let left = u16::from(self.state.memory[(self.state.pc & 0xFFF) as usize]);
        let right = u16::from(self.state.memory[(self.state.pc.wrapping_add(1) & 0xFFF) as usize]);
        left << 8 | right
    }

    /// Decrements any running timer by one.
    ///
    /// The audio cue is latched on the sound timer's final tick for the
    /// host to consume; the machine itself never makes sound.
    fn cycle_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        if self.state.sound_timer > 0 {
            if self.state.sound_timer == 1 {
                self.audio_cue = true;
            }
            self.state.sound_timer -= 1;
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
