use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{debug, error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use okto_core::{DrawMode, Machine};
use okto_display::Display;

use crate::keymap::keymap;

pub fn run(rom: PathBuf, draw_mode: DrawMode, cycle_time: Duration, scale: usize) {
    let mut machine = Machine::with_draw_mode(draw_mode);

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().unwrap();
    let mut display = Display::new(&sdl, scale);
    let mut events = sdl.event_pump().unwrap();

    // Load ROM
    let image = match fs::read(&rom) {
        Ok(image) => image,
        Err(e) => {
            error!("unable to read {}: {}", rom.display(), e);
            return;
        }
    };
    match machine.load_rom(&image) {
        Ok(()) => info!("loaded {} byte ROM from {}", image.len(), rom.display()),
        Err(e) => {
            error!("refusing to start: {}", e);
            return;
        }
    };

    // Set initial timing
    let mut last_cycle: Instant = Instant::now();

    // Whether or not the configured cycle rate should be respected
    let mut fast_forward: bool = false;

    'event: loop {
        // If a redraw is pending, take the frame and render it
        if let Some(frame) = machine.take_frame() {
            display.render(&frame);
        }

        // The machine only signals the beep; making the sound is on us
        if machine.take_audio_cue() {
            debug!("beep");
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => machine.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => machine.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        if let Err(e) = machine.step() {
            error!("halting: {}", e);
            break 'event;
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = current_time;
    }
}
