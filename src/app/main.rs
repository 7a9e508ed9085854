use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use std::{env, fs, process, thread};

mod constants;
mod input;
mod sdl_setup;

use dmge::emulator::Emulator;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <rom-path>", args[0]);
        process::exit(1);
    }

    if let Err(message) = run(Path::new(&args[1])) {
        eprintln!("{}", message);
        process::exit(1);
    }
}

fn run(rom_path: &Path) -> Result<(), String> {
    let rom = fs::read(rom_path)
        .map_err(|e| format!("failed to read ROM '{}': {}", rom_path.display(), e))?;

    // Save file sits next to the cartridge; a missing one just means a
    // fresh battery.
    let sav_path = PathBuf::from(format!("{}.sav", rom_path.display()));
    let save_ram = match fs::read(&sav_path) {
        Ok(data) => {
            log::info!("loaded save file {}", sav_path.display());
            Some(data)
        }
        Err(_) => None,
    };

    let mut emulator =
        Emulator::new(&rom, save_ram.as_deref(), None).map_err(|e| e.to_string())?;

    let rom_filename = rom_path.file_name().unwrap_or_default().to_string_lossy();
    let window_title = format!("dmge - {}", rom_filename);
    let mut sdl = sdl_setup::init_sdl(&window_title)?;

    let mut texture = sdl
        .texture_creator
        .create_texture_streaming(
            PixelFormatEnum::RGBA32,
            constants::GB_WIDTH as u32,
            constants::GB_HEIGHT as u32,
        )
        .map_err(|e| e.to_string())?;

    let mut pixel_bytes = vec![0u8; constants::GB_WIDTH * constants::GB_HEIGHT * 4];

    'main_loop: loop {
        let frame_start = Instant::now();

        for event in input::poll_events(&mut sdl.event_pump) {
            emulator.handle_event(event);
        }
        if emulator.quit_requested() {
            break 'main_loop;
        }

        if let Err(e) = emulator.run_frame() {
            flush_save_ram(&emulator, &sav_path);
            return Err(format!("emulation fault: {}", e));
        }

        // Present: RGBA words, big-end first, into an RGBA byte texture.
        for (word, out) in emulator
            .framebuffer()
            .iter()
            .zip(pixel_bytes.chunks_exact_mut(4))
        {
            out.copy_from_slice(&word.to_be_bytes());
        }
        texture
            .update(None, &pixel_bytes, constants::GB_WIDTH * 4)
            .map_err(|e| e.to_string())?;
        sdl.canvas.clear();
        sdl.canvas
            .copy(
                &texture,
                None,
                Rect::new(0, 0, constants::WINDOW_WIDTH, constants::WINDOW_HEIGHT),
            )
            .map_err(|e| e.to_string())?;
        sdl.canvas.present();

        // Sleep most of the remaining frame budget, then spin out the last
        // millisecond for a steadier cadence.
        let target = emulator.frame_duration();
        let elapsed = frame_start.elapsed();
        if elapsed < target {
            let remaining = target - elapsed;
            if remaining > Duration::from_millis(1) {
                thread::sleep(remaining - Duration::from_millis(1));
            }
            while frame_start.elapsed() < target {
                thread::yield_now();
            }
        }
    }

    flush_save_ram(&emulator, &sav_path);
    Ok(())
}

fn flush_save_ram(emulator: &Emulator, sav_path: &Path) {
    if let Some(image) = emulator.save_ram() {
        match fs::write(sav_path, image) {
            Ok(()) => log::info!("wrote save file {}", sav_path.display()),
            Err(e) => eprintln!(
                "warning: could not write save file {}: {}",
                sav_path.display(),
                e
            ),
        }
    }
}
