//! The frame driver: owns every component and runs them in lockstep, one
//! instruction at a time, a frame's worth of T-cycles per call.

use crate::cartridge::Cartridge;
use crate::cpu::{Cpu, CpuMode, INTERRUPT_DISPATCH_CYCLES};
use crate::error::EmuError;
use crate::joypad::Button;
use crate::memory_bus::MemoryBus;
use crate::memory_map::BOOT_ROM_SIZE;
use crate::ppu::{CYCLES_PER_FRAME, FRAME_BUFFER_SIZE, Ppu};
use std::time::Duration;

/// Real time per emulated frame: 70224 T-cycles at 4.194304 MHz, which is
/// the ~59.7275 Hz panel refresh.
pub const FRAME_DURATION: Duration = Duration::from_nanos(16_742_706);

/// Host input, already translated out of whatever event system the front
/// end uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Button),
    KeyUp(Button),
    Quit,
    /// Frame pacing override, in milliseconds of real time per frame.
    SetSpeed(u64),
}

pub struct Emulator {
    pub cpu: Cpu,
    pub ppu: Ppu,
    pub memory_bus: MemoryBus,
    frame_duration: Duration,
    quit_requested: bool,
}

impl Emulator {
    /// Builds the machine from raw images. File handling stays with the
    /// caller; load failures (bad header, bad checksum, oversized image)
    /// surface here before any frame runs. A save-RAM image that does not
    /// match the cartridge is reported but non-fatal.
    pub fn new(
        rom: &[u8],
        save_ram: Option<&[u8]>,
        boot_rom: Option<[u8; BOOT_ROM_SIZE]>,
    ) -> Result<Self, EmuError> {
        let mut cartridge = Cartridge::new(rom)?;

        if let Some(image) = save_ram {
            match cartridge.load_ram_image(image) {
                Ok(()) => log::info!("restored {} bytes of save RAM", image.len()),
                Err(e) => log::warn!("ignoring save RAM image: {}", e),
            }
        }

        let skip_boot_rom = boot_rom.is_none();
        let memory_bus = MemoryBus::new(cartridge, boot_rom);
        let cpu = Cpu::new(skip_boot_rom);

        Ok(Emulator {
            cpu,
            ppu: Ppu::new(),
            memory_bus,
            frame_duration: FRAME_DURATION,
            quit_requested: false,
        })
    }

    /// Runs one frame: 70224 T-cycles of CPU, timer and PPU in lockstep.
    /// Each instruction's memory side effects reach the timer and PPU
    /// before the next fetch, and interrupts are serviced only at
    /// instruction boundaries.
    pub fn run_frame(&mut self) -> Result<(), EmuError> {
        let mut cycles: u32 = 0;
        // Cycles charged by the previous iteration's interrupt dispatch;
        // folded into the next span so the peripherals never miss them.
        let mut carry: u32 = 0;
        while cycles < CYCLES_PER_FRAME {
            let mut span = if self.cpu.mode() == CpuMode::Halted {
                4
            } else {
                self.cpu.step(&mut self.memory_bus)? as u32
            };
            span += carry;

            self.memory_bus.tick_timer(span);
            self.ppu.step(span, &mut self.memory_bus);

            carry = if self.cpu.service_interrupt(&mut self.memory_bus) {
                INTERRUPT_DISPATCH_CYCLES as u32
            } else {
                0
            };
            cycles += span;
        }
        Ok(())
    }

    /// Feeds one host input event into the machine.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(button) => self.memory_bus.key_down(button),
            InputEvent::KeyUp(button) => self.memory_bus.key_up(button),
            InputEvent::Quit => self.quit_requested = true,
            InputEvent::SetSpeed(ms_per_frame) => {
                self.frame_duration = Duration::from_millis(ms_per_frame);
                log::info!("frame pacing set to {} ms", ms_per_frame);
            }
        }
    }

    /// True once a Quit event arrived; the host loop exits at the next
    /// frame boundary and flushes save RAM.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// The rendered frame, for the host to present.
    pub fn framebuffer(&self) -> &[u32; FRAME_BUFFER_SIZE] {
        self.ppu.frame_buffer()
    }

    /// The battery-backed external RAM image, if this cartridge has one.
    /// The host writes it out bit for bit on clean shutdown.
    pub fn save_ram(&self) -> Option<&[u8]> {
        self.memory_bus.cartridge().ram_image()
    }

    /// Every byte latched on the serial debug channel so far.
    pub fn serial_output(&self) -> &[u8] {
        self.memory_bus.serial_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::{FLAG_N, FLAG_Z};
    use crate::memory_map::{IF_ADDR, LY_ADDR, VBLANK_INTERRUPT_BIT};
    use crate::testutil::build_rom;

    #[test]
    fn frame_accounts_for_the_full_cycle_budget() {
        let rom = build_rom(&[0x18, 0xFE], 0x00, 0x00, 0x00); // JR -2: spin
        let mut emu = Emulator::new(&rom, None, None).unwrap();
        let before = emu.cpu.total_cycles();
        emu.run_frame().unwrap();
        let spent = emu.cpu.total_cycles() - before;
        // The loop never stops short, and overshoots by less than one
        // instruction plus an interrupt dispatch.
        assert!(spent >= CYCLES_PER_FRAME as u64);
        assert!(spent < CYCLES_PER_FRAME as u64 + 48);
    }

    #[test]
    fn minimal_program_halts_with_a_equal_two() {
        // LD SP,0xFFFE; XOR A; INC A; INC A; HALT
        let rom = build_rom(&[0x31, 0xFE, 0xFF, 0xAF, 0x3C, 0x3C, 0x76], 0x00, 0x00, 0x00);
        let mut emu = Emulator::new(&rom, None, None).unwrap();
        emu.run_frame().unwrap();

        let (a, f, ..) = emu.cpu.registers();
        assert_eq!(a, 2);
        assert_eq!(f & FLAG_Z, 0);
        assert_eq!(f & FLAG_N, 0);
        assert_eq!(emu.cpu.mode(), CpuMode::Halted);
        assert_eq!(emu.cpu.sp(), 0xFFFE);
    }

    #[test]
    fn vblank_requested_every_frame_while_lcd_on() {
        let rom = build_rom(&[0x18, 0xFE], 0x00, 0x00, 0x00);
        let mut emu = Emulator::new(&rom, None, None).unwrap();
        for _ in 0..3 {
            emu.memory_bus.set_io_reg_direct(IF_ADDR, 0);
            emu.run_frame().unwrap();
            assert_ne!(
                emu.memory_bus.io_reg(IF_ADDR) & (1 << VBLANK_INTERRUPT_BIT),
                0
            );
            assert!(emu.memory_bus.io_reg(LY_ADDR) <= 153);
        }
    }

    #[test]
    fn quit_and_speed_events_update_driver_state() {
        let rom = build_rom(&[0x18, 0xFE], 0x00, 0x00, 0x00);
        let mut emu = Emulator::new(&rom, None, None).unwrap();
        assert!(!emu.quit_requested());
        emu.handle_event(InputEvent::SetSpeed(33));
        assert_eq!(emu.frame_duration(), Duration::from_millis(33));
        emu.handle_event(InputEvent::Quit);
        assert!(emu.quit_requested());
    }

    #[test]
    fn joypad_events_reach_the_matrix() {
        let rom = build_rom(&[0x18, 0xFE], 0x00, 0x00, 0x00);
        let mut emu = Emulator::new(&rom, None, None).unwrap();
        emu.handle_event(InputEvent::KeyDown(Button::Start));
        emu.memory_bus.write_byte(0xFF00, 0x10); // select action row
        let value = emu.memory_bus.read_byte(0xFF00);
        assert_eq!(value & 0x08, 0); // Start reads low
        // The 1->0 transition raised the joypad interrupt.
        assert_ne!(emu.memory_bus.io_reg(IF_ADDR) & 0x10, 0);
    }

    #[test]
    fn save_ram_round_trip_through_the_emulator() {
        let rom = build_rom(&[0x18, 0xFE], 0x03, 0x00, 0x02); // MBC1+RAM+BATT
        let mut emu = Emulator::new(&rom, None, None).unwrap();
        emu.memory_bus.write_byte(0x0000, 0x0A); // RAM enable
        emu.memory_bus.write_byte(0xA000, 0x5A);
        let image = emu.save_ram().unwrap().to_vec();
        assert_eq!(image[0], 0x5A);

        let emu2 = Emulator::new(&rom, Some(&image), None).unwrap();
        assert_eq!(emu2.save_ram().unwrap()[0], 0x5A);
    }

    #[test]
    fn mismatched_save_image_is_non_fatal() {
        let rom = build_rom(&[0x18, 0xFE], 0x03, 0x00, 0x02);
        let emu = Emulator::new(&rom, Some(&[0u8; 4]), None).unwrap();
        assert_eq!(emu.save_ram().unwrap().iter().filter(|&&b| b != 0).count(), 0);
    }
}
