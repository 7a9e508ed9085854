//! A DMG (original Game Boy) emulator core: LR35902 interpreter, memory
//! map with MBC1/MBC3 banking, scanline PPU, programmable timer and joypad,
//! driven one frame at a time by [`emulator::Emulator`].

pub mod cartridge;
pub mod cpu;
pub mod emulator;
pub mod error;
pub mod instruction;
pub mod joypad;
pub mod memory_bus;
pub mod memory_map;
pub mod ppu;
pub mod timer;

#[cfg(test)]
pub(crate) mod testutil {
    use crate::memory_map::*;

    /// Builds a header-valid cartridge image. `code` is placed at the entry
    /// point 0x0100 (it may run past the header area, which tests never
    /// execute back into).
    pub fn build_rom(code: &[u8], cart_type: u8, rom_size: u8, ram_size: u8) -> Vec<u8> {
        assert!(code.len() <= 0x34, "test code would clobber the header");
        let banks = 2usize << rom_size;
        let mut rom = vec![0u8; banks * ROM_BANK_SIZE];
        rom[HEADER_CART_TYPE] = cart_type;
        rom[HEADER_ROM_SIZE] = rom_size;
        rom[HEADER_RAM_SIZE] = ram_size;

        let mut chk = 0u8;
        for &b in &rom[HEADER_CHECKSUM_START..=HEADER_CHECKSUM_END] {
            chk = chk.wrapping_sub(b).wrapping_sub(1);
        }
        rom[HEADER_CHECKSUM] = chk;

        rom[0x0100..0x0100 + code.len()].copy_from_slice(code);
        rom
    }
}
