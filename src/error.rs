use std::io;
use thiserror::Error;

/// Everything that can take the emulator down (or warrant a warning on the
/// save path). The steady-state hot path never produces one of these except
/// for `UnknownOpcode`, which indicates a corrupt ROM.
#[derive(Debug, Error)]
pub enum EmuError {
    #[error("failed to read cartridge: {0}")]
    LoadIo(#[from] io::Error),

    #[error("cartridge image is {0} bytes, larger than the 2 MiB limit")]
    LoadTooLarge(usize),

    #[error("cartridge image is {0} bytes, too small for a header")]
    LoadTooSmall(usize),

    #[error("unsupported cartridge type byte {0:#04X}")]
    LoadUnsupportedMbc(u8),

    #[error("invalid ROM size byte {0:#04X}")]
    LoadBadRomSize(u8),

    #[error("invalid RAM size byte {0:#04X}")]
    LoadBadRamSize(u8),

    #[error("header checksum mismatch: computed {computed:#04X}, header says {stored:#04X}")]
    LoadBadChecksum { computed: u8, stored: u8 },

    #[error("save RAM image is {got} bytes, cartridge expects {expected}")]
    SaveSizeMismatch { got: usize, expected: usize },

    #[error("illegal opcode {opcode:#04X} at PC={pc:#06X}")]
    UnknownOpcode { pc: u16, opcode: u8 },
}

impl EmuError {
    /// Load failures abort before the frame loop starts; everything else is
    /// reported and survivable at the call site's discretion.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            EmuError::LoadIo(_)
                | EmuError::LoadTooLarge(_)
                | EmuError::LoadTooSmall(_)
                | EmuError::LoadUnsupportedMbc(_)
                | EmuError::LoadBadRomSize(_)
                | EmuError::LoadBadRamSize(_)
                | EmuError::LoadBadChecksum { .. }
        )
    }
}
