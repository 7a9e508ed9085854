use super::constants::*;

/// Timing and latch state for the mode machine. LY itself lives in the I/O
/// register file so that CPU writes to it (which reset it) need no extra
/// plumbing; everything here is invisible to the bus.
#[derive(Debug, Clone)]
pub struct PpuState {
    /// T-cycles accumulated inside the current mode.
    pub(super) mode_clock: u32,
    pub(super) mode: u8,
    /// The window keeps its own line counter; it only advances on lines the
    /// window actually rendered.
    pub(super) window_line: u8,
    /// Latched at mode-2 entry when LY == WY; cleared at frame wrap.
    pub(super) window_line_enable: bool,
    pub(super) stat_interrupt_line: bool,
    pub(super) vblank_just_occurred: bool,
    /// LCDC as read at the top of the current step.
    pub(super) lcdc: u8,
    /// Tracks the LCD-enable bit across steps to catch on/off edges.
    pub(super) lcd_was_enabled: bool,
}

impl PpuState {
    pub fn new() -> Self {
        PpuState {
            mode_clock: 0,
            mode: OAM_SCAN_MODE,
            window_line: 0,
            window_line_enable: false,
            stat_interrupt_line: false,
            vblank_just_occurred: false,
            lcdc: 0x91,
            lcd_was_enabled: true,
        }
    }

    /// State after the LCD is switched off: mode 0, clock stopped.
    pub(super) fn reset_for_lcd_off(&mut self) {
        self.mode_clock = 0;
        self.mode = HBLANK_MODE;
        self.window_line = 0;
        self.window_line_enable = false;
        self.stat_interrupt_line = false;
        self.vblank_just_occurred = false;
    }

    pub fn mode(&self) -> u8 {
        self.mode
    }
}
