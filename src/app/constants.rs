pub use dmge::ppu::{GB_HEIGHT, GB_WIDTH};

/// Integer scale factor for the window.
pub const SCALE_FACTOR: u32 = 3;
pub const WINDOW_WIDTH: u32 = GB_WIDTH as u32 * SCALE_FACTOR;
pub const WINDOW_HEIGHT: u32 = GB_HEIGHT as u32 * SCALE_FACTOR;
