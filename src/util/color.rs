//! Fixed palette for the Bitgrid UI.
//!
//! The grid itself stays strictly black-on-white so the data reads without
//! interpretation; everything else is muted chrome around it.

use eframe::egui::Color32;

/// Canvas background. Shows through the unpainted tail of a ragged last row.
pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

/// Fill for set bits (byte == ASCII '1').
pub const BIT_SET: Color32 = Color32::BLACK;

/// Fill for clear bits (every other byte value).
pub const BIT_CLEAR: Color32 = Color32::WHITE;

/// Outline of the cell under the pointer.
pub const HOVER_OUTLINE: Color32 = Color32::RED;

/// Border around the whole canvas.
pub const CANVAS_BORDER: Color32 = Color32::BLACK;

/// Controls panel background.
pub const PANEL_DARK: Color32 = Color32::from_rgb(0x16, 0x18, 0x1A);

/// Page background behind the canvas.
pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(0x1E, 0x20, 0x23);

/// Primary text.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xE8, 0xEA, 0xEC);

/// De-emphasized text.
pub const MUTED_TEXT: Color32 = Color32::from_rgb(0x8A, 0x92, 0x99);

/// Accent for the drop indicator, load status and hover readout.
pub const ACCENT: Color32 = Color32::from_rgb(0x4F, 0xC3, 0xF7);
