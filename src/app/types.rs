//! Core types and data structures for Bitgrid application state.

use std::io;
use std::path::PathBuf;

use crate::loader::BitSequence;

// =============================================================================
// Constants
// =============================================================================

/// Default canvas edge length in pixels (both width and height).
pub const DEFAULT_EDGE: u32 = 500;

/// Smallest accepted canvas edge length.
pub const MIN_EDGE: u32 = 1;

/// Largest accepted canvas edge length.
pub const MAX_EDGE: u32 = 3000;

// =============================================================================
// Dimensions
// =============================================================================

/// User-configurable canvas size in pixels.
///
/// Independent of the loaded file: resizing never changes which cells are
/// black or white, only how large each cell is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Canvas width in pixels, within `[MIN_EDGE, MAX_EDGE]`.
    pub width: u32,
    /// Canvas height in pixels, within `[MIN_EDGE, MAX_EDGE]`.
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_EDGE,
            height: DEFAULT_EDGE,
        }
    }
}

impl Dimensions {
    /// Restore the default size unconditionally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Self-correct out-of-range values rather than rejecting them.
    pub fn clamp(&mut self) {
        self.width = self.width.clamp(MIN_EDGE, MAX_EDGE);
        self.height = self.height.clamp(MIN_EDGE, MAX_EDGE);
    }
}

// =============================================================================
// File Info
// =============================================================================

/// Identity of the currently displayed file.
#[derive(Clone, Debug)]
pub struct FileInfo {
    /// File name, for the controls label.
    pub name: String,
    /// File size in bytes; also the bit count of the decoded sequence.
    pub size: u64,
}

// =============================================================================
// Load Events
// =============================================================================

/// Completion message from a loader thread.
///
/// Loader threads only communicate through these; all state mutation happens
/// on the UI thread when the channel is drained.
pub enum LoadEvent {
    /// The file was read and decoded.
    Loaded {
        /// Name and size of the loaded file.
        info: FileInfo,
        /// Decoded bit sequence, one bit per byte.
        bits: BitSequence,
    },
    /// The file could not be read. Reported to the log only; the previous
    /// visualization stays in place.
    Failed {
        /// Path that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        error: io::Error,
    },
}
