//! Main application state structure.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::{Dimensions, FileInfo, LoadEvent};
use crate::loader::{self, BitSequence};
use crate::util::format_bytes;

/// Main application state.
///
/// Single owner of all mutable state: mutation happens on the UI thread
/// through the methods below, so no locking is needed. Loader threads only
/// communicate through the channel.
pub struct BitGridApp {
    /// Bits of the displayed file. Empty until the first load completes.
    pub bits: BitSequence,
    /// Name and size of the displayed file; `None` before the first load.
    pub file: Option<FileInfo>,
    /// Canvas size in pixels.
    pub dimensions: Dimensions,
    /// Index of the grid cell under the pointer, or `None`.
    pub hovered: Option<usize>,
    /// Whether a file is currently being dragged over the window.
    pub is_drop_target: bool,
    /// File to load on the first frame (from the command line).
    pub initial_file: Option<PathBuf>,
    /// Loads started but not yet completed or failed.
    pending_loads: usize,
    /// Receiving end for loader completions.
    load_rx: Receiver<LoadEvent>,
    /// Sender cloned into each loader thread.
    load_tx: Sender<LoadEvent>,
}

impl Default for BitGridApp {
    fn default() -> Self {
        let (load_tx, load_rx) = mpsc::channel();
        Self {
            bits: BitSequence::default(),
            file: None,
            dimensions: Dimensions::default(),
            hovered: None,
            is_drop_target: false,
            initial_file: None,
            pending_loads: 0,
            load_rx,
            load_tx,
        }
    }
}

impl BitGridApp {
    /// Create a new application instance.
    #[allow(dead_code)]
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::new_with_file(cc, None)
    }

    /// Create a new application instance with an optional initial file to load.
    pub fn new_with_file(_cc: &eframe::CreationContext<'_>, initial_file: Option<PathBuf>) -> Self {
        Self {
            initial_file,
            ..Self::default()
        }
    }

    /// Start loading `path` on a background thread.
    ///
    /// Does not cancel loads already in flight; whichever completion is
    /// drained last wins.
    pub fn begin_load(&mut self, path: PathBuf) {
        log::info!("loading {}", path.display());
        self.pending_loads += 1;
        loader::spawn_load(path, self.load_tx.clone());
    }

    /// Drain completed loads. Returns true if the displayed file changed.
    ///
    /// Each `Loaded` event replaces the bit sequence wholesale; failures are
    /// logged and leave the previous visualization untouched.
    pub fn poll_loads(&mut self) -> bool {
        let mut changed = false;

        loop {
            match self.load_rx.try_recv() {
                Ok(LoadEvent::Loaded { info, bits }) => {
                    log::info!(
                        "loaded {} ({}), {} bits",
                        info.name,
                        format_bytes(info.size),
                        bits.len()
                    );
                    self.bits = bits;
                    self.file = Some(info);
                    self.hovered = None;
                    self.pending_loads = self.pending_loads.saturating_sub(1);
                    changed = true;
                }
                Ok(LoadEvent::Failed { path, error }) => {
                    log::error!("failed to load {}: {error}", path.display());
                    self.pending_loads = self.pending_loads.saturating_sub(1);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }

        changed
    }

    /// Whether any load is still in flight.
    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }
}
