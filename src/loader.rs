//! File loading: raw bytes to a [`BitSequence`], off the UI thread.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use memmap2::Mmap;

use crate::app::{FileInfo, LoadEvent};

// =============================================================================
// Bit Sequence
// =============================================================================

/// Ordered boolean sequence derived from a file's bytes.
///
/// One element per raw byte, in file order: true iff the byte is ASCII '1'
/// (0x31). This is a byte-value test, not a bit unpacking and not a text
/// decode, so multi-byte UTF-8 sequences still contribute one element per
/// byte. Immutable once produced; a new load replaces it wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    /// Decode raw bytes. Total: every byte value maps to a boolean.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            bits: data.iter().map(|&b| b == b'1').collect(),
        }
    }

    /// Number of bits, equal to the source byte count.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Iterate bits in file order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Read and decode `path` synchronously.
///
/// An empty file is a valid, empty sequence; it is special-cased because a
/// zero-length mapping is rejected by the OS.
pub fn read_bit_file(path: &Path) -> io::Result<(FileInfo, BitSequence)> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();

    let bits = if size == 0 {
        BitSequence::default()
    } else {
        let mmap = unsafe { Mmap::map(&file)? };
        BitSequence::from_bytes(&mmap)
    };

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok((FileInfo { name, size }, bits))
}

/// Read `path` on a background thread and deliver the outcome on `tx`.
///
/// Loads are never cancelled: starting a second load while one is in flight
/// lets both run to completion, and whichever event is drained last wins.
pub fn spawn_load(path: PathBuf, tx: Sender<LoadEvent>) {
    thread::spawn(move || {
        let event = match read_bit_file(&path) {
            Ok((info, bits)) => LoadEvent::Loaded { info, bits },
            Err(error) => LoadEvent::Failed { path, error },
        };
        // The receiver is gone during shutdown; nothing to deliver then.
        let _ = tx.send(event);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ascii_ones_only() {
        let bits = BitSequence::from_bytes(b"1010");
        assert_eq!(bits.len(), 4);
        let collected: Vec<bool> = bits.iter().collect();
        assert_eq!(collected, [true, false, true, false]);
    }

    #[test]
    fn every_other_byte_value_is_false() {
        let data: Vec<u8> = (0..=255).collect();
        let bits = BitSequence::from_bytes(&data);
        assert_eq!(bits.len(), 256);
        for (byte, bit) in (0u8..=255).zip(bits.iter()) {
            assert_eq!(bit, byte == 0x31, "byte 0x{byte:02X}");
        }
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        let bits = BitSequence::from_bytes(&[]);
        assert!(bits.is_empty());
        assert_eq!(bits.get(0), None);
    }

    #[test]
    fn one_bit_per_byte_for_multibyte_text() {
        // "1é1" encodes as 0x31 0xC3 0xA9 0x31: four bytes, four bits.
        let data = "1é1".as_bytes();
        let bits = BitSequence::from_bytes(data);
        assert_eq!(bits.len(), 4);
        let collected: Vec<bool> = bits.iter().collect();
        assert_eq!(collected, [true, false, false, true]);
    }

    #[test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("bitgrid-loader-{}", std::process::id()));
        std::fs::write(&path, b"101").unwrap();

        let (info, bits) = read_bit_file(&path).unwrap();
        assert_eq!(info.size, 3);
        assert_eq!(bits.len(), 3);
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(1), Some(false));
        assert_eq!(bits.get(2), Some(true));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_file_loads_as_zero_bits() {
        let path =
            std::env::temp_dir().join(format!("bitgrid-loader-empty-{}", std::process::id()));
        std::fs::write(&path, b"").unwrap();

        let (info, bits) = read_bit_file(&path).unwrap();
        assert_eq!(info.size, 0);
        assert!(bits.is_empty());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("bitgrid-loader-does-not-exist");
        assert!(read_bit_file(&path).is_err());
    }
}
