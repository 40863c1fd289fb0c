//! Utilities for working with HSF file paths

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{ExtensionError, Result};

/// File suffix of compressed streams.
pub const HSF_EXTENSION: &str = "hsf";

/// Path a compressed copy of `input` is written to: `<input>.hsf`.
pub fn compressed_path(input: &Path) -> PathBuf {
    let mut os = input.as_os_str().to_os_string();
    os.push(".");
    os.push(HSF_EXTENSION);
    PathBuf::from(os)
}

/// Path a decompressed copy of `input` is written to: `input` with the
/// `.hsf` suffix stripped. Fails when the suffix is absent, since the
/// output location would otherwise be a guess.
pub fn decompressed_path(input: &Path) -> Result<PathBuf> {
    if input.extension() == Some(OsStr::new(HSF_EXTENSION)) {
        Ok(input.with_extension(""))
    } else {
        Err(ExtensionError::UnsupportedExtension(input.display().to_string()).into())
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_compressed_path_appends_suffix() {
        assert_eq!(
            compressed_path(Path::new("genome.txt")),
            PathBuf::from("genome.txt.hsf")
        );
        assert_eq!(compressed_path(Path::new("reads")), PathBuf::from("reads.hsf"));
    }

    #[test]
    fn test_decompressed_path_strips_suffix() {
        assert_eq!(
            decompressed_path(Path::new("genome.txt.hsf")).unwrap(),
            PathBuf::from("genome.txt")
        );
        assert_eq!(
            decompressed_path(Path::new("reads.hsf")).unwrap(),
            PathBuf::from("reads")
        );
    }

    #[test]
    fn test_decompressed_path_requires_suffix() {
        let err = decompressed_path(Path::new("genome.txt")).unwrap_err();
        assert!(matches!(err, Error::ExtensionError(_)));
    }

    #[test]
    fn test_round_trip_paths() {
        let original = Path::new("data/chr1.seq");
        let packed = compressed_path(original);
        assert_eq!(decompressed_path(&packed).unwrap(), original);
    }
}
