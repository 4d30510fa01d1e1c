//! Output filename construction.
//!
//! Output files are numbered by position, zero-padded to the magnitude
//! of the total count, keeping each source file's extension untouched.

use std::path::Path;

use crate::interleave::FileListEntry;

/// Number of digits used to pad output indices: `ceil(log10(total))`.
///
/// `total = 1` yields width 0 under this formula, and exact powers of
/// ten yield `log10(total)` exactly. Both are kept as-is: padding never
/// truncates, so indices still render with at least one digit.
pub fn magnitude(total: usize) -> usize {
    (total as f64).log10().ceil() as usize
}

/// Decimal `position`, left-zero-padded to `width` digits.
pub fn pad(position: usize, width: usize) -> String {
    format!("{:0width$}", position)
}

/// Final output filename for the entry at `position`: the padded index
/// plus the source file's extension, case preserved.
pub fn output_name(position: usize, width: usize, source: &Path) -> String {
    match source.extension() {
        Some(ext) => format!("{}.{}", pad(position, width), ext.to_string_lossy()),
        None => pad(position, width),
    }
}

/// Human-readable listing line: the 2-digit sequence index, a hyphen,
/// and the base filename.
pub fn listing_line(entry: &FileListEntry) -> String {
    format!("{:02}-{}", entry.sequence_index, entry.file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn magnitude_matches_ceil_log10() {
        assert_eq!(magnitude(1), 0);
        assert_eq!(magnitude(2), 1);
        assert_eq!(magnitude(10), 1);
        assert_eq!(magnitude(57), 2);
        assert_eq!(magnitude(100), 2);
        assert_eq!(magnitude(101), 3);
    }

    #[test]
    fn pad_left_fills_with_zeros() {
        assert_eq!(pad(3, 2), "03");
        assert_eq!(pad(42, 4), "0042");
        assert_eq!(pad(123, 2), "123");
    }

    // Width 0 comes from magnitude(1); the index still renders.
    #[test]
    fn pad_never_truncates() {
        assert_eq!(pad(0, 0), "0");
    }

    #[test]
    fn output_name_preserves_extension_case() {
        let source = Path::new("/seq/IMG.JPG");
        assert_eq!(output_name(0, 2, source), "00.JPG");
        assert_eq!(output_name(7, 3, Path::new("/seq/frame.png")), "007.png");
    }

    #[test]
    fn listing_line_pads_sequence_index_to_two() {
        let entry = FileListEntry {
            sequence_index: 1,
            file_name: "IMG.JPG".to_string(),
            file_path: PathBuf::from("/seq/IMG.JPG"),
        };
        assert_eq!(listing_line(&entry), "01-IMG.JPG");
    }
}
