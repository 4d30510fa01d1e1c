//! Snake interleaving of per-directory file lists.
//!
//! The merge walks the lists forward, then backward skipping the first
//! and last, and repeats until every list is drained. Ordering here is
//! the output contract, so this code stays strictly sequential.

use std::path::PathBuf;

/// One file in the merged output sequence, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListEntry {
    /// 0-based index of the originating input directory, in sorted
    /// discovery order.
    pub sequence_index: usize,
    /// Base filename, extension preserved.
    pub file_name: String,
    /// Full path to the source file.
    pub file_path: PathBuf,
}

impl FileListEntry {
    fn new(sequence_index: usize, file_path: PathBuf) -> Self {
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            sequence_index,
            file_name,
            file_path,
        }
    }
}

/// Merge per-directory file lists into one snake-ordered sequence.
///
/// Each inner pass takes at most one unread element per list: a forward
/// pass over every list, then a backward pass over the interior lists
/// only (for `i` from `N-2` down to `1`). Drained lists contribute
/// nothing but never error. Every input element appears in the output
/// exactly once, so the output length is the sum of the list lengths.
///
/// For one or two lists the backward range is empty and the merge
/// degenerates to forward draining in index order.
pub fn interleave(sequences: Vec<Vec<PathBuf>>) -> Vec<FileListEntry> {
    let total: usize = sequences.iter().map(|files| files.len()).sum();
    let mut cursors = vec![0usize; sequences.len()];
    let mut output = Vec::with_capacity(total);

    while output.len() < total {
        for i in 0..sequences.len() {
            take_next(&sequences, &mut cursors, &mut output, i);
        }
        for i in (1..sequences.len().saturating_sub(1)).rev() {
            take_next(&sequences, &mut cursors, &mut output, i);
        }
    }

    output
}

/// Advance list `i` by one element if it has any left, tagging the taken
/// element with its origin index.
fn take_next(
    sequences: &[Vec<PathBuf>],
    cursors: &mut [usize],
    output: &mut Vec<FileListEntry>,
    i: usize,
) {
    if cursors[i] < sequences[i].len() {
        let path = sequences[i][cursors[i]].clone();
        cursors[i] += 1;
        output.push(FileListEntry::new(i, path));
    }
}
