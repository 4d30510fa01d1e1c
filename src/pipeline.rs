//! End-to-end run: discover, scan, interleave, name, report, copy.

use std::path::Path;

use futures::future::join_all;

use crate::copier::{self, CopyJob, CopySummary};
use crate::error::WeaveError;
use crate::interleave::interleave;
use crate::naming;
use crate::scan;

/// Name of the directory holding one subdirectory per input sequence.
pub const INPUT_DIR: &str = "input";
/// Name of the flattened output directory, created if absent.
pub const OUTPUT_DIR: &str = "output";

/// Run a full weave against `root` (the working directory).
///
/// Prints the console report along the way and returns the copy summary
/// on success. Every failure is terminal and leaves any files already
/// copied in place.
pub async fn run(root: &Path) -> Result<CopySummary, WeaveError> {
    let input_dir = root.join(INPUT_DIR);
    let output_dir = root.join(OUTPUT_DIR);

    if !scan::is_directory(&input_dir).await {
        return Err(WeaveError::InputMissing { path: input_dir });
    }

    let mut input_dirs = scan::filter_directories(scan::list_entries(&input_dir).await?).await;
    input_dirs.sort();
    if input_dirs.is_empty() {
        return Err(WeaveError::NoInputs { path: input_dir });
    }

    println!("Going with these input dirs in this order:");
    for dir in &input_dirs {
        println!("\t - {}", dir.display());
    }

    if !scan::is_directory(&output_dir).await {
        println!(
            "could not find output dir at {}, creating...",
            output_dir.display()
        );
        tokio::fs::create_dir(&output_dir)
            .await
            .map_err(|source| WeaveError::CreateOutput {
                path: output_dir.clone(),
                source,
            })?;
    }

    // Per-directory listings are independent; scan them all at once.
    // File order within each directory is whatever the filesystem
    // returns - only the directories themselves are sorted.
    let listings = join_all(input_dirs.iter().map(|dir| async move {
        Ok::<_, WeaveError>(scan::filter_by_extension(
            scan::list_entries(dir).await?,
            scan::IMAGE_EXTENSIONS,
        ))
    }))
    .await;

    let mut sequences = Vec::with_capacity(listings.len());
    for listing in listings {
        sequences.push(listing?);
    }

    let entries = interleave(sequences);
    if entries.is_empty() {
        return Err(WeaveError::NoFiles);
    }

    for entry in &entries {
        println!("{}", naming::listing_line(entry));
    }

    let width = naming::magnitude(entries.len());
    let jobs = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| CopyJob {
            from: entry.file_path.clone(),
            to: output_dir.join(naming::output_name(position, width, &entry.file_path)),
        })
        .collect();

    let summary = copier::copy_all(jobs).await?;

    tracing::info!(
        files = summary.files_copied,
        bytes = summary.bytes_copied,
        duration_ms = summary.duration_ms,
        "Weave complete"
    );

    println!("done");
    Ok(summary)
}
