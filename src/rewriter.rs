use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::patterns::{REPLACEMENT, TARGET};

/// Rewrite the prompt block of the `.bashrc` file at `input_path`.
///
/// The result is written to `output_path` when given, otherwise back to
/// `input_path` in place. Fails if the file cannot be read, does not contain
/// the stock prompt block, or the result cannot be written. Every failure is
/// terminal; there are no retries and no rollback of a partial write.
pub fn rewrite(input_path: &Path, output_path: Option<&Path>) -> Result<()> {
    let out_path = resolve_output_path(input_path, output_path);

    println!("Input .bashrc path:\t{}", input_path.display());
    println!("Output .bashrc path:\t{}", out_path.display());

    let contents = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read file: {}", input_path.display()))?;
    debug!("Read {} bytes from {}", contents.len(), input_path.display());

    // Plain substring test; a block at offset 0 counts as present
    if !contents.contains(TARGET) {
        return Err(anyhow::anyhow!(
            "{} does not contain the expected prompt block:\n{}",
            input_path.display(),
            TARGET
        ));
    }

    let occurrences = contents.matches(TARGET).count();
    if occurrences > 1 {
        warn!(
            "Prompt block appears {} times in file, replacing all occurrences",
            occurrences
        );
    }

    let updated = contents.replace(TARGET, REPLACEMENT);

    fs::write(&out_path, &updated)
        .with_context(|| format!("Failed to write file: {}", out_path.display()))?;
    info!("Wrote {} bytes to {}", updated.len(), out_path.display());

    println!("Modifications completed!");
    Ok(())
}

/// An omitted output path means an in-place edit.
pub fn resolve_output_path(input_path: &Path, output_path: Option<&Path>) -> PathBuf {
    output_path.unwrap_or(input_path).to_path_buf()
}
