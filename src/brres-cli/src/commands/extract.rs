//! Extract command - split a container into standalone archives

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::Config;
use crate::input::Container;

/// Handle the extract command
///
/// # Arguments
/// * `input` - Container file to split
/// * `output` - Output directory override
/// * `organize` / `flat` - Category folder overrides (mutually exclusive)
/// * `mmap` - Map the input instead of reading it
pub fn handle(
    input: &Path,
    output: Option<&Path>,
    organize: bool,
    flat: bool,
    mmap: bool,
) -> Result<()> {
    let config = Config::load()?;
    let output_dir = config.resolve_output_dir(output, input);
    let organize = config.resolve_organize(organize, flat);

    let container = Container::open(input, mmap)?;
    let report = brres::extract_bytes(&container, &output_dir, organize);

    if report.magics == 0 {
        println!("No occurrences of 'bres' found in {}", input.display());
        return Ok(());
    }
    if report.chunks == 0 {
        println!(
            "Found {} 'bres' magic(s) in {} but none starts a complete archive",
            report.magics,
            input.display()
        );
        return Ok(());
    }

    for path in &report.written {
        println!("Created: {}", path.display());
    }

    println!(
        "\nExtracted {} archive(s) into {} ({} file(s) written)",
        report.chunks,
        output_dir.display(),
        report.written.len()
    );

    if !report.is_complete() {
        eprintln!("\n{} write(s) failed:", report.failures.len());
        for failure in &report.failures {
            eprintln!("  output_{}: {}", failure.index, failure.error);
        }
        bail!(
            "{} of {} file(s) could not be written",
            report.failures.len(),
            report.failures.len() + report.written.len()
        );
    }

    Ok(())
}
