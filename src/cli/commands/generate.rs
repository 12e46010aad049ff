use log::{debug, info, LevelFilter};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cli::logging::set_log_level;
use crate::config::{config_source_dir, load_config};
use crate::toc::{inject_toc, TocOptions};
use crate::utils::error::BoxResult;

/// Handle the generate command
pub fn handle_generate_command(
    source: &Path,
    destination: Option<&PathBuf>,
    quiet: bool,
    verbose: bool,
    config_file: Option<&Path>,
) -> BoxResult<()> {
    if verbose {
        set_log_level(LevelFilter::Debug);
    } else if quiet {
        set_log_level(LevelFilter::Error);
    }

    // Default config lives next to the documents being processed
    let config = load_config(config_source_dir(source), config_file)?;
    let options = config.toc_options();
    let destination = destination.cloned().or_else(|| config.destination.clone());

    if source.is_dir() {
        generate_tree(source, destination.as_deref(), &options)
    } else {
        let target = resolve_target(source, destination.as_deref())?;
        process_file(source, &target, &options)
    }
}

/// Process every HTML file under a source directory, mirroring the
/// directory layout under the destination when one is given.
fn generate_tree(source: &Path, destination: Option<&Path>, options: &TocOptions) -> BoxResult<()> {
    let mut processed = 0;
    for entry in WalkDir::new(source).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() || !is_html(entry.path()) {
            continue;
        }
        let target = match destination {
            Some(dest) => {
                let relative = entry.path().strip_prefix(source)?;
                let target = dest.join(relative);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                target
            }
            None => entry.path().to_path_buf(),
        };
        process_file(entry.path(), &target, options)?;
        processed += 1;
    }
    info!("Generated tables of contents for {} files", processed);
    Ok(())
}

/// A single-file destination may be a directory; keep the file name then
fn resolve_target(source: &Path, destination: Option<&Path>) -> BoxResult<PathBuf> {
    match destination {
        Some(dest) if dest.is_dir() => {
            let name = source
                .file_name()
                .ok_or_else(|| format!("source has no file name: {}", source.display()))?;
            Ok(dest.join(name))
        }
        Some(dest) => Ok(dest.to_path_buf()),
        None => Ok(source.to_path_buf()),
    }
}

fn is_html(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("html") | Some("htm")
    )
}

fn process_file(source: &Path, target: &Path, options: &TocOptions) -> BoxResult<()> {
    debug!("Processing {}", source.display());
    let html = fs::read_to_string(source)?;
    let rendered = inject_toc(&html, options)?;
    fs::write(target, rendered)?;
    info!("Wrote {}", target.display());
    Ok(())
}
