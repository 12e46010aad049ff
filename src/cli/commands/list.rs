use log::debug;
use std::fs;
use std::path::Path;

use crate::config::{config_source_dir, load_config};
use crate::dom::parse_html;
use crate::toc::{Pass, Section, TocBuilder};
use crate::utils::error::BoxResult;

/// Handle the list command: print every discovered section marker,
/// numeric pass first, in the order the TOC would present them.
/// Duplicate section paths surface here as errors, making this the
/// diagnostic companion to generate.
pub fn handle_list_command(source: &Path, json: bool, config_file: Option<&Path>) -> BoxResult<()> {
    let config = load_config(config_source_dir(source), config_file)?;
    let html = fs::read_to_string(source)?;
    let document = parse_html(&html)?;
    let builder = TocBuilder::new(config.toc_options());

    // Building both fragments validates the paths before printing
    for pass in [Pass::Numeric, Pass::Alphabetic] {
        builder.toc_fragment(&document, pass)?;
    }

    let sections = builder.scan_sections(&document);
    debug!("Found {} section markers in {}", sections.len(), source.display());

    if json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for line in section_lines(&sections, config.toc_options().separator) {
        println!("{}", line);
    }
    Ok(())
}

/// Text output lines, one per marker: numeric-pass sections first, then
/// alphabetic, each as `id<TAB>joined-path`
fn section_lines(sections: &[Section], separator: char) -> Vec<String> {
    let sep = separator.to_string();
    let mut lines = Vec::new();
    for pass in [Pass::Numeric, Pass::Alphabetic] {
        for section in sections.iter().filter(|s| Pass::of(&s.path[0]) == pass) {
            lines.push(format!("{}\t{}", section.id, section.path.join(&sep)));
        }
    }
    lines
}
