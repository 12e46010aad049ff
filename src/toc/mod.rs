pub mod builder;
pub mod tree;

pub use builder::{inject_toc, Pass, Section, TocBuilder};
pub use tree::{compare_keys, is_numeric_key, KeyTree};

/// Marker convention defaults, shared between options and config
pub const SECTION_ID_PREFIX: &str = "section";
pub const TOC_LEVEL_CLASS_PREFIX: &str = "tocLevel";
pub const TOC_ROOT_ID: &str = "tocRoot";
pub const SEPARATOR: char = '-';
pub const TOC_LIST_CLASS: &str = "toc";

/// Options for table of contents generation
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Identifier prefix that marks an element as a section
    pub section_prefix: String,
    /// Separator between path segments in a section identifier
    pub separator: char,
    /// Identifier of the container the generated lists are placed in
    pub toc_root_id: String,
    /// Class prefix for list items; the 1-based depth is appended
    pub level_class_prefix: String,
    /// Class applied to every generated list
    pub list_class: String,
}

impl Default for TocOptions {
    fn default() -> Self {
        TocOptions {
            section_prefix: SECTION_ID_PREFIX.to_string(),
            separator: SEPARATOR,
            toc_root_id: TOC_ROOT_ID.to_string(),
            level_class_prefix: TOC_LEVEL_CLASS_PREFIX.to_string(),
            list_class: TOC_LIST_CLASS.to_string(),
        }
    }
}
