mod loader;
mod types;

pub use loader::{config_source_dir, load_config};
pub use types::Config;
