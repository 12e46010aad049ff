pub mod cli;
pub mod config;
pub mod dom;
pub mod toc;
pub mod utils;
