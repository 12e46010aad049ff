mod generate;
mod list;

pub use generate::handle_generate_command;
pub use list::handle_list_command;
