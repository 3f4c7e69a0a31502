mod help_content;
pub mod help_popup_render;
mod help_state;

pub use help_content::HELP_ENTRIES;
pub use help_state::HelpState;
