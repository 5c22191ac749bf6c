//! Ratatui widgets for the docseek TUI.

pub mod command_bar;
pub mod help;
pub mod query_bar;
pub mod result_list;
pub mod status_bar;
