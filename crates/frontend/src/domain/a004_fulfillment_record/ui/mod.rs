pub mod advance_dialog;
pub mod details;
pub mod list;
