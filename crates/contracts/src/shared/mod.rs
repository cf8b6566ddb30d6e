pub mod config;
pub mod dates;
pub mod indicators;
pub mod list_view;
