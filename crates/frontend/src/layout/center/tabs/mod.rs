pub mod tab;
pub mod tab_bar;

pub use tab_bar::TabBar;
