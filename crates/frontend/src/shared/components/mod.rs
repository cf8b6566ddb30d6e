pub mod bar_chart;
pub mod confirm_delete;
pub mod filter_panel;
pub mod filter_select;
pub mod list_filters;
pub mod pagination_controls;
pub mod stat_card;
