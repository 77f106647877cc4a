pub mod charts;
pub mod filter_panel;
pub mod stat_card;
pub mod ui;

pub use filter_panel::FilterPanel;
pub use stat_card::StatCard;
