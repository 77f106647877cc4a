pub mod components;
pub mod data;
pub mod date_utils;
pub mod export;
pub mod forms;
pub mod format;
pub mod icons;
