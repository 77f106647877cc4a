//! Seed datasets backing the dashboard, inventory, communication and
//! report pages. Times that read as "N mins ago" are built relative to
//! the `now` the caller passes in.

pub mod communication;
pub mod dashboard;
pub mod inventory;
pub mod reports;
