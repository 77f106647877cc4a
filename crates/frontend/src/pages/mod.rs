pub mod communication;
pub mod dashboard;
pub mod inventory;
pub mod reports;
