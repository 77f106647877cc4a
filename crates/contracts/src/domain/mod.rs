pub mod communication;
pub mod dashboard;
pub mod product;
pub mod reports;
