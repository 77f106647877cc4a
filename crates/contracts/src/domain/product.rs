use crate::enums::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Stock classification
// ============================================================================

/// Stock level band for a product, derived from quantity vs reorder level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    Optimal,
    Low,
    Out,
    Overstocked,
}

impl StockStatus {
    /// Derive the band. Overstock starts at 1.5x the reorder level.
    pub fn classify(quantity: u32, reorder_level: u32) -> Self {
        if quantity == 0 {
            StockStatus::Out
        } else if quantity < reorder_level {
            StockStatus::Low
        } else if quantity * 2 >= reorder_level * 3 {
            StockStatus::Overstocked
        } else {
            StockStatus::Optimal
        }
    }

    /// Stable code used in filters and CSS modifiers
    pub fn code(&self) -> &'static str {
        match self {
            StockStatus::Optimal => "optimal",
            StockStatus::Low => "low",
            StockStatus::Out => "out",
            StockStatus::Overstocked => "overstocked",
        }
    }

    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Optimal => "Optimal",
            StockStatus::Low => "Low Stock",
            StockStatus::Out => "Out of Stock",
            StockStatus::Overstocked => "Overstocked",
        }
    }

    /// All bands in filter display order
    pub fn all() -> Vec<StockStatus> {
        vec![
            StockStatus::Optimal,
            StockStatus::Low,
            StockStatus::Out,
            StockStatus::Overstocked,
        ]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "optimal" => Some(StockStatus::Optimal),
            "low" => Some(StockStatus::Low),
            "out" => Some(StockStatus::Out),
            "overstocked" => Some(StockStatus::Overstocked),
            _ => None,
        }
    }
}

// ============================================================================
// Shelf location
// ============================================================================

/// Physical shelf location, e.g. "A1-S3" = aisle A1, shelf 3.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShelfLocation(pub String);

impl ShelfLocation {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Aisle section before the dash; the key the store map highlights by.
    pub fn section(&self) -> &str {
        self.0.split('-').next().unwrap_or("")
    }
}

impl std::fmt::Display for ShelfLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Product
// ============================================================================

/// A stocked product as listed in the inventory register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub quantity: u32,
    pub reorder_level: u32,
    pub location: ShelfLocation,
    pub category: Category,
    pub supplier: String,
    pub expiry_date: NaiveDate,
}

impl Product {
    /// Current stock band. Recomputed so that quantity updates move the badge.
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.reorder_level)
    }
}

// ============================================================================
// Stock history
// ============================================================================

/// What a history line did to the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockAction {
    Received,
    Sold,
    Adjusted,
}

impl StockAction {
    pub fn label(&self) -> &'static str {
        match self {
            StockAction::Received => "Received",
            StockAction::Sold => "Sold",
            StockAction::Adjusted => "Adjusted",
        }
    }
}

/// One line of a product's stock movement history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub occurred_on: NaiveDate,
    pub action: StockAction,
    /// Signed quantity change
    pub delta: i32,
    pub recorded_by: String,
    pub note: String,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Why stock is being added outside a regular sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestockReason {
    Delivery,
    Recount,
    CustomerReturn,
    TransferIn,
}

impl RestockReason {
    pub fn code(&self) -> &'static str {
        match self {
            RestockReason::Delivery => "delivery",
            RestockReason::Recount => "recount",
            RestockReason::CustomerReturn => "customer-return",
            RestockReason::TransferIn => "transfer-in",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RestockReason::Delivery => "Supplier delivery",
            RestockReason::Recount => "Stock recount",
            RestockReason::CustomerReturn => "Customer return",
            RestockReason::TransferIn => "Transfer from another store",
        }
    }

    pub fn all() -> Vec<RestockReason> {
        vec![
            RestockReason::Delivery,
            RestockReason::Recount,
            RestockReason::CustomerReturn,
            RestockReason::TransferIn,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "delivery" => Some(RestockReason::Delivery),
            "recount" => Some(RestockReason::Recount),
            "customer-return" => Some(RestockReason::CustomerReturn),
            "transfer-in" => Some(RestockReason::TransferIn),
            _ => None,
        }
    }
}

/// Submitted by the inventory restock form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockRequest {
    pub sku: String,
    pub quantity: u32,
    pub reason: RestockReason,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_bands() {
        assert_eq!(StockStatus::classify(0, 40), StockStatus::Out);
        assert_eq!(StockStatus::classify(45, 50), StockStatus::Low);
        assert_eq!(StockStatus::classify(78, 60), StockStatus::Optimal);
        assert_eq!(StockStatus::classify(156, 100), StockStatus::Overstocked);
    }

    #[test]
    fn classify_boundaries() {
        // Exactly at the reorder level is healthy, 1.5x starts overstock.
        assert_eq!(StockStatus::classify(50, 50), StockStatus::Optimal);
        assert_eq!(StockStatus::classify(74, 50), StockStatus::Optimal);
        assert_eq!(StockStatus::classify(75, 50), StockStatus::Overstocked);
        assert_eq!(StockStatus::classify(49, 50), StockStatus::Low);
    }

    #[test]
    fn shelf_section() {
        assert_eq!(ShelfLocation::new("A1-S3").section(), "A1");
        assert_eq!(ShelfLocation::new("C3-S1").section(), "C3");
        assert_eq!(ShelfLocation::new("B2").section(), "B2");
    }

    #[test]
    fn status_follows_quantity() {
        let mut product = Product {
            sku: "MILK-001".to_string(),
            name: "Whole Milk 2L".to_string(),
            quantity: 45,
            reorder_level: 50,
            location: ShelfLocation::new("A1-S3"),
            category: Category::Dairy,
            supplier: "Daily Dairy Co".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
        };
        assert_eq!(product.status(), StockStatus::Low);
        product.quantity += 20;
        assert_eq!(product.status(), StockStatus::Optimal);
    }
}
