use chrono::NaiveDate;
use contracts::domain::product::{Product, StockStatus};
use contracts::enums::category::Category;

use crate::shared::date_utils::days_until;

// ============================================================================
// Expiry window
// ============================================================================

/// Expiry horizon offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryWindow {
    ThreeDays,
    SevenDays,
    ThirtyDays,
}

impl ExpiryWindow {
    pub fn days(&self) -> i64 {
        match self {
            ExpiryWindow::ThreeDays => 3,
            ExpiryWindow::SevenDays => 7,
            ExpiryWindow::ThirtyDays => 30,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ExpiryWindow::ThreeDays => "3-days",
            ExpiryWindow::SevenDays => "7-days",
            ExpiryWindow::ThirtyDays => "30-days",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpiryWindow::ThreeDays => "Expiring in 3 days",
            ExpiryWindow::SevenDays => "Expiring in 7 days",
            ExpiryWindow::ThirtyDays => "Expiring in 30 days",
        }
    }

    pub fn all() -> Vec<ExpiryWindow> {
        vec![
            ExpiryWindow::ThreeDays,
            ExpiryWindow::SevenDays,
            ExpiryWindow::ThirtyDays,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "3-days" => Some(ExpiryWindow::ThreeDays),
            "7-days" => Some(ExpiryWindow::SevenDays),
            "30-days" => Some(ExpiryWindow::ThirtyDays),
            _ => None,
        }
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Filter state for the product table. All criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryFilter {
    pub search: String,
    pub category: Option<Category>,
    pub status: Option<StockStatus>,
    pub supplier: Option<String>,
    pub expiry: Option<ExpiryWindow>,
}

impl InventoryFilter {
    /// Number of select filters in effect, shown on the panel toggle.
    /// The search term is not counted.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.category.is_some() {
            count += 1;
        }
        if self.status.is_some() {
            count += 1;
        }
        if self.supplier.is_some() {
            count += 1;
        }
        if self.expiry.is_some() {
            count += 1;
        }
        count
    }

    /// Applies the filter to the product list. The search term matches
    /// name, SKU or category name, case-insensitively. Expiry windows
    /// count from `today`; products already past their date fall into
    /// every window.
    pub fn apply(&self, products: &[Product], today: NaiveDate) -> Vec<Product> {
        let needle = self.search.trim().to_lowercase();
        products
            .iter()
            .filter(|product| {
                if !needle.is_empty() {
                    let hit = product.name.to_lowercase().contains(&needle)
                        || product.sku.to_lowercase().contains(&needle)
                        || product
                            .category
                            .display_name()
                            .to_lowercase()
                            .contains(&needle);
                    if !hit {
                        return false;
                    }
                }
                if let Some(category) = self.category {
                    if product.category != category {
                        return false;
                    }
                }
                if let Some(status) = self.status {
                    if product.status() != status {
                        return false;
                    }
                }
                if let Some(supplier) = &self.supplier {
                    if &product.supplier != supplier {
                        return false;
                    }
                }
                if let Some(window) = self.expiry {
                    if days_until(product.expiry_date, today) > window.days() {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }
}

/// Distinct suppliers in first-appearance order, for the supplier select.
pub fn supplier_options(products: &[Product]) -> Vec<String> {
    let mut suppliers: Vec<String> = Vec::new();
    for product in products {
        if !suppliers.contains(&product.supplier) {
            suppliers.push(product.supplier.clone());
        }
    }
    suppliers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::inventory::all_products;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 14).unwrap()
    }

    #[test]
    fn default_filter_keeps_everything() {
        let products = all_products();
        let filtered = InventoryFilter::default().apply(&products, today());
        assert_eq!(filtered.len(), products.len());
    }

    #[test]
    fn search_matches_name_sku_and_category() {
        let products = all_products();

        let by_sku = InventoryFilter {
            search: "juice-045".to_string(),
            ..Default::default()
        }
        .apply(&products, today());
        assert_eq!(by_sku.len(), 1);
        assert_eq!(by_sku[0].name, "Orange Juice 1L");

        // "dairy" hits the category, not the supplier name.
        let by_category = InventoryFilter {
            search: "dairy".to_string(),
            ..Default::default()
        }
        .apply(&products, today());
        assert_eq!(by_category.len(), 3);
        assert!(by_category.iter().all(|p| p.category == Category::Dairy));
    }

    #[test]
    fn category_and_status_narrow_together() {
        let products = all_products();
        let filter = InventoryFilter {
            category: Some(Category::Dairy),
            status: Some(StockStatus::Low),
            ..Default::default()
        };
        let filtered = filter.apply(&products, today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].sku, "MILK-001");
    }

    #[test]
    fn supplier_filter() {
        let products = all_products();
        let filter = InventoryFilter {
            supplier: Some("Fresh Farms Ltd".to_string()),
            ..Default::default()
        };
        let filtered = filter.apply(&products, today());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn expiry_windows_count_from_today() {
        let products = all_products();

        let three = InventoryFilter {
            expiry: Some(ExpiryWindow::ThreeDays),
            ..Default::default()
        }
        .apply(&products, today());
        assert_eq!(three.len(), 1);
        assert_eq!(three[0].sku, "VEG-102");

        let seven = InventoryFilter {
            expiry: Some(ExpiryWindow::SevenDays),
            ..Default::default()
        }
        .apply(&products, today());
        assert_eq!(seven.len(), 4);

        let thirty = InventoryFilter {
            expiry: Some(ExpiryWindow::ThirtyDays),
            ..Default::default()
        }
        .apply(&products, today());
        assert_eq!(thirty.len(), 7);
    }

    #[test]
    fn expired_products_fall_into_every_window() {
        let products = all_products();
        let late = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let filter = InventoryFilter {
            expiry: Some(ExpiryWindow::ThreeDays),
            ..Default::default()
        };
        let filtered = filter.apply(&products, late);
        // Everything but the March cola is expired or due within 3 days.
        assert_eq!(filtered.len(), 7);
        assert!(filtered.iter().any(|p| p.sku == "VEG-102"));
        assert!(filtered.iter().all(|p| p.sku != "BEV-234"));
    }

    #[test]
    fn active_count_skips_search() {
        let mut filter = InventoryFilter {
            search: "milk".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 0);

        filter.category = Some(Category::Dairy);
        filter.expiry = Some(ExpiryWindow::SevenDays);
        assert_eq!(filter.active_count(), 2);
    }

    #[test]
    fn supplier_options_are_distinct_in_order() {
        let suppliers = supplier_options(&all_products());
        assert_eq!(
            suppliers,
            vec![
                "Daily Dairy Co",
                "Bakery Express",
                "Fresh Farms Ltd",
                "Drinks Direct",
                "Quality Meats",
            ]
        );
    }
}
