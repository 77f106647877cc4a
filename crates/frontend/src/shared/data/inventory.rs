use chrono::NaiveDate;
use contracts::domain::product::{Product, ShelfLocation, StockAction, StockMovement};
use contracts::enums::Category;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn product(
    sku: &str,
    name: &str,
    quantity: u32,
    reorder_level: u32,
    location: &str,
    category: Category,
    supplier: &str,
    expiry_date: NaiveDate,
) -> Product {
    Product {
        sku: sku.to_string(),
        name: name.to_string(),
        quantity,
        reorder_level,
        location: ShelfLocation::new(location),
        category,
        supplier: supplier.to_string(),
        expiry_date,
    }
}

/// The inventory register.
pub fn all_products() -> Vec<Product> {
    vec![
        product(
            "MILK-001",
            "Whole Milk 2L",
            45,
            50,
            "A1-S3",
            Category::Dairy,
            "Daily Dairy Co",
            day(2024, 12, 20),
        ),
        product(
            "BAKE-023",
            "White Bread",
            120,
            80,
            "B2-S1",
            Category::Bakery,
            "Bakery Express",
            day(2024, 12, 18),
        ),
        product(
            "EGG-012",
            "Fresh Eggs (12)",
            0,
            40,
            "A1-S5",
            Category::Dairy,
            "Fresh Farms Ltd",
            day(2024, 12, 22),
        ),
        product(
            "JUICE-045",
            "Orange Juice 1L",
            78,
            60,
            "C3-S2",
            Category::Beverages,
            "Fresh Farms Ltd",
            day(2024, 12, 25),
        ),
        product(
            "CHEESE-008",
            "Cheddar Cheese 500g",
            32,
            30,
            "A1-S7",
            Category::Dairy,
            "Daily Dairy Co",
            day(2024, 12, 28),
        ),
        product(
            "VEG-102",
            "Tomatoes (kg)",
            15,
            25,
            "D1-S1",
            Category::Produce,
            "Fresh Farms Ltd",
            day(2024, 12, 17),
        ),
        product(
            "BEV-234",
            "Coca Cola 2L",
            156,
            100,
            "C2-S4",
            Category::Beverages,
            "Drinks Direct",
            day(2025, 3, 15),
        ),
        product(
            "MEAT-056",
            "Chicken Breast (kg)",
            42,
            35,
            "E1-S2",
            Category::Meat,
            "Quality Meats",
            day(2024, 12, 19),
        ),
    ]
}

/// Recent movement lines shown in the details panel.
pub fn stock_history() -> Vec<StockMovement> {
    vec![
        StockMovement {
            occurred_on: day(2024, 12, 14),
            action: StockAction::Received,
            delta: 50,
            recorded_by: "John D.".to_string(),
            note: "Morning delivery".to_string(),
        },
        StockMovement {
            occurred_on: day(2024, 12, 13),
            action: StockAction::Sold,
            delta: -23,
            recorded_by: "System".to_string(),
            note: "Daily sales".to_string(),
        },
        StockMovement {
            occurred_on: day(2024, 12, 12),
            action: StockAction::Adjusted,
            delta: -2,
            recorded_by: "Sarah M.".to_string(),
            note: "Damaged items".to_string(),
        },
        StockMovement {
            occurred_on: day(2024, 12, 11),
            action: StockAction::Sold,
            delta: -18,
            recorded_by: "System".to_string(),
            note: "Daily sales".to_string(),
        },
    ]
}

/// Aisle sections of the store map, row by row.
pub fn store_sections() -> Vec<String> {
    let mut sections = Vec::new();
    for row in ['A', 'B', 'C', 'D'] {
        for col in 1..=4 {
            sections.push(format!("{}{}", row, col));
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::StockStatus;

    #[test]
    fn register_has_expected_statuses() {
        let products = all_products();
        let statuses: Vec<StockStatus> = products.iter().map(|p| p.status()).collect();
        assert_eq!(
            statuses,
            vec![
                StockStatus::Low,
                StockStatus::Overstocked,
                StockStatus::Out,
                StockStatus::Optimal,
                StockStatus::Optimal,
                StockStatus::Low,
                StockStatus::Overstocked,
                StockStatus::Optimal,
            ]
        );
    }

    #[test]
    fn register_skus_are_unique() {
        let products = all_products();
        let mut skus: Vec<&str> = products.iter().map(|p| p.sku.as_str()).collect();
        skus.sort();
        skus.dedup();
        assert_eq!(skus.len(), products.len());
    }

    #[test]
    fn history_is_newest_first() {
        let history = stock_history();
        assert_eq!(history.len(), 4);
        for pair in history.windows(2) {
            assert!(pair[0].occurred_on > pair[1].occurred_on);
        }
    }

    #[test]
    fn store_map_covers_four_rows() {
        let sections = store_sections();
        assert_eq!(sections.len(), 16);
        assert_eq!(sections[0], "A1");
        assert_eq!(sections[15], "D4");
    }
}
