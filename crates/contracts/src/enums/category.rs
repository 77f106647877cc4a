use serde::{Deserialize, Serialize};

/// Product categories stocked by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Dairy,
    Bakery,
    Beverages,
    Produce,
    Meat,
    Frozen,
}

impl Category {
    /// Stable code used in filters and query values
    pub fn code(&self) -> &'static str {
        match self {
            Category::Dairy => "dairy",
            Category::Bakery => "bakery",
            Category::Beverages => "beverages",
            Category::Produce => "produce",
            Category::Meat => "meat",
            Category::Frozen => "frozen",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Dairy => "Dairy",
            Category::Bakery => "Bakery",
            Category::Beverages => "Beverages",
            Category::Produce => "Produce",
            Category::Meat => "Meat",
            Category::Frozen => "Frozen",
        }
    }

    /// All categories in display order
    pub fn all() -> Vec<Category> {
        vec![
            Category::Dairy,
            Category::Bakery,
            Category::Beverages,
            Category::Produce,
            Category::Meat,
            Category::Frozen,
        ]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dairy" => Some(Category::Dairy),
            "bakery" => Some(Category::Bakery),
            "beverages" => Some(Category::Beverages),
            "produce" => Some(Category::Produce),
            "meat" => Some(Category::Meat),
            "frozen" => Some(Category::Frozen),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(Category::from_code("electronics"), None);
    }
}
