use super::category::Category;

/// Identifier carried by an unused slot.
pub const SENTINEL_ID: i32 = -1;

/// A single inventory entry.
///
/// `price` is stored in minor units (cents).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub quantity: i64,
    pub category: Category,
}

impl Item {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        price: i64,
        quantity: i64,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            category,
        }
    }

    /// Whether this is the unused-slot marker that ends the active data
    pub fn is_sentinel(&self) -> bool {
        self.id == SENTINEL_ID
    }
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: SENTINEL_ID,
            name: String::new(),
            price: -1,
            quantity: -1,
            category: Category::Uncategorized,
        }
    }
}
