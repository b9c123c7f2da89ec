use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "job_category")]
pub enum Category {
    #[serde(rename = "IT")]
    #[sqlx(rename = "IT")]
    It,
    #[serde(rename = "Food_And_Drink")]
    #[sqlx(rename = "Food_And_Drink")]
    FoodAndDrink,
    Drinks,
    Office,
    Courier,
    #[serde(rename = "Shop_Assistant")]
    #[sqlx(rename = "Shop_Assistant")]
    ShopAssistant,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::It,
        Category::FoodAndDrink,
        Category::Drinks,
        Category::Office,
        Category::Courier,
        Category::ShopAssistant,
    ];

    /// Wire name, as used in JSON and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::It => "IT",
            Category::FoodAndDrink => "Food_And_Drink",
            Category::Drinks => "Drinks",
            Category::Office => "Office",
            Category::Courier => "Courier",
            Category::ShopAssistant => "Shop_Assistant",
        }
    }

    pub fn invalid_value_message() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
        format!("Category must be one of: {}.", names.join(", "))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown job category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
