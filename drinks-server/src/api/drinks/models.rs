use crate::models::{DrinkDetail, DrinkSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public drink listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DrinkSummaries {
    pub success: bool,
    pub drinks: Vec<DrinkSummary>,
}

/// Drinks with full recipes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DrinkDetails {
    pub success: bool,
    pub drinks: Vec<DrinkDetail>,
}

/// Confirmation of a deleted drink
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedDrink {
    pub success: bool,
    /// Id of the removed drink
    pub delete: i64,
}

impl DrinkSummaries {
    pub fn new(drinks: Vec<DrinkSummary>) -> Self {
        Self {
            success: true,
            drinks,
        }
    }
}

impl DrinkDetails {
    pub fn new(drinks: Vec<DrinkDetail>) -> Self {
        Self {
            success: true,
            drinks,
        }
    }
}
