use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single recipe entry
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Ingredient {
    /// Ingredient name, e.g. "water"
    pub name: String,
    /// Display color of the ingredient layer
    pub color: String,
    /// Proportion of the drink made of this ingredient
    pub parts: u32,
}

/// A drink as held by the store
#[derive(Debug, Clone, PartialEq)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// A drink that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Recipe entry without the ingredient name
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct IngredientSummary {
    pub color: String,
    pub parts: u32,
}

/// Public representation of a drink
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct DrinkSummary {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<IngredientSummary>,
}

/// Full representation of a drink, including ingredient names
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct DrinkDetail {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    /// The short view, used by the public listing
    pub fn short(&self) -> DrinkSummary {
        DrinkSummary {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|ingredient| IngredientSummary {
                    color: ingredient.color.clone(),
                    parts: ingredient.parts,
                })
                .collect(),
        }
    }

    /// The long view
    pub fn long(&self) -> DrinkDetail {
        DrinkDetail {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.clone(),
        }
    }
}

impl NewDrink {
    /// The demo drink inserted when the database is reset
    pub fn water() -> Self {
        Self {
            title: "water".to_string(),
            recipe: vec![Ingredient {
                name: "water".to_string(),
                color: "blue".to_string(),
                parts: 1,
            }],
        }
    }
}
