//! Request bodies of the mutating drink endpoints.
//!
//! Bodies are read as raw JSON so that the checks happen in the order the
//! API promises (authorization, then existence, then content) instead of
//! being rejected up front by an extractor.

use crate::errors::ApiError;
use crate::models::{Drink, Ingredient, NewDrink};
use log::{debug, error};
use serde_json::{Map, Value};

/// Parses the body of a create request.
///
/// A body that is not a JSON object is a server error, not a validation
/// error; clients have always received a 500 for it.
pub(super) fn new_drink(body: &[u8]) -> Result<NewDrink, ApiError> {
    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            error!("Create drink body is not an object: {}", json_kind(&other));
            return Err(ApiError::internal());
        }
        Err(e) => {
            error!("Create drink body is not valid JSON: {}", e);
            return Err(ApiError::internal());
        }
    };

    let title = fields
        .get("title")
        .ok_or_else(|| ApiError::unprocessable("title is required"))?;
    let recipe = fields
        .get("recipe")
        .ok_or_else(|| ApiError::unprocessable("recipe is required"))?;

    Ok(NewDrink {
        title: title_field(title)?,
        recipe: recipe_field(recipe)?,
    })
}

/// The fields an update may change. Anything else in the body is ignored.
#[derive(Debug, Default, PartialEq)]
pub(super) struct DrinkChanges {
    pub title: Option<String>,
    pub recipe: Option<Vec<Ingredient>>,
}

impl DrinkChanges {
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let fields: Map<String, Value> = serde_json::from_slice(body)
            .map_err(|_| ApiError::unprocessable("request body must be a JSON object"))?;

        for key in fields.keys() {
            if key != "title" && key != "recipe" {
                debug!("Ignoring non-updatable field '{}'", key);
            }
        }

        Ok(Self {
            title: fields.get("title").map(title_field).transpose()?,
            recipe: fields.get("recipe").map(recipe_field).transpose()?,
        })
    }

    pub fn apply(self, drink: &mut Drink) {
        if let Some(title) = self.title {
            drink.title = title;
        }
        if let Some(recipe) = self.recipe {
            drink.recipe = recipe;
        }
    }
}

fn title_field(value: &Value) -> Result<String, ApiError> {
    match value.as_str() {
        Some(title) if !title.trim().is_empty() => Ok(title.to_string()),
        _ => Err(ApiError::unprocessable("title must be a non-empty string")),
    }
}

/// Accepts a list of ingredients, or a single ingredient object
fn recipe_field(value: &Value) -> Result<Vec<Ingredient>, ApiError> {
    let entries = match value {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(_) => std::slice::from_ref(value),
        _ => return Err(ApiError::unprocessable("recipe must be a list of ingredients")),
    };

    entries
        .iter()
        .map(|entry| {
            serde_json::from_value::<Ingredient>(entry.clone()).map_err(|e| {
                ApiError::unprocessable(format!("invalid recipe ingredient: {e}"))
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
