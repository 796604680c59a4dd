use thiserror::Error;

/// Errors that can occur while building a recipe catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Recipe '{0}' is defined more than once")]
    DuplicateRecipe(String),

    #[error("Recipe '{recipe}' lists ingredient '{ingredient}' with an amount of zero")]
    InvalidAmount { recipe: String, ingredient: String },

    #[error("Recipe '{recipe}' lists ingredient '{ingredient}' more than once")]
    DuplicateIngredient { recipe: String, ingredient: String },

    #[error("Recipe '{0}' has no ingredients")]
    EmptyRecipe(String),
}

/// Errors that can occur while expanding an item into its ingredients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpansionError {
    #[error("Recipe '{item}' depends on itself through {}", path.join(" -> "))]
    CyclicRecipe { item: String, path: Vec<String> },

    #[error("Quantity of '{ingredient}' needed for '{item}' does not fit in 64 bits")]
    QuantityOverflow { item: String, ingredient: String },
}

/// Errors raised when validating a crafting request before it reaches the expander.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Invalid {field}: {value} (must be at least 1)")]
    InvalidQuantity { field: &'static str, value: u64 },

    #[error("Quantity {quantity} exceeds the limit of {limit} for smelter level {level}")]
    QuantityAboveLimit { quantity: u64, limit: u64, level: u8 },

    #[error("{quantity} per batch times {batch_size} batches does not fit in 64 bits")]
    TotalQuantityOverflow { quantity: u64, batch_size: u64 },

    #[error("Unknown smelter level {0}")]
    UnknownSmelterLevel(u8),

    #[error("'{0}' is not a craftable item")]
    UnknownItem(String),

    #[error(transparent)]
    Expansion(#[from] ExpansionError),
}
