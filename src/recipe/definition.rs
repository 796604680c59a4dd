use serde::Serialize;

/// Pseudo-ingredient naming how many units a single craft produces.
///
/// It is never treated as a material: the expander reads it as a divisor and
/// skips it when accumulating totals.
pub const CRAFTING_ITEM: &str = "Crafting Item";

/// A single direct requirement of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: u64,
}

/// The direct ingredients needed for one craft of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crafting_item: Option<u64>,
}

impl Recipe {
    pub(crate) fn new(
        name: String,
        ingredients: Vec<Ingredient>,
        crafting_item: Option<u64>,
    ) -> Self {
        Self {
            name,
            ingredients,
            crafting_item,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct material ingredients in declaration order, without the
    /// [`CRAFTING_ITEM`] pseudo-ingredient.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// The [`CRAFTING_ITEM`] amount, or 1 when the recipe does not declare one.
    pub fn yield_per_craft(&self) -> u64 {
        self.crafting_item.unwrap_or(1)
    }

    /// Amount of `ingredient` needed for one craft, if the recipe uses it directly.
    pub fn amount_of(&self, ingredient: &str) -> Option<u64> {
        if ingredient == CRAFTING_ITEM {
            return self.crafting_item;
        }
        self.ingredients
            .iter()
            .find(|i| i.name == ingredient)
            .map(|i| i.amount)
    }
}
