use super::definition::{CRAFTING_ITEM, Ingredient, Recipe};
use crate::error::CatalogError;
use ahash::AHashMap;

/// The fixed set of known recipes, keyed by item name.
///
/// Any name the catalog does not know is a raw material.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    index: AHashMap<String, usize>,
}

/// Collects recipe declarations and validates them into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    pending: Vec<(String, Vec<(String, u64)>)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipe<I, S>(mut self, name: &str, ingredients: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let ingredients = ingredients
            .into_iter()
            .map(|(ingredient, amount)| (ingredient.into(), amount))
            .collect();
        self.pending.push((name.to_string(), ingredients));
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::default();

        for (name, declared) in self.pending {
            if catalog.index.contains_key(&name) {
                return Err(CatalogError::DuplicateRecipe(name));
            }

            let mut ingredients: Vec<Ingredient> = Vec::with_capacity(declared.len());
            let mut crafting_item = None;
            for (ingredient, amount) in declared {
                if amount == 0 {
                    return Err(CatalogError::InvalidAmount {
                        recipe: name,
                        ingredient,
                    });
                }
                let repeated = if ingredient == CRAFTING_ITEM {
                    crafting_item.replace(amount).is_some()
                } else {
                    ingredients.iter().any(|i| i.name == ingredient)
                };
                if repeated {
                    return Err(CatalogError::DuplicateIngredient {
                        recipe: name,
                        ingredient,
                    });
                }
                if ingredient != CRAFTING_ITEM {
                    ingredients.push(Ingredient {
                        name: ingredient,
                        amount,
                    });
                }
            }

            if ingredients.is_empty() {
                return Err(CatalogError::EmptyRecipe(name));
            }

            catalog.index.insert(name.clone(), catalog.recipes.len());
            catalog
                .recipes
                .push(Recipe::new(name, ingredients, crafting_item));
        }

        Ok(catalog)
    }
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The refined materials of Survival Island's smelter.
    pub fn survival_island() -> Self {
        let builder = Self::builder()
            .with_recipe("Iron Ingot", [("Iron Ore", 2), ("Wood", 3)])
            .with_recipe("Charcoal", [("Wood", 2)])
            .with_recipe("Copper Ingot", [("Copper Ore", 3), ("Wood", 4)])
            .with_recipe("Sulfur", [("Sulfur Ore", 3), ("Wood", 4)])
            .with_recipe(
                "Alloy",
                [("Iron Ingot", 1), ("Copper Ingot", 1), ("Charcoal", 1)],
            )
            .with_recipe("Steel", [("Iron Ingot", 2), ("Lime", 2), ("Charcoal", 1)]);

        match builder.build() {
            Ok(catalog) => catalog,
            Err(e) => unreachable!("built-in recipe table is invalid: {}", e),
        }
    }

    /// Returns the recipe for `item`, or `None` if it is a raw material.
    pub fn lookup(&self, item: &str) -> Option<&Recipe> {
        self.index.get(item).map(|&i| &self.recipes[i])
    }

    pub fn contains(&self, item: &str) -> bool {
        self.index.contains_key(item)
    }

    /// Craftable item names in declaration order.
    pub fn item_names(&self) -> Vec<&str> {
        self.recipes.iter().map(Recipe::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_six_recipes_in_order() {
        let catalog = Catalog::survival_island();
        assert_eq!(
            catalog.item_names(),
            vec!["Iron Ingot", "Charcoal", "Copper Ingot", "Sulfur", "Alloy", "Steel"]
        );
    }

    #[test]
    fn crafting_item_is_kept_out_of_ingredients() {
        let catalog = Catalog::builder()
            .with_recipe("Nails", [("Iron Ingot", 1), (CRAFTING_ITEM, 10)])
            .build()
            .unwrap();
        let nails = catalog.lookup("Nails").unwrap();
        assert_eq!(nails.ingredients().len(), 1);
        assert_eq!(nails.yield_per_craft(), 10);
        assert_eq!(nails.amount_of(CRAFTING_ITEM), Some(10));
    }

    #[test]
    fn repeated_crafting_item_is_rejected() {
        let err = Catalog::builder()
            .with_recipe(
                "Nails",
                [("Iron Ingot", 1), (CRAFTING_ITEM, 10), (CRAFTING_ITEM, 5)],
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateIngredient {
                recipe: "Nails".to_string(),
                ingredient: CRAFTING_ITEM.to_string(),
            }
        );
    }
}
