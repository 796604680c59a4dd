use crate::error::ExpansionError;
use crate::recipe::{Catalog, Recipe};
use tracing::{debug, warn};

mod totals;

pub use totals::IngredientTotals;

/// Expands craftable items into the full set of ingredients they require.
///
/// Every craftable ingredient is replaced by its own recipe until only raw
/// materials remain. Intermediate items stay in the result alongside the raw
/// materials they break down into, so `Alloy` reports the `Iron Ingot` it
/// needs as well as the `Iron Ore` and `Wood` behind that ingot.
///
/// An `Expander` only borrows its catalog and keeps no state between calls,
/// so it can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    catalog: &'a Catalog,
}

impl<'a> Expander<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Computes the ingredients needed to craft `quantity` units of `item`.
    ///
    /// # Returns
    ///
    /// * `Ok(IngredientTotals)`: a fresh map of every ingredient at every depth.
    ///   The map is empty when `item` is a raw material.
    /// * `Err(ExpansionError)`: if the catalog contains a dependency cycle
    ///   reachable from `item`, or a total does not fit in a `u64`.
    pub fn expand(&self, item: &str, quantity: u64) -> Result<IngredientTotals, ExpansionError> {
        let mut totals = IngredientTotals::new();
        self.expand_into(item, quantity, &mut totals)?;
        Ok(totals)
    }

    /// Like [`Expander::expand`], but accumulates into an existing map.
    ///
    /// On error, `totals` may already hold part of the expansion.
    pub fn expand_into(
        &self,
        item: &str,
        quantity: u64,
        totals: &mut IngredientTotals,
    ) -> Result<(), ExpansionError> {
        let mut path = Vec::new();
        self.expand_recursive(item, quantity, totals, &mut path)
    }

    fn expand_recursive(
        &self,
        item: &str,
        quantity: u64,
        totals: &mut IngredientTotals,
        path: &mut Vec<&'a str>,
    ) -> Result<(), ExpansionError> {
        let Some(recipe) = self.catalog.lookup(item) else {
            // Raw material: the parent already counted it
            return Ok(());
        };

        if path.contains(&recipe.name()) {
            let mut cycle: Vec<String> = path.iter().map(|s| s.to_string()).collect();
            cycle.push(recipe.name().to_string());
            warn!(item = recipe.name(), path = ?cycle, "cyclic recipe detected");
            return Err(ExpansionError::CyclicRecipe {
                item: recipe.name().to_string(),
                path: cycle,
            });
        }

        let multiplier = craft_count(recipe, quantity);
        debug!(
            item = recipe.name(),
            quantity,
            multiplier,
            depth = path.len(),
            "expanding recipe"
        );

        let scaled = recipe
            .ingredients()
            .iter()
            .map(|ingredient| {
                ingredient
                    .amount
                    .checked_mul(multiplier)
                    .map(|amount| (ingredient.name.as_str(), amount))
                    .ok_or_else(|| ExpansionError::QuantityOverflow {
                        item: recipe.name().to_string(),
                        ingredient: ingredient.name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for &(ingredient, amount) in &scaled {
            totals
                .add(ingredient, amount)
                .ok_or_else(|| ExpansionError::QuantityOverflow {
                    item: recipe.name().to_string(),
                    ingredient: ingredient.to_string(),
                })?;
        }

        path.push(recipe.name());
        for &(ingredient, amount) in &scaled {
            self.expand_recursive(ingredient, amount, totals, path)?;
        }
        path.pop();

        Ok(())
    }
}

/// Number of crafts of `recipe` needed for `quantity` units.
///
/// Floor division by the recipe's yield, never less than one. Recipes without a
/// declared yield produce one unit per craft, so the count equals `quantity`.
fn craft_count(recipe: &Recipe, quantity: u64) -> u64 {
    (quantity / recipe.yield_per_craft()).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::CRAFTING_ITEM;

    #[test]
    fn craft_count_defaults_to_quantity() {
        let catalog = Catalog::survival_island();
        let charcoal = catalog.lookup("Charcoal").unwrap();
        assert_eq!(craft_count(charcoal, 5), 5);
        assert_eq!(craft_count(charcoal, 0), 1);
    }

    #[test]
    fn craft_count_floors_by_yield() {
        let catalog = Catalog::builder()
            .with_recipe("Nails", [("Iron Ingot", 1), (CRAFTING_ITEM, 4)])
            .build()
            .unwrap();
        let nails = catalog.lookup("Nails").unwrap();
        assert_eq!(craft_count(nails, 10), 2);
        assert_eq!(craft_count(nails, 3), 1);
    }
}
