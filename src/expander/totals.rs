use ahash::AHashMap;
use itertools::Itertools;
use serde::Serialize;

/// Accumulated amount of every ingredient needed for an expansion.
///
/// Entries start at zero on first use and only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IngredientTotals {
    totals: AHashMap<String, u64>,
}

impl IngredientTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the running total of `ingredient`.
    ///
    /// Returns `None` if the total would overflow; the entry is left untouched.
    pub fn add(&mut self, ingredient: &str, amount: u64) -> Option<u64> {
        let entry = self.totals.entry(ingredient.to_string()).or_insert(0);
        *entry = entry.checked_add(amount)?;
        Some(*entry)
    }

    /// Total for `ingredient`, or 0 if it never appeared.
    pub fn get(&self, ingredient: &str) -> u64 {
        self.totals.get(ingredient).copied().unwrap_or(0)
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.totals.contains_key(ingredient)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries ordered by ingredient name, for stable output.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        self.iter().sorted_by(|a, b| a.0.cmp(b.0)).collect()
    }
}
