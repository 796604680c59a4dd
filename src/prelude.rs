//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the smeltcalc crate.
//!
//! # Example
//!
//! ```rust
//! use smeltcalc::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::survival_island();
//! let totals = Expander::new(&catalog).expand("Charcoal", 5)?;
//! assert_eq!(totals.get("Wood"), 10);
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Recipes
pub use crate::recipe::{CRAFTING_ITEM, Catalog, CatalogBuilder, Ingredient, Recipe};

// Expansion
pub use crate::expander::{Expander, IngredientTotals};

// Request handling and output
pub use crate::planner::{CraftPlan, CraftRequest, Material, MaterialKind, Planner, SmelterLevel};
pub use crate::report::PlanFormatter;

// Error types
pub use crate::error::{CatalogError, ExpansionError, PlanError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
