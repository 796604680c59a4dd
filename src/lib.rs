//! # smeltcalc - Crafting Resource Calculator
//!
//! **smeltcalc** works out how much of every material a survival-game crafting
//! job needs. Pick a refined item and a quantity, and the recipe table is
//! expanded recursively until only raw materials remain, with every
//! intermediate product counted along the way.
//!
//! ## Core Workflow
//!
//! 1.  **Build a Catalog**: Use `Catalog::survival_island()` for the built-in
//!     smelter recipes, or `Catalog::builder()` to declare your own.
//! 2.  **Expand**: Create an `Expander` over the catalog and call `expand` with
//!     an item name and a total quantity. Items the catalog does not know are raw
//!     materials and expand to nothing.
//! 3.  **Plan** (optional): A `Planner` validates user input (quantity per batch,
//!     batch count, smelter level), runs the expansion and sorts the result into
//!     refined and raw materials.
//! 4.  **Render**: `PlanFormatter` turns a plan into a text report; `CraftPlan`
//!     also serializes to JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use smeltcalc::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let catalog = Catalog::survival_island();
//!
//!     // Raw expansion: every ingredient at every depth.
//!     let totals = Expander::new(&catalog).expand("Alloy", 1)?;
//!     assert_eq!(totals.get("Iron Ingot"), 1);
//!     assert_eq!(totals.get("Wood"), 9);
//!
//!     // Validated request, as the CLI makes it.
//!     let request = CraftRequest {
//!         item: "Steel".to_string(),
//!         quantity: 100,
//!         batch_size: 2,
//!         smelter_level: SmelterLevel::Level9,
//!     };
//!     let plan = Planner::new(&catalog).plan(&request)?;
//!     assert_eq!(plan.amount_of("Lime"), Some(400));
//!     println!("{}", PlanFormatter::format_plan(&plan));
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod expander;
pub mod planner;
pub mod prelude;
pub mod recipe;
pub mod report;
