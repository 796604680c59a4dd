use crate::planner::{CraftPlan, Material, MaterialKind};
use crate::recipe::Catalog;
use itertools::Itertools;

/// Marks refined materials in the resource list.
pub const REFINED_MARKER: char = '*';

/// Formats plans and catalogs into human-readable text.
pub struct PlanFormatter;

impl PlanFormatter {
    /// Renders the "Crafting Info" and "Resource Needed" panels of a plan.
    pub fn format_plan(plan: &CraftPlan) -> String {
        let request = &plan.request;
        let mut out = String::new();

        out.push_str("Crafting Info\n");
        out.push_str("-------------\n");
        out.push_str(&format!("Smelter Level:      {}\n", request.smelter_level));
        out.push_str(&format!("Crafting Recipe:    {}\n", request.item));
        out.push_str(&format!("Quantity per Batch: {} Pcs\n", request.quantity));
        out.push_str(&format!("Batch Size:         {}\n", request.batch_size));
        out.push_str(&format!(
            "Total Quantity:     {} {}\n",
            plan.total_quantity, request.item
        ));

        out.push_str("\nResource Needed\n");
        out.push_str("---------------\n");
        if plan.materials.is_empty() {
            out.push_str("  (nothing)\n");
        }
        for material in &plan.materials {
            out.push_str(&Self::format_material(material));
            out.push('\n');
        }

        if plan.raw().next().is_some() {
            out.push_str(&format!(
                "\nEntries marked '{}' are refined materials; the rest are raw materials to gather.\n",
                REFINED_MARKER
            ));
        }
        out
    }

    /// Lists every craftable item with its direct ingredients.
    pub fn format_catalog(catalog: &Catalog) -> String {
        let mut out = String::new();
        for (i, recipe) in catalog.iter().enumerate() {
            let ingredients = recipe
                .ingredients()
                .iter()
                .map(|ing| format!("{} {}", ing.amount, ing.name))
                .join(", ");
            out.push_str(&format!(
                "{:>2}. {} <- {}\n",
                i + 1,
                recipe.name(),
                ingredients
            ));
        }
        out
    }

    fn format_material(material: &Material) -> String {
        let marker = match material.kind {
            MaterialKind::Refined => REFINED_MARKER,
            MaterialKind::Raw => ' ',
        };
        format!("{} {} {}", marker, material.amount, material.name)
    }
}
