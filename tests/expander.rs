//! Tests for recursive ingredient expansion.
mod common;
use common::*;
use smeltcalc::prelude::*;

#[test]
fn test_charcoal_scales_by_quantity() {
    let catalog = Catalog::survival_island();
    let totals = Expander::new(&catalog).expand("Charcoal", 5).unwrap();

    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("Wood"), 10);
}

#[test]
fn test_alloy_merges_all_subtrees() {
    let catalog = Catalog::survival_island();
    let totals = Expander::new(&catalog).expand("Alloy", 1).unwrap();

    assert_eq!(
        totals.sorted(),
        vec![
            ("Charcoal", 1),
            ("Copper Ingot", 1),
            ("Copper Ore", 3),
            ("Iron Ingot", 1),
            ("Iron Ore", 2),
            ("Wood", 9), // 3 (ingot) + 4 (copper) + 2 (charcoal)
        ]
    );
}

#[test]
fn test_steel_keeps_lime_as_leaf() {
    let catalog = Catalog::survival_island();
    let totals = Expander::new(&catalog).expand("Steel", 1).unwrap();

    assert_eq!(totals.get("Lime"), 2);
    assert_eq!(totals.get("Iron Ingot"), 2);
    assert_eq!(totals.get("Charcoal"), 1);
    assert_eq!(totals.get("Iron Ore"), 4);
    assert_eq!(totals.get("Wood"), 8);
    assert_eq!(totals.len(), 5);
}

#[test]
fn test_raw_materials_expand_to_nothing() {
    let catalog = Catalog::survival_island();
    let expander = Expander::new(&catalog);

    for raw in RAW_MATERIALS {
        for n in [1, 7, 5000] {
            assert!(expander.expand(raw, n).unwrap().is_empty(), "{} x{}", raw, n);
        }
    }
}

#[test]
fn test_direct_ingredients_get_at_least_amount_times_quantity() {
    let catalog = Catalog::survival_island();
    let expander = Expander::new(&catalog);

    for recipe in catalog.iter() {
        for n in [1, 3, 250] {
            let totals = expander.expand(recipe.name(), n).unwrap();
            for ingredient in recipe.ingredients() {
                assert!(
                    totals.get(&ingredient.name) >= ingredient.amount * n,
                    "{} x{} needs at least {} {}",
                    recipe.name(),
                    n,
                    ingredient.amount * n,
                    ingredient.name
                );
            }
        }
    }
}

#[test]
fn test_repeated_calls_do_not_leak_state() {
    let catalog = Catalog::survival_island();
    let expander = Expander::new(&catalog);

    let first = expander.expand("Alloy", 12).unwrap();
    let second = expander.expand("Alloy", 12).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_doubling_quantity_never_decreases_totals() {
    let catalog = Catalog::survival_island();
    let expander = Expander::new(&catalog);

    for item in catalog.item_names() {
        for n in [1, 2, 9, 1500] {
            let single = expander.expand(item, n).unwrap();
            let double = expander.expand(item, 2 * n).unwrap();
            for (ingredient, amount) in single.iter() {
                assert_eq!(double.get(ingredient), 2 * amount);
            }
        }
    }
}

#[test]
fn test_doubling_with_yields_never_decreases_totals() {
    let catalog = create_yield_catalog();
    let expander = Expander::new(&catalog);

    // 5 and 10 nails both round to one craft; 15 -> 1 craft but 30 -> 3
    for n in [1, 5, 9, 10, 15, 25, 1000] {
        let single = expander.expand("Nails", n).unwrap();
        let double = expander.expand("Nails", 2 * n).unwrap();
        for (ingredient, amount) in single.iter() {
            assert!(
                double.get(ingredient) >= amount,
                "{} for {} nails dropped from {} to {}",
                ingredient,
                2 * n,
                amount,
                double.get(ingredient)
            );
        }
    }

    // Floor division keeps the ratio from being exact
    let single = expander.expand("Nails", 15).unwrap();
    let double = expander.expand("Nails", 30).unwrap();
    assert_eq!(single.get("Iron Ingot"), 1);
    assert_eq!(double.get("Iron Ingot"), 3);
}

#[test]
fn test_expand_into_accumulates_across_calls() {
    let catalog = Catalog::survival_island();
    let expander = Expander::new(&catalog);

    let mut totals = IngredientTotals::new();
    expander.expand_into("Charcoal", 1, &mut totals).unwrap();
    expander.expand_into("Iron Ingot", 1, &mut totals).unwrap();
    assert_eq!(totals.get("Wood"), 5);
    assert_eq!(totals.get("Iron Ore"), 2);

    // Raw roots leave the accumulator untouched
    expander.expand_into("Wood", 100, &mut totals).unwrap();
    assert_eq!(totals.get("Wood"), 5);
}

#[test]
fn test_shared_subrecipe_is_not_a_cycle() {
    let catalog = create_diamond_catalog();
    let totals = Expander::new(&catalog).expand("Machine", 2).unwrap();

    // Gear: 2 directly, 4 through Frame
    assert_eq!(totals.get("Gear"), 6);
    assert_eq!(totals.get("Ore"), 24);
    assert_eq!(totals.get("Frame"), 2);
    assert_eq!(totals.get("Plank"), 6);
    assert_eq!(totals.get("Log"), 6);
}

#[test]
fn test_cycle_is_reported_with_its_path() {
    let catalog = create_cyclic_catalog();
    let err = Expander::new(&catalog).expand("A", 1).unwrap_err();

    assert_eq!(
        err,
        ExpansionError::CyclicRecipe {
            item: "A".to_string(),
            path: vec!["A".to_string(), "B".to_string(), "C".to_string(), "A".to_string()],
        }
    );
    assert!(err.to_string().contains("A -> B -> C -> A"));
}

#[test]
fn test_self_referencing_recipe_is_a_cycle() {
    let catalog = Catalog::builder()
        .with_recipe("Slime", [("Slime", 1)])
        .build()
        .unwrap();
    let err = Expander::new(&catalog).expand("Slime", 3).unwrap_err();
    assert!(matches!(err, ExpansionError::CyclicRecipe { ref item, .. } if item == "Slime"));
}

#[test]
fn test_crafting_item_divides_quantity() {
    let catalog = create_yield_catalog();
    let expander = Expander::new(&catalog);

    let totals = expander.expand("Nails", 25).unwrap();
    assert!(!totals.contains(CRAFTING_ITEM));
    assert_eq!(totals.get("Iron Ingot"), 2); // 25 / 10, floored
    assert_eq!(totals.get("Iron Ore"), 4);

    // Never fewer than one craft
    let totals = expander.expand("Nails", 3).unwrap();
    assert_eq!(totals.get("Iron Ingot"), 1);
}

#[test]
fn test_overflow_is_an_error() {
    let catalog = Catalog::survival_island();
    let err = Expander::new(&catalog).expand("Iron Ingot", u64::MAX).unwrap_err();
    assert!(matches!(
        err,
        ExpansionError::QuantityOverflow { ref item, .. } if item == "Iron Ingot"
    ));
}
