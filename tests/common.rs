//! Common test utilities for building catalogs and requests.
use smeltcalc::prelude::*;

/// Raw materials of the built-in catalog.
#[allow(dead_code)]
pub const RAW_MATERIALS: [&str; 6] = [
    "Iron Ore",
    "Wood",
    "Copper Ore",
    "Sulfur Ore",
    "Lime",
    "Stone",
];

/// A catalog where `Gear` is reachable from `Machine` along two separate paths.
///
/// Machine <- 1 Gear, 1 Frame; Frame <- 2 Gear, 3 Plank; Gear <- 4 Ore; Plank <- 1 Log
#[allow(dead_code)]
pub fn create_diamond_catalog() -> Catalog {
    Catalog::builder()
        .with_recipe("Machine", [("Gear", 1), ("Frame", 1)])
        .with_recipe("Frame", [("Gear", 2), ("Plank", 3)])
        .with_recipe("Gear", [("Ore", 4)])
        .with_recipe("Plank", [("Log", 1)])
        .build()
        .expect("diamond catalog should build")
}

/// A catalog whose `A -> B -> C -> A` chain never bottoms out.
#[allow(dead_code)]
pub fn create_cyclic_catalog() -> Catalog {
    Catalog::builder()
        .with_recipe("A", [("B", 1), ("Dust", 1)])
        .with_recipe("B", [("C", 1)])
        .with_recipe("C", [("A", 1)])
        .build()
        .expect("cyclic catalog should build")
}

/// A catalog using the `Crafting Item` yield entry.
///
/// Nails <- 1 Iron Ingot per 10 nails; Iron Ingot <- 2 Iron Ore
#[allow(dead_code)]
pub fn create_yield_catalog() -> Catalog {
    Catalog::builder()
        .with_recipe("Nails", [("Iron Ingot", 1), (CRAFTING_ITEM, 10)])
        .with_recipe("Iron Ingot", [("Iron Ore", 2)])
        .build()
        .expect("yield catalog should build")
}

#[allow(dead_code)]
pub fn create_request(
    item: &str,
    quantity: u64,
    batch_size: u64,
    level: SmelterLevel,
) -> CraftRequest {
    CraftRequest {
        item: item.to_string(),
        quantity,
        batch_size,
        smelter_level: level,
    }
}
