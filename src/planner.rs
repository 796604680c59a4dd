use crate::error::PlanError;
use crate::expander::{Expander, IngredientTotals};
use crate::recipe::Catalog;
use serde::Serialize;
use std::fmt;
use tracing::info;

/// The player's smelter tier, which caps how much can be crafted per batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum SmelterLevel {
    Level9,
    Level10,
}

impl SmelterLevel {
    pub fn all() -> [SmelterLevel; 2] {
        [SmelterLevel::Level9, SmelterLevel::Level10]
    }

    pub fn from_level(level: u8) -> Result<Self, PlanError> {
        match level {
            9 => Ok(SmelterLevel::Level9),
            10 => Ok(SmelterLevel::Level10),
            other => Err(PlanError::UnknownSmelterLevel(other)),
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            SmelterLevel::Level9 => 9,
            SmelterLevel::Level10 => 10,
        }
    }

    /// Largest quantity per batch this tier allows.
    pub fn max_quantity(&self) -> u64 {
        match self {
            SmelterLevel::Level9 => 3000,
            SmelterLevel::Level10 => 5000,
        }
    }
}

impl From<SmelterLevel> for u8 {
    fn from(level: SmelterLevel) -> Self {
        level.level()
    }
}

impl fmt::Display for SmelterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CraftRequest {
    pub item: String,
    pub quantity: u64,
    pub batch_size: u64,
    pub smelter_level: SmelterLevel,
}

/// Whether a material is itself produced by a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Refined,
    Raw,
}

/// One row of a plan's resource list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Material {
    pub name: String,
    pub amount: u64,
    pub kind: MaterialKind,
}

/// A validated request together with everything it takes to fulfil it.
#[derive(Debug, Clone, Serialize)]
pub struct CraftPlan {
    pub request: CraftRequest,
    pub total_quantity: u64,
    pub materials: Vec<Material>,
}

impl CraftPlan {
    /// Materials that are themselves crafted.
    pub fn refined(&self) -> impl Iterator<Item = &Material> {
        self.materials
            .iter()
            .filter(|m| m.kind == MaterialKind::Refined)
    }

    /// Materials that have to be gathered.
    pub fn raw(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter().filter(|m| m.kind == MaterialKind::Raw)
    }

    pub fn amount_of(&self, name: &str) -> Option<u64> {
        self.materials
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.amount)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Validates crafting requests and turns them into plans.
///
/// This is the boundary between user input and the expander: anything the
/// expander assumes (positive quantities, a craftable root) is checked here.
pub struct Planner<'a> {
    expander: Expander<'a>,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            expander: Expander::new(catalog),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.expander.catalog()
    }

    pub fn plan(&self, request: &CraftRequest) -> Result<CraftPlan, PlanError> {
        let total_quantity = self.validate(request)?;
        info!(
            item = %request.item,
            quantity = request.quantity,
            batch_size = request.batch_size,
            total_quantity,
            level = request.smelter_level.level(),
            "planning craft"
        );

        let totals = self.expander.expand(&request.item, total_quantity)?;
        Ok(CraftPlan {
            request: request.clone(),
            total_quantity,
            materials: self.classify(&totals),
        })
    }

    /// Checks `request` and returns the total quantity to expand.
    fn validate(&self, request: &CraftRequest) -> Result<u64, PlanError> {
        if request.quantity == 0 {
            return Err(PlanError::InvalidQuantity {
                field: "quantity",
                value: request.quantity,
            });
        }
        if request.batch_size == 0 {
            return Err(PlanError::InvalidQuantity {
                field: "batch size",
                value: request.batch_size,
            });
        }

        let limit = request.smelter_level.max_quantity();
        if request.quantity > limit {
            return Err(PlanError::QuantityAboveLimit {
                quantity: request.quantity,
                limit,
                level: request.smelter_level.level(),
            });
        }

        if !self.catalog().contains(&request.item) {
            return Err(PlanError::UnknownItem(request.item.clone()));
        }

        request
            .quantity
            .checked_mul(request.batch_size)
            .ok_or(PlanError::TotalQuantityOverflow {
                quantity: request.quantity,
                batch_size: request.batch_size,
            })
    }

    /// Refined materials first, then raw ones, each alphabetical.
    fn classify(&self, totals: &IngredientTotals) -> Vec<Material> {
        let mut materials: Vec<Material> = totals
            .iter()
            .map(|(name, amount)| Material {
                name: name.to_string(),
                amount,
                kind: if self.catalog().contains(name) {
                    MaterialKind::Refined
                } else {
                    MaterialKind::Raw
                },
            })
            .collect();
        materials.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
        materials
    }
}
