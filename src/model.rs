//! Plan data types.

use serde::{Deserialize, Serialize};

/// A named rectangular growing area, replicated `count` times.
///
/// The derived treated area is `width * length * count`; see
/// [`crate::area::compartment_area`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compartment {
    /// Stable opaque identifier, unique within the plan.
    pub id: String,
    /// Display label, not required to be unique.
    pub name: String,
    /// Bay width in meters.
    pub width: f64,
    /// Bay length in meters.
    pub length: f64,
    /// Number of identical bays.
    pub count: u32,
}

impl Compartment {
    /// Create a compartment with the default bay geometry (8 x 50 m, one bay).
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width: 8.0,
            length: 50.0,
            count: 1,
        }
    }
}

/// A commercial product name under which an agent is sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandedName {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

/// Catalog entry for one biological control organism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PestControlAgent {
    /// Unique key within the catalog.
    pub scientific_name: String,
    /// Product names, possibly empty.
    #[serde(default)]
    pub branded_names: Vec<BrandedName>,
    /// Organisms per purchasable unit. Must be at least 1.
    pub population_per_unit: u64,
    /// Currency per unit.
    pub price_per_unit: f64,
    /// Free-text description of the control method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Per-agent user intent: target density and target compartments.
///
/// `scientific_name` is a foreign key into the catalog; a selection whose
/// agent was deleted stays in the plan but contributes nothing to totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedAgent {
    pub scientific_name: String,
    /// Target pest density to neutralize, per square meter.
    pub desired_pest_per_meter: f64,
    /// Ids of the compartments this agent is applied to. Ids no longer
    /// present in the plan are inert.
    #[serde(default)]
    pub selected_compartments: Vec<String>,
}

impl SelectedAgent {
    /// Create a fresh selection: zero density, no compartments.
    pub fn new(scientific_name: impl Into<String>) -> Self {
        Self {
            scientific_name: scientific_name.into(),
            desired_pest_per_meter: 0.0,
            selected_compartments: Vec::new(),
        }
    }
}

/// Committed quantity of one agent in the standing supplier program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramEntry {
    pub scientific_name: String,
    /// Units already committed per week.
    pub quantity: u64,
}

/// A standing weekly supplier order whose quantities offset newly
/// computed requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramOrder {
    pub week: u32,
    pub weekly_program_cost: f64,
    #[serde(default)]
    pub agents: Vec<ProgramEntry>,
}

impl ProgramOrder {
    /// Create an empty program for week 1.
    pub fn new() -> Self {
        Self {
            week: 1,
            weekly_program_cost: 0.0,
            agents: Vec::new(),
        }
    }

    /// Committed quantity for an agent, 0 if the program has no entry for it.
    pub fn quantity_for(&self, scientific_name: &str) -> u64 {
        self.agents
            .iter()
            .find(|entry| entry.scientific_name == scientific_name)
            .map_or(0, |entry| entry.quantity)
    }
}

impl Default for ProgramOrder {
    fn default() -> Self {
        Self::new()
    }
}
