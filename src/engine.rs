//! Order calculation engine.
//!
//! Pure functions from plan state to order figures: no retained state, no
//! side effects, recomputed from scratch on every call. Selections whose
//! agent is missing from the catalog are filtered out here, in one place,
//! rather than null-checked at call sites.

use crate::area::selected_area;
use crate::catalog::find_agent;
use crate::model::{Compartment, PestControlAgent, ProgramOrder, SelectedAgent};
use serde::{Deserialize, Serialize};

/// Order figures for one selected agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub scientific_name: String,
    /// Area targeted by this selection, in square meters.
    pub treated_area: f64,
    /// Target population over the treated area. May be fractional: it is a
    /// population target, not an item count.
    pub total_pests_needed: f64,
    /// Purchasable units required to meet or exceed the target.
    pub units_needed: u64,
    /// Units already committed by the standing program.
    pub program_units: u64,
    /// Shortfall beyond the program, never negative.
    pub extra_units: u64,
    /// Cost of the shortfall at the current unit price.
    pub extra_cost: f64,
}

/// Aggregate rollup over all selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// One result per selection with a live catalog entry, in selection order.
    pub per_agent: Vec<OrderResult>,
    pub total_extra_cost: f64,
    /// Weekly program cost plus total extra cost. Without a program this is
    /// simply the cost of all required units.
    pub total_cost: f64,
}

/// Compute the order for one selection.
///
/// Returns `None` when the selection references an agent that is no longer
/// in the catalog; the caller omits the row. Stale compartment ids in the
/// selection contribute no area and are not an error.
pub fn calculate_order(
    agents: &[PestControlAgent],
    selection: &SelectedAgent,
    compartments: &[Compartment],
    program: Option<&ProgramOrder>,
) -> Option<OrderResult> {
    let agent = find_agent(agents, &selection.scientific_name)?;

    let treated_area = selected_area(compartments, &selection.selected_compartments);
    let total_pests_needed = treated_area * selection.desired_pest_per_meter;

    // Partial units cannot be purchased: round any remainder up so the
    // order always meets or exceeds the density target.
    let units_needed = (total_pests_needed / agent.population_per_unit as f64).ceil() as u64;

    let program_units = program.map_or(0, |p| p.quantity_for(&selection.scientific_name));

    // Over-provisioning from the program is not a credit.
    let extra_units = units_needed.saturating_sub(program_units);
    let extra_cost = extra_units as f64 * agent.price_per_unit;

    Some(OrderResult {
        scientific_name: agent.scientific_name.clone(),
        treated_area,
        total_pests_needed,
        units_needed,
        program_units,
        extra_units,
        extra_cost,
    })
}

/// Compute the per-agent orders and the cost rollup for a whole plan.
pub fn calculate_totals(
    agents: &[PestControlAgent],
    selections: &[SelectedAgent],
    compartments: &[Compartment],
    program: Option<&ProgramOrder>,
) -> OrderSummary {
    let per_agent: Vec<OrderResult> = selections
        .iter()
        .filter_map(|selection| calculate_order(agents, selection, compartments, program))
        .collect();

    let total_extra_cost: f64 = per_agent.iter().map(|result| result.extra_cost).sum();
    let weekly_program_cost = program.map_or(0.0, |p| p.weekly_program_cost);

    OrderSummary {
        per_agent,
        total_extra_cost,
        total_cost: weekly_program_cost + total_extra_cost,
    }
}
