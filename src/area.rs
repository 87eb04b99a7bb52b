//! Area aggregation over compartments.

use crate::model::Compartment;

/// Treated area of a single compartment in square meters.
///
/// Performs no validation; a zero factor simply yields zero area.
pub fn compartment_area(compartment: &Compartment) -> f64 {
    compartment.width * compartment.length * f64::from(compartment.count)
}

/// Total treated area over all compartments. Empty input yields 0.
pub fn total_area(compartments: &[Compartment]) -> f64 {
    compartments.iter().map(compartment_area).sum()
}

/// Total treated area over the compartments whose id is in `selected_ids`.
///
/// Ids not matching any compartment are ignored: a selection may still
/// reference a compartment that was deleted from the plan.
pub fn selected_area(compartments: &[Compartment], selected_ids: &[String]) -> f64 {
    compartments
        .iter()
        .filter(|compartment| selected_ids.iter().any(|id| *id == compartment.id))
        .map(compartment_area)
        .sum()
}
