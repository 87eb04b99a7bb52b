//! Plain-text report rendering.
//!
//! Consumes the engine's output as read-only display data; layout and
//! currency formatting live here, never in the engine.

use crate::area::{compartment_area, total_area};
use crate::config::Configuration;
use crate::engine::OrderSummary;
use std::fmt::Write;

/// Which sections the rendered report contains.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    pub include_compartments: bool,
    pub include_agent_details: bool,
    pub include_cost_breakdown: bool,
    pub notes: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "IPM Calculator Report".to_string(),
            include_compartments: true,
            include_agent_details: true,
            include_cost_breakdown: true,
            notes: String::new(),
        }
    }
}

/// Render the report as plain text.
pub fn render_report(cfg: &Configuration, summary: &OrderSummary, opts: &ReportOptions) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", opts.title);
    let _ = writeln!(out, "{}", "=".repeat(opts.title.chars().count()));
    let _ = writeln!(out);

    if opts.include_compartments {
        let _ = writeln!(out, "Compartments");
        let _ = writeln!(out, "------------");
        for comp in &cfg.compartments {
            let _ = writeln!(
                out,
                "{}: {} x {} m, {} bays = {} m2",
                comp.name,
                comp.width,
                comp.length,
                comp.count,
                compartment_area(comp)
            );
        }
        let _ = writeln!(out, "Total area: {} m2", total_area(&cfg.compartments));
        let _ = writeln!(out);
    }

    if opts.include_agent_details {
        let _ = writeln!(out, "Agent Details");
        let _ = writeln!(out, "-------------");
        for result in &summary.per_agent {
            let Some(agent) = crate::catalog::find_agent(&cfg.agents, &result.scientific_name)
            else {
                continue;
            };

            let _ = writeln!(out, "{}", agent.scientific_name);
            if !agent.branded_names.is_empty() {
                let brands: Vec<String> = agent
                    .branded_names
                    .iter()
                    .map(|brand| match &brand.supplier {
                        Some(supplier) => format!("{} ({supplier})", brand.name),
                        None => brand.name.clone(),
                    })
                    .collect();
                let _ = writeln!(out, "  Sold as: {}", brands.join(", "));
            }
            let _ = writeln!(
                out,
                "  Population per unit: {}",
                agent.population_per_unit
            );
            let _ = writeln!(out, "  Price per unit: ${:.2}", agent.price_per_unit);
            if let Some(method) = &agent.method {
                let _ = writeln!(out, "  Method: {method}");
            }
        }
        let _ = writeln!(out);
    }

    if opts.include_cost_breakdown {
        let _ = writeln!(out, "Cost Breakdown");
        let _ = writeln!(out, "--------------");
        for result in &summary.per_agent {
            let _ = writeln!(
                out,
                "{}: {} m2 treated, {} pests, {} units ({} from program, {} extra) = ${:.2}",
                result.scientific_name,
                result.treated_area,
                result.total_pests_needed,
                result.units_needed,
                result.program_units,
                result.extra_units,
                result.extra_cost
            );
        }
        if let Some(program) = &cfg.program {
            let _ = writeln!(
                out,
                "Weekly program (week {}): ${:.2}",
                program.week, program.weekly_program_cost
            );
        }
        let _ = writeln!(out, "Extra cost: ${:.2}", summary.total_extra_cost);
        let _ = writeln!(out, "Total cost: ${:.2}", summary.total_cost);
        let _ = writeln!(out);
    }

    if !opts.notes.trim().is_empty() {
        let _ = writeln!(out, "Notes");
        let _ = writeln!(out, "-----");
        let _ = writeln!(out, "{}", opts.notes.trim());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_totals;
    use crate::model::SelectedAgent;

    fn planned_config() -> Configuration {
        let mut cfg = Configuration::default_seed();
        cfg.compartments[0].count = 15;
        cfg.selections.push(SelectedAgent {
            scientific_name: "Aphidius Colemani".to_string(),
            desired_pest_per_meter: 1.0,
            selected_compartments: vec![cfg.compartments[0].id.clone()],
        });
        cfg
    }

    #[test]
    fn report_contains_all_sections_by_default() {
        let cfg = planned_config();
        let summary = calculate_totals(
            &cfg.agents,
            &cfg.selections,
            &cfg.compartments,
            cfg.program.as_ref(),
        );

        let text = render_report(&cfg, &summary, &ReportOptions::default());
        assert!(text.contains("IPM Calculator Report"));
        assert!(text.contains("Total area: 6000 m2"));
        assert!(text.contains("Aphidius Colemani"));
        assert!(text.contains("Total cost: $270.00"));
    }

    #[test]
    fn sections_can_be_skipped() {
        let cfg = planned_config();
        let summary = calculate_totals(
            &cfg.agents,
            &cfg.selections,
            &cfg.compartments,
            cfg.program.as_ref(),
        );

        let opts = ReportOptions {
            title: "Week 12 order".to_string(),
            include_compartments: false,
            include_agent_details: false,
            include_cost_breakdown: true,
            notes: "Check pest pressure first.".to_string(),
        };
        let text = render_report(&cfg, &summary, &opts);
        assert!(text.contains("Week 12 order"));
        assert!(!text.contains("Compartments"));
        assert!(!text.contains("Agent Details"));
        assert!(text.contains("Notes"));
        assert!(text.contains("Check pest pressure first."));
    }
}
