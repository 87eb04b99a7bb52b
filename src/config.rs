use crate::catalog;
use crate::model::{Compartment, PestControlAgent, ProgramOrder, SelectedAgent};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::{fmt::Debug, ops::RangeBounds};

/// The full plan configuration: compartment geometry, agent catalog, the
/// user's selections, and the optional standing supplier program.
///
/// Serialized verbatim to the plan file; see [`crate::store`]. Validated
/// before use so the calculation engine only ever sees well-formed records.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub compartments: Vec<Compartment>,
    /// The agent catalog.
    #[serde(default)]
    pub agents: Vec<PestControlAgent>,
    /// At most one entry per scientific name.
    #[serde(default)]
    pub selections: Vec<SelectedAgent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<ProgramOrder>,
}

impl Configuration {
    /// The plan a new plan directory is seeded with: the default agent
    /// catalog and one default compartment, nothing selected yet.
    pub fn default_seed() -> Self {
        Self {
            compartments: vec![Compartment::new("comp-1", "Comp 1")],
            agents: catalog::default_agents(),
            selections: Vec::new(),
            program: None,
        }
    }

    /// Check every plan invariant.
    ///
    /// # Errors
    /// Returns an error naming the first offending record. In particular a
    /// catalog entry with `population_per_unit` of 0 is rejected here, so
    /// the engine never divides by zero.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for (idx, comp) in self.compartments.iter().enumerate() {
            validate_compartment(comp)
                .with_context(|| format!("invalid compartment {idx} ({:?})", comp.id))?;
            if !ids.insert(comp.id.as_str()) {
                bail!("duplicate compartment id {:?}", comp.id);
            }
        }

        let mut names = HashSet::new();
        for (idx, agent) in self.agents.iter().enumerate() {
            validate_agent(agent)
                .with_context(|| format!("invalid agent {idx} ({:?})", agent.scientific_name))?;
            if !names.insert(agent.scientific_name.as_str()) {
                bail!("duplicate agent {:?}", agent.scientific_name);
            }
        }

        let mut selected = HashSet::new();
        for (idx, sel) in self.selections.iter().enumerate() {
            check_num(sel.desired_pest_per_meter, 0.0..f64::INFINITY)
                .with_context(|| format!("invalid selection {idx}: invalid pest density"))?;
            if !selected.insert(sel.scientific_name.as_str()) {
                bail!("duplicate selection for {:?}", sel.scientific_name);
            }
        }

        if let Some(program) = &self.program {
            validate_program(program).context("invalid program order")?;
        }

        Ok(())
    }
}

fn validate_compartment(comp: &Compartment) -> Result<()> {
    check_pos(comp.width).context("invalid width")?;
    check_pos(comp.length).context("invalid length")?;
    check_num(comp.count, 1..).context("invalid bay count")?;
    Ok(())
}

fn validate_agent(agent: &PestControlAgent) -> Result<()> {
    if agent.scientific_name.trim().is_empty() {
        bail!("scientific name must not be empty");
    }
    check_num(agent.population_per_unit, 1..).context("invalid population per unit")?;
    check_num(agent.price_per_unit, 0.0..f64::INFINITY).context("invalid price per unit")?;
    Ok(())
}

fn validate_program(program: &ProgramOrder) -> Result<()> {
    check_num(program.week, 1..).context("invalid week")?;
    check_num(program.weekly_program_cost, 0.0..f64::INFINITY)
        .context("invalid weekly program cost")?;

    let mut names = HashSet::new();
    for entry in &program.agents {
        if !names.insert(entry.scientific_name.as_str()) {
            bail!("duplicate program entry for {:?}", entry.scientific_name);
        }
    }
    Ok(())
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

fn check_pos(num: f64) -> Result<()> {
    // Written with a negated comparison so NaN is rejected too.
    if !(num > 0.0) {
        bail!("number must be positive, but is {num:?}");
    }
    Ok(())
}
