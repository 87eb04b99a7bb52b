use crate::config::Configuration;
use crate::engine::calculate_totals;
use crate::report::{ReportOptions, render_report};
use crate::store::{ConfigStore, JsonFileStore};
use anyhow::{Context, Result, bail};
use glob::glob;
use std::{
    fs,
    io::BufWriter,
    path::{Path, PathBuf},
};

pub struct Manager {
    plan_dir: PathBuf,
    cfg: Configuration,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(plan_dir: P) -> Result<Self> {
        let plan_dir = plan_dir.as_ref().to_path_buf();

        let store = JsonFileStore::new(plan_file(&plan_dir));
        let cfg = store.load().context("failed to load plan")?;
        log::info!(
            "loaded plan: {} compartments, {} agents in catalog, {} selected",
            cfg.compartments.len(),
            cfg.agents.len(),
            cfg.selections.len()
        );

        Ok(Self { plan_dir, cfg })
    }

    /// Create the plan directory and seed it with the default plan.
    pub fn init_plan<P: AsRef<Path>>(plan_dir: P) -> Result<()> {
        let plan_dir = plan_dir.as_ref();
        fs::create_dir_all(plan_dir).with_context(|| format!("failed to create {plan_dir:?}"))?;

        let plan_file = plan_file(plan_dir);
        if plan_file.exists() {
            bail!("plan file {plan_file:?} already exists");
        }

        let store = JsonFileStore::new(&plan_file);
        store
            .save(&Configuration::default_seed())
            .context("failed to save plan")?;
        log::info!("created {plan_file:?}");

        Ok(())
    }

    /// Compute the order summary and log it.
    pub fn summarize_plan(&self) -> Result<()> {
        let summary = calculate_totals(
            &self.cfg.agents,
            &self.cfg.selections,
            &self.cfg.compartments,
            self.cfg.program.as_ref(),
        );

        if summary.per_agent.is_empty() {
            log::info!("no agents selected");
        }
        for result in &summary.per_agent {
            log::info!(
                "{}: {} m2 treated, {} units needed, {} extra (${:.2})",
                result.scientific_name,
                result.treated_area,
                result.units_needed,
                result.extra_units,
                result.extra_cost
            );
        }
        log::info!("extra cost: ${:.2}", summary.total_extra_cost);
        log::info!("total cost: ${:.2}", summary.total_cost);

        Ok(())
    }

    /// Write the next `report-NNNN` text and JSON files into the plan directory.
    pub fn write_report(&self, opts: &ReportOptions) -> Result<()> {
        let summary = calculate_totals(
            &self.cfg.agents,
            &self.cfg.selections,
            &self.cfg.compartments,
            self.cfg.program.as_ref(),
        );

        let report_idx = self.count_reports().context("failed to count reports")?;

        let text_file = self.report_file(report_idx, "txt");
        fs::write(&text_file, render_report(&self.cfg, &summary, opts))
            .with_context(|| format!("failed to write {text_file:?}"))?;
        log::info!("wrote {text_file:?}");

        let json_file = self.report_file(report_idx, "json");
        let file = fs::File::create(&json_file)
            .with_context(|| format!("failed to create {json_file:?}"))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &summary).context("failed to serialize summary")?;
        log::info!("wrote {json_file:?}");

        Ok(())
    }

    /// Delete all generated report files, keeping the plan file.
    pub fn clean_plan(&self) -> Result<()> {
        let pattern = self.plan_dir.join("report-*.*");
        let pattern = pattern.to_str().context("pattern is not valid UTF-8")?;
        for path in glob(pattern)
            .context("failed to glob report files")?
            .filter_map(Result::ok)
        {
            fs::remove_file(&path).with_context(|| format!("failed to remove {path:?}"))?;
            log::info!("removed {path:?}");
        }
        Ok(())
    }

    fn count_reports(&self) -> Result<usize> {
        let pattern = self.plan_dir.join("report-*.txt");
        let pattern = pattern.to_str().context("pattern is not valid UTF-8")?;
        let count = glob(pattern)
            .context("failed to glob report files")?
            .filter_map(Result::ok)
            .count();
        Ok(count)
    }

    fn report_file(&self, report_idx: usize, ext: &str) -> PathBuf {
        self.plan_dir.join(format!("report-{report_idx:04}.{ext}"))
    }
}

fn plan_file(plan_dir: &Path) -> PathBuf {
    plan_dir.join("plan.json")
}
