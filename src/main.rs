use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ipmplan::manager::Manager;
use ipmplan::report::ReportOptions;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[arg(long)]
    plan_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Init,

    Summary,

    Report {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        skip_compartments: bool,

        #[arg(long)]
        skip_agent_details: bool,

        #[arg(long)]
        skip_cost_breakdown: bool,
    },

    Clean,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    match args.command {
        Command::Init => Manager::init_plan(&args.plan_dir)?,
        Command::Summary => {
            let mgr = Manager::new(&args.plan_dir).context("failed to construct mgr")?;
            mgr.summarize_plan()?;
        }
        Command::Report {
            title,
            notes,
            skip_compartments,
            skip_agent_details,
            skip_cost_breakdown,
        } => {
            let mgr = Manager::new(&args.plan_dir).context("failed to construct mgr")?;

            let defaults = ReportOptions::default();
            let opts = ReportOptions {
                title: title.unwrap_or(defaults.title),
                notes: notes.unwrap_or(defaults.notes),
                include_compartments: !skip_compartments,
                include_agent_details: !skip_agent_details,
                include_cost_breakdown: !skip_cost_breakdown,
            };
            mgr.write_report(&opts)?;
        }
        Command::Clean => {
            let mgr = Manager::new(&args.plan_dir).context("failed to construct mgr")?;
            mgr.clean_plan()?;
        }
    }

    Ok(())
}
