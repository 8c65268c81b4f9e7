use crate::output::print_json;
use crate::render;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use testgen_core::{
    config::Config,
    instruction::{plan_report, DocumentPlan},
    presence::FsPresence,
    scan::{scan, ScanReport},
    types::RunMode,
};

#[derive(Serialize)]
struct PlanOutput<'a> {
    mode: RunMode,
    report: &'a ScanReport,
    plans: &'a [DocumentPlan],
}

pub fn run(root: &Path, mode: RunMode, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load testgen.yaml")?;
    let oracle = FsPresence::new(root, &config.layout);

    if !json {
        print!("{}", render::banner(mode)?);
    }

    let report = scan(root, &config, &oracle)?;
    let plans = plan_report(&report, &config);

    if json {
        return print_json(&PlanOutput {
            mode,
            report: &report,
            plans: &plans,
        });
    }

    print!("{}", render::scan_summary(&report)?);
    print!("{}", render::workflow(&plans, mode)?);
    Ok(())
}
