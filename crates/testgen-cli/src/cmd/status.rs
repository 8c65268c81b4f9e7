use crate::output::{print_json, print_table};
use anyhow::Context;
use std::path::Path;
use testgen_core::{
    config::Config,
    presence::FsPresence,
    scan::scan,
    types::ArtifactKind,
};

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load testgen.yaml")?;
    let oracle = FsPresence::new(root, &config.layout);
    let report = scan(root, &config, &oracle)?;

    if json {
        return print_json(&report);
    }

    if report.is_empty() {
        println!(
            "No user story files (*{}) found in {}.",
            testgen_core::paths::STORY_SUFFIX,
            report.stories_dir
        );
        return Ok(());
    }

    let rows = report
        .documents
        .iter()
        .map(|doc| {
            let mut row = vec![doc.document.clone()];
            for &kind in ArtifactKind::all() {
                let cell = if doc.status(kind).exists {
                    "exists"
                } else {
                    "missing"
                };
                row.push(cell.to_string());
            }
            row.push(doc.presence().missing_count().to_string());
            row
        })
        .collect();

    print_table(&["DOCUMENT", "PLAN", "SUITE", "CASES", "STEPS"], rows);

    let pending = report.to_process().len();
    println!();
    println!(
        "{} of {} user stories need processing ({} step(s)).",
        pending,
        report.documents.len(),
        report.step_count()
    );
    Ok(())
}
