//! Console presentation of a scan and its generation workflow.
//!
//! Everything here builds strings from core data; nothing feeds back into
//! planning.

use std::fmt::{self, Write as _};
use testgen_core::{
    artifact::DocumentArtifacts,
    instruction::{DocumentPlan, GenerationCommand},
    paths,
    scan::ScanReport,
    types::{ArtifactKind, RunMode},
};

const WIDTH: usize = 80;

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

// ---------------------------------------------------------------------------
// Banner
// ---------------------------------------------------------------------------

pub fn banner(mode: RunMode) -> Result<String, fmt::Error> {
    let title = "TEST CASE GENERATION WORKFLOW";
    let inner = WIDTH - 2;
    let mut out = String::new();
    writeln!(out)?;
    writeln!(out, "╔{}╗", rule('═', inner))?;
    writeln!(out, "║{:^inner$}║", title)?;
    writeln!(out, "╚{}╝", rule('═', inner))?;
    writeln!(out)?;

    match mode {
        RunMode::Review => {
            writeln!(out, "Running in REVIEW MODE (--review flag detected)")?;
            writeln!(out)?;
        }
        RunMode::Guided => {
            writeln!(out, "Running in GUIDED MODE")?;
            writeln!(out)?;
            writeln!(out, "Tip: Use --review flag to pause between steps for verification")?;
            writeln!(out)?;
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Scan summary
// ---------------------------------------------------------------------------

pub fn scan_summary(report: &ScanReport) -> Result<String, fmt::Error> {
    let mut out = String::from("Scanning for user stories...\n\n");

    if report.is_empty() {
        writeln!(
            out,
            "No user story files (*{}) found in {}.",
            paths::STORY_SUFFIX,
            report.stories_dir
        )?;
        return Ok(out);
    }

    writeln!(out, "Found {} user story file(s):", report.documents.len())?;
    writeln!(out)?;

    for doc in &report.documents {
        let file = paths::story_filename(&doc.document);
        if doc.is_complete() {
            writeln!(out, "✓ {file} - All artifacts exist, skipping")?;
        } else {
            writeln!(out, "• {file}")?;
            for status in doc.statuses() {
                writeln!(out, "   {}", status_line(doc, status.kind))?;
            }
        }
        writeln!(out)?;
    }
    Ok(out)
}

fn status_line(doc: &DocumentArtifacts, kind: ArtifactKind) -> String {
    let label = format!("{}:", kind.title());
    let state = if doc.status(kind).exists {
        "✓ exists"
    } else {
        "✗ missing"
    };
    format!("{label:<12}{state}")
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

pub fn workflow(plans: &[DocumentPlan], mode: RunMode) -> Result<String, fmt::Error> {
    if plans.is_empty() {
        return Ok("All user stories have complete artifacts. Nothing to generate!\n".to_string());
    }

    let mut out = String::new();
    writeln!(out)?;
    writeln!(out, "{}", rule('=', WIDTH))?;
    writeln!(out, "GENERATION WORKFLOW")?;
    writeln!(out, "{}", rule('=', WIDTH))?;
    writeln!(out)?;

    match mode {
        RunMode::Review => {
            writeln!(out, "REVIEW MODE - Pause between steps for verification")?;
        }
        RunMode::Guided => {
            writeln!(out, "GUIDED MODE - Follow the steps in sequence")?;
        }
    }

    for (i, plan) in plans.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}", rule('─', WIDTH))?;
        writeln!(
            out,
            "User Story {}/{}: {}",
            i + 1,
            plans.len(),
            plan.document
        )?;
        writeln!(out, "{}", rule('─', WIDTH))?;

        for (j, command) in plan.commands.iter().enumerate() {
            let is_last = j + 1 == plan.commands.len();
            out.push_str(&step_box(command, mode, is_last)?);
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", rule('=', WIDTH))?;
    writeln!(
        out,
        "Ready to start! Copy the commands above and paste them into the agent chat."
    )?;
    writeln!(out, "{}", rule('=', WIDTH))?;
    Ok(out)
}

fn step_box(
    command: &GenerationCommand,
    mode: RunMode,
    is_last: bool,
) -> Result<String, fmt::Error> {
    let corners = |l: &'static str, r: &'static str| {
        if mode.is_review() {
            (l, r)
        } else {
            ("", "")
        }
    };
    let (tl, tr) = corners("┌", "┐");
    let (ml, mr) = corners("├", "┤");
    let (bl, br) = corners("└", "┘");
    let line = rule('─', WIDTH - 2);

    let follow_up = match (is_last, mode) {
        (true, _) => "Verify the final output meets your requirements",
        (false, RunMode::Review) => "Review the output, then proceed to the next step",
        (false, RunMode::Guided) => "Once complete, proceed immediately to the next step",
    };

    let mut out = String::new();
    writeln!(out)?;
    writeln!(out, "{tl}{line}{tr}")?;
    writeln!(out, "│ STEP {}: {}", command.step, command.title)?;
    writeln!(out, "{ml}{line}{mr}")?;
    writeln!(out, "│")?;
    writeln!(out, "│ 1. Copy the command below:")?;
    writeln!(out, "│")?;
    writeln!(out, "│     {}", command.invocation())?;
    writeln!(out, "│")?;
    writeln!(out, "│ 2. Paste it into the agent chat")?;
    writeln!(out, "│")?;
    writeln!(
        out,
        "│ 3. Wait for the agent to generate: {}",
        command.output_file_name()
    )?;
    writeln!(out, "│")?;
    writeln!(out, "│ 4. {follow_up}")?;
    writeln!(out, "│")?;
    writeln!(out, "{bl}{line}{br}")?;

    if mode.is_review() && !is_last {
        writeln!(out)?;
        writeln!(
            out,
            "   PAUSE - Review {} before continuing",
            command.output_file_name()
        )?;
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
