//! Report formatting and printing utilities.
//!
//! Separate from the scanning logic so remarks can be used as a library.
//! Every printer has a `_to` variant that writes to any `Write` for tests.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{ClassifySummary, ScanSummary},
};
use crate::core::{CommentKind, Verdict, data::KeepReason};
use crate::messaging::{Badge, PopupEntry};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_scan(summary: &ScanSummary, format: OutputFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            print_scan_to(summary, &mut stdout);
            Ok(())
        }
        OutputFormat::Json => {
            let json = scan_json(summary)?;
            writeln!(stdout, "{}", json)?;
            Ok(())
        }
    }
}

/// Badge line, then one block per non-empty group, then a summary line.
pub fn print_scan_to<W: Write>(summary: &ScanSummary, writer: &mut W) {
    print_badge(&summary.badge, writer);

    for kind in CommentKind::ALL {
        let entries = summary.view.entries(kind);
        if !entries.is_empty() {
            print_group(kind, entries, writer);
        }
    }

    let total = summary.view.total();
    if total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No comments found in {}", summary.page).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "\n{} Found {} {} in {}",
            FAILURE_MARK.red(),
            total,
            if total == 1 { "comment" } else { "comments" },
            summary.page.bold()
        );
    }
}

fn print_badge<W: Write>(badge: &Badge, writer: &mut W) {
    let text = if badge.text.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        badge.text.bold().to_string()
    };
    let _ = writeln!(
        writer,
        "{} {}  {}",
        "badge:".bold(),
        text,
        badge.icon.path().dimmed()
    );
}

fn print_group<W: Write>(kind: CommentKind, entries: &[PopupEntry], writer: &mut W) {
    let _ = writeln!(
        writer,
        "\n{} {}",
        kind.label().bold().cyan(),
        format!("({})", entries.len()).dimmed()
    );

    let texts: Vec<String> = entries.iter().map(|e| single_line(&e.text)).collect();
    let width = texts
        .iter()
        .map(|t| UnicodeWidthStr::width(t.as_str()))
        .max()
        .unwrap_or(0);

    for (text, entry) in texts.iter().zip(entries) {
        let padding = width - UnicodeWidthStr::width(text.as_str());
        let _ = writeln!(
            writer,
            "  {}{:padding$}  {}",
            text,
            "",
            format!("({})", entry.origin).dimmed(),
            padding = padding
        );
    }
}

/// Multi-line comments are shown on one line, each line trimmed.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanJson<'a> {
    page: &'a str,
    badge: &'a Badge,
    total_count: usize,
    comments: Vec<CommentJson<'a>>,
}

#[derive(Serialize)]
struct CommentJson<'a> {
    kind: CommentKind,
    text: &'a str,
    origin: &'a str,
}

/// JSON form of a scan, comments in popup order (HTML, CSS, JS).
pub fn scan_json(summary: &ScanSummary) -> Result<String> {
    let comments = CommentKind::ALL
        .into_iter()
        .flat_map(|kind| {
            summary.view.entries(kind).iter().map(move |entry| CommentJson {
                kind,
                text: &entry.text,
                origin: &entry.origin,
            })
        })
        .collect();

    let report = ScanJson {
        page: &summary.page,
        badge: &summary.badge,
        total_count: summary.view.total(),
        comments,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize scan result")
}

pub fn print_classify(summary: &ClassifySummary) {
    print_classify_to(summary, &mut io::stdout().lock());
}

pub fn print_classify_to<W: Write>(summary: &ClassifySummary, writer: &mut W) {
    let (verdict, reason) = match &summary.verdict {
        Verdict::Keep { reason } => (
            format!("{} keep", SUCCESS_MARK).green(),
            keep_reason(reason),
        ),
        Verdict::Discard { .. } => (
            format!("{} discard", FAILURE_MARK).red(),
            "looks like code",
        ),
    };

    let _ = writeln!(
        writer,
        "{}  {} {}",
        verdict,
        summary.kind.label().cyan(),
        format!("({})", reason).dimmed()
    );

    let evidence = summary.verdict.evidence();
    if !evidence.is_empty() {
        let _ = writeln!(writer, "  {} {}", "evidence:".bold(), evidence.join(", "));
    }
}

fn keep_reason(reason: &KeepReason) -> &'static str {
    match reason {
        KeepReason::BelowLengthFloor => "too short to judge",
        KeepReason::NaturalLanguage => "plain words",
        KeepReason::NoEvidence => "no code patterns matched",
        KeepReason::InsufficientEvidence { .. } => "too few code signals",
    }
}

pub fn print_created(file_name: &str) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", file_name).green()
    );
}
