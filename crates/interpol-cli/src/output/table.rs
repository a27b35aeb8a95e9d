//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use interpol_syntax::Segment;

use crate::commands::FileReport;

/// Format segments as a table, one row per segment.
pub fn format_segment_table(segments: &[Segment]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Kind", "Offset", "Text"]);

    for (index, segment) in segments.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            segment.kind().to_string(),
            segment.offset().to_string(),
            format!("{:?}", segment.text()),
        ]);
    }

    table
}

/// Format per-file rewrite results.
pub fn format_report_table(reports: &[FileReport]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["File", "Status", "Interpolated", "Unchanged", "Skipped"]);

    for report in reports {
        let status = if report.error.is_some() { "error" } else { "ok" };
        table.add_row(vec![
            report.file.clone(),
            status.to_string(),
            report.stats.interpolated.to_string(),
            report.stats.unchanged.to_string(),
            report.stats.skipped.to_string(),
        ]);
    }

    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
