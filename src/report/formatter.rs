//! Report formatter implementation
//! Author: kartik4091
//! Created: 2025-06-05

use std::path::Path;

use super::ChangeReport;

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    PlainText,
    Json,
}

/// Formats change reports for people and for machines
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format(report: &ChangeReport, output: &Path, format: ReportFormat) -> String {
        match format {
            ReportFormat::PlainText => Self::to_text(report, output),
            ReportFormat::Json => Self::to_json(report),
        }
    }

    fn to_text(report: &ChangeReport, output: &Path) -> String {
        let mut text = String::new();
        text.push_str("SANITIZATION COMPLETE!\n");
        text.push_str(&"=".repeat(45));
        text.push_str("\n\n");

        let name = output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| output.display().to_string());
        text.push_str(&format!("Output: {}\n\n", name));

        let lines = report.summary_lines();
        if lines.is_empty() {
            text.push_str("No changes needed.\n");
        } else {
            text.push_str("Changes:\n");
            for line in lines {
                text.push_str(&format!("  [OK] {}\n", line));
            }
        }
        text
    }

    fn to_json(report: &ChangeReport) -> String {
        // A struct of bools and one integer always serializes
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }
}
