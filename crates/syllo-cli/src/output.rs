//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use syllo_domain::{stage_views, HistoryRecord, StepStatus, WorkflowResult};
use syllo_export::{final_answer_text, format_time, history_to_json};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format history records output.
    pub fn format_records(&self, records: &[HistoryRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(history_to_json(records)),
            OutputFormat::Table => Ok(self.format_records_table(records)),
            OutputFormat::Quiet => Ok(format_records_quiet(records)),
        }
    }

    /// Format records as a table.
    fn format_records_table(&self, records: &[HistoryRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No history records.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Question", "Answer", "Time"]);

        for record in records {
            builder.push_record([
                &truncate(&record.id, 14),
                &truncate(&record.question, 40),
                &truncate(&record.result, 30),
                &format_time(&record.timestamp),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Render a completed workflow result for the terminal.
    ///
    /// Each pipeline stage gets a colored section header with a status
    /// tag, followed by the final-answer summary.
    pub fn format_workflow(&self, result: &WorkflowResult) -> String {
        let mut out = String::new();

        for view in stage_views(result) {
            let tag = match view.status {
                StepStatus::Success => self.colorize("[成功]", "green"),
                StepStatus::Error => self.colorize("[错误]", "red"),
                StepStatus::Pending => self.colorize("[等待]", "yellow"),
            };
            let heading = format!("=== {} ===", view.stage.title());
            out.push_str(&format!("{} {}\n", self.colorize(&heading, "cyan"), tag));
            out.push_str(&format!("{}\n\n", view.content));
        }

        out.push_str(&self.colorize("=== 最终答案摘要 ===", "cyan"));
        out.push('\n');
        out.push_str(&final_answer_text(&result.final_answer));
        out.push('\n');
        out
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn format_records_quiet(records: &[HistoryRecord]) -> String {
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    ids.join("\n")
}

/// Truncate on character boundaries, appending an ellipsis when cut.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", head)
}
