//! Check results and their rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use livr_model::{ErrorCode, Outcome, Rule, Value};

/// How a single value fared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Accepted unchanged.
    Valid,
    /// Accepted and replaced.
    Coerced,
    Invalid,
}

/// Result for one input value.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    /// Input as given on the command line or stdin.
    pub input: String,
    pub value_type: &'static str,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
    /// Final value: the replacement when coerced, the original when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
}

impl CheckEntry {
    pub fn from_outcome(input: String, value: Value, outcome: Outcome) -> Self {
        let value_type = value.type_name();
        let status = match &outcome {
            Outcome::Pass(Some(_)) => CheckStatus::Coerced,
            Outcome::Pass(None) => CheckStatus::Valid,
            Outcome::Fail(_) => CheckStatus::Invalid,
        };
        let (error, output) = match outcome.resolve(value) {
            Ok(output) => (None, Some(output)),
            Err(code) => (Some(code), None),
        };
        Self {
            input,
            value_type,
            status,
            error,
            output,
        }
    }
}

/// Results of running one rule over a batch of values.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub rule: &'static str,
    pub error_code: ErrorCode,
    pub passed: usize,
    pub failed: usize,
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    pub fn new(rule: &dyn Rule) -> Self {
        Self {
            rule: rule.name(),
            error_code: rule.error_code(),
            passed: 0,
            failed: 0,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: CheckEntry) {
        if entry.status == CheckStatus::Invalid {
            self.failed += 1;
        } else {
            self.passed += 1;
        }
        self.entries.push(entry);
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Parse an input as JSON, falling back to a plain string when it is not
/// valid JSON. With `raw`, the input is always a string.
pub fn parse_input(text: &str, raw: bool) -> Value {
    if raw {
        return Value::string(text);
    }
    serde_json::from_str::<Value>(text).unwrap_or_else(|_| Value::string(text))
}

/// Validate every input against `rule`.
pub fn check_values<I>(rule: &dyn Rule, inputs: I, raw: bool) -> CheckReport
where
    I: IntoIterator<Item = String>,
{
    let mut report = CheckReport::new(rule);
    for input in inputs {
        let value = parse_input(&input, raw);
        let outcome = rule.validate(&value);
        report.push(CheckEntry::from_outcome(input, value, outcome));
    }
    report
}

pub fn print_report(report: &CheckReport) {
    println!("Rule: {} (error code {})", report.rule, report.error_code);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Type"),
        header_cell("Status"),
        header_cell("Error"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    for entry in &report.entries {
        table.add_row(vec![
            Cell::new(&entry.input),
            dim_cell(entry.value_type),
            status_cell(entry.status),
            entry
                .error
                .map(|code| Cell::new(code).fg(Color::Red))
                .unwrap_or_else(|| dim_cell("-")),
            entry
                .output
                .as_ref()
                .map(|output| Cell::new(output.to_string()))
                .unwrap_or_else(|| dim_cell("-")),
        ]);
    }
    println!("{table}");
    println!("Passed: {}  Failed: {}", report.passed, report.failed);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: CheckStatus) -> Cell {
    let cell = match status {
        CheckStatus::Valid => Cell::new("valid").fg(Color::Green),
        CheckStatus::Coerced => Cell::new("coerced").fg(Color::Yellow),
        CheckStatus::Invalid => Cell::new("invalid")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    };
    cell.set_alignment(CellAlignment::Center)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
