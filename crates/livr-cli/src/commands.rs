//! Subcommand implementations.

use std::io::{self, BufRead};

use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use tracing::{info, info_span};

use livr_model::{ErrorCode, Value};
use livr_numeric::{RuleKind, RuleOptions, build_rule};

use crate::cli::CheckArgs;
use crate::report::{CheckReport, apply_table_style, check_values, header_cell};

/// Every value passed.
pub const EXIT_OK: i32 = 0;
/// At least one value failed its rule.
pub const EXIT_INVALID: i32 = 1;
/// Usage or rule construction error.
pub const EXIT_ERROR: i32 = 2;

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Argument"),
        header_cell("Error code"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for kind in RuleKind::all() {
        table.add_row(vec![
            kind.name().to_string(),
            kind.arity().label().to_string(),
            kind.default_error_code().to_string(),
            kind.description().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Run `check`. Values come from `args` or, when none are given, one per
/// line from `input`.
pub fn run_check<R: BufRead>(args: &CheckArgs, input: R) -> Result<CheckReport> {
    let span = info_span!("check", rule = %args.rule);
    let _guard = span.enter();

    let argument = args
        .argument
        .as_deref()
        .map(|text| serde_json::from_str::<Value>(text).context("parse --arg as JSON"))
        .transpose()?;
    let mut options = RuleOptions::new();
    if let Some(code) = &args.error_code {
        let code = ErrorCode::parse(code).ok_or_else(|| anyhow!("unknown error code: {code}"))?;
        options = options.with_error_code(code);
    }
    let rule = build_rule(&args.rule, argument, &options)?;

    let inputs = if args.values.is_empty() {
        read_values(input).context("read values from stdin")?
    } else {
        args.values.clone()
    };
    let report = check_values(rule.as_ref(), inputs, args.raw);
    info!(
        passed = report.passed,
        failed = report.failed,
        "check complete"
    );
    Ok(report)
}

/// Process exit code for a `check` result.
pub fn check_exit_code(result: &Result<CheckReport>) -> i32 {
    match result {
        Ok(report) if report.has_failures() => EXIT_INVALID,
        Ok(_) => EXIT_OK,
        Err(_) => EXIT_ERROR,
    }
}

/// One value per line; blank lines are skipped.
fn read_values<R: BufRead>(input: R) -> io::Result<Vec<String>> {
    let mut values = Vec::new();
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            values.push(line);
        }
    }
    Ok(values)
}
