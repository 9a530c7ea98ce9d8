//! Integration tests for batch checking and report output.

use clap::Parser;
use livr_cli::cli::CheckArgs;
use livr_cli::commands::{EXIT_ERROR, EXIT_INVALID, EXIT_OK, check_exit_code, run_check};
use livr_cli::report::{CheckStatus, check_values, parse_input};
use livr_model::{ErrorCode, RuleError, Value};
use livr_numeric::{RuleOptions, build_rule};

fn inputs(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn check_args(args: &[&str]) -> CheckArgs {
    CheckArgs::try_parse_from(std::iter::once("check").chain(args.iter().copied()))
        .expect("parse check arguments")
}

fn no_stdin() -> &'static [u8] {
    b""
}

#[test]
fn inputs_parse_as_json_with_string_fallback() {
    assert_eq!(parse_input("42", false), Value::Integer(42));
    assert_eq!(parse_input("4.5", false), Value::Float(4.5));
    assert_eq!(parse_input("\"42\"", false), Value::string("42"));
    assert_eq!(parse_input("abc", false), Value::string("abc"));
    assert_eq!(parse_input("42", true), Value::string("42"));
    assert!(matches!(parse_input("[1, 2]", false), Value::List(_)));
}

#[test]
fn report_counts_and_statuses() {
    let rule = build_rule("integer", None, &RuleOptions::new()).expect("rule");
    let report = check_values(rule.as_ref(), inputs(&["7", "\"8\"", "7.5", "{}"]), false);
    assert_eq!(report.passed, 2);
    assert_eq!(report.failed, 2);
    assert!(report.has_failures());
    let statuses: Vec<CheckStatus> = report.entries.iter().map(|entry| entry.status).collect();
    assert_eq!(
        statuses,
        vec![
            CheckStatus::Valid,
            CheckStatus::Coerced,
            CheckStatus::Invalid,
            CheckStatus::Invalid,
        ]
    );
    assert_eq!(report.entries[3].error, Some(ErrorCode::Format));
    assert_eq!(report.entries[1].output, Some(Value::Integer(8)));
}

#[test]
fn raw_mode_coerces_every_value() {
    let rule = build_rule("positive_integer", None, &RuleOptions::new()).expect("rule");
    let report = check_values(rule.as_ref(), inputs(&["3", "0"]), true);
    assert_eq!(report.entries[0].status, CheckStatus::Coerced);
    assert_eq!(
        report.entries[1].error,
        Some(ErrorCode::NotPositiveInteger)
    );
}

#[test]
fn overridden_error_code_is_reported() {
    let options = RuleOptions::new().with_error_code(ErrorCode::NotNumber);
    let rule = build_rule("max_number", Some(Value::Integer(1)), &options).expect("rule");
    let report = check_values(rule.as_ref(), inputs(&["2"]), false);
    assert_eq!(report.error_code, ErrorCode::NotNumber);
    assert_eq!(report.entries[0].error, Some(ErrorCode::NotNumber));
}

#[test]
fn json_report_snapshot() {
    let rule = build_rule("max_number", Some(Value::Integer(10)), &RuleOptions::new())
        .expect("rule");
    let report = check_values(
        rule.as_ref(),
        inputs(&["10", "\"10.0\"", "11", "abc"]),
        false,
    );
    let json = serde_json::to_string_pretty(&report).expect("serialize report");
    insta::assert_snapshot!(json, @r###"
    {
      "rule": "max_number",
      "error_code": "TOO_HIGH",
      "passed": 2,
      "failed": 2,
      "entries": [
        {
          "input": "10",
          "value_type": "integer",
          "status": "valid",
          "output": 10
        },
        {
          "input": "\"10.0\"",
          "value_type": "string",
          "status": "coerced",
          "output": 10
        },
        {
          "input": "11",
          "value_type": "integer",
          "status": "invalid",
          "error": "TOO_HIGH"
        },
        {
          "input": "abc",
          "value_type": "string",
          "status": "invalid",
          "error": "NOT_NUMBER"
        }
      ]
    }
    "###);
}

#[test]
fn decimal_output_serializes_as_number() {
    let rule = build_rule("decimal", None, &RuleOptions::new()).expect("rule");
    let report = check_values(rule.as_ref(), inputs(&["10"]), true);
    let json = serde_json::to_value(&report.entries[0]).expect("serialize entry");
    assert_eq!(json["status"], "coerced");
    assert_eq!(json["output"], serde_json::json!(10));
}

#[test]
fn check_command_builds_rule_from_json_argument() {
    let args = check_args(&["number_between", "--arg", "[1, \"5\"]", "3", "\"4.0\"", "9"]);
    let result = run_check(&args, no_stdin());
    let report = result.as_ref().expect("report");
    assert_eq!(report.rule, "number_between");
    assert_eq!(report.passed, 2);
    assert_eq!(report.entries[1].output, Some(Value::Integer(4)));
    assert_eq!(report.entries[2].error, Some(ErrorCode::TooHigh));
    assert_eq!(check_exit_code(&result), EXIT_INVALID);
}

#[test]
fn check_command_reads_stdin_when_no_values_are_given() {
    let args = check_args(&["max_number", "--arg", "10", "--raw"]);
    let result = run_check(&args, "5\n\n  \n10.0\n".as_bytes());
    let report = result.as_ref().expect("report");
    let given: Vec<&str> = report.entries.iter().map(|entry| entry.input.as_str()).collect();
    assert_eq!(given, vec!["5", "10.0"]);
    assert_eq!(report.entries[1].status, CheckStatus::Coerced);
    assert_eq!(check_exit_code(&result), EXIT_OK);
}

#[test]
fn check_command_applies_error_code_override() {
    let args = check_args(&["min_number", "--arg", "3", "--error-code", "not_number", "1"]);
    let report = run_check(&args, no_stdin()).expect("report");
    assert_eq!(report.error_code, ErrorCode::NotNumber);
    assert_eq!(report.entries[0].error, Some(ErrorCode::NotNumber));
}

#[test]
fn unknown_error_code_is_an_error() {
    let args = check_args(&["integer", "--error-code", "bogus", "1"]);
    let result = run_check(&args, no_stdin());
    let error = result.as_ref().err().expect("error");
    assert_eq!(error.to_string(), "unknown error code: bogus");
    assert_eq!(check_exit_code(&result), EXIT_ERROR);
}

#[test]
fn malformed_argument_json_is_an_error() {
    let args = check_args(&["max_number", "--arg", "{oops", "1"]);
    let result = run_check(&args, no_stdin());
    let error = result.as_ref().err().expect("error");
    assert_eq!(error.to_string(), "parse --arg as JSON");
    assert_eq!(check_exit_code(&result), EXIT_ERROR);
}

#[test]
fn non_numeric_argument_is_a_construction_error() {
    let args = check_args(&["max_number", "--arg", "\"ten\"", "1"]);
    let result = run_check(&args, no_stdin());
    let error = result.as_ref().err().expect("error");
    assert!(matches!(
        error.downcast_ref::<RuleError>(),
        Some(RuleError::InvalidArgument { rule: "max_number", .. })
    ));
    assert_eq!(check_exit_code(&result), EXIT_ERROR);
}

#[test]
fn unknown_rule_is_a_construction_error() {
    let args = check_args(&["between", "1"]);
    let result = run_check(&args, no_stdin());
    let error = result.as_ref().err().expect("error");
    assert_eq!(
        error.downcast_ref::<RuleError>(),
        Some(&RuleError::UnknownRule {
            name: "between".to_string()
        })
    );
    assert_eq!(check_exit_code(&result), EXIT_ERROR);
}
