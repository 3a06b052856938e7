//! Per-format column transforms.
//!
//! Each output format carries a flat lookup table from field name to
//! transform function. Fields without an entry render verbatim; the
//! renderer applies the identity fallback.

use crate::core::duration::format_duration;
use crate::domain::model::{Cell, OutputFormat};
use crate::utils::error::{ReportError, Result};

pub type Transform = fn(&str) -> Result<Cell>;

/// Look up the transform registered for a field under the given format.
pub fn transform_for(format: OutputFormat, field: &str) -> Option<Transform> {
    match (format, field) {
        (OutputFormat::Md, "status") => Some(status_md),
        (OutputFormat::Md, "duration") => Some(duration_md),
        (OutputFormat::Html, "status") => Some(status_html),
        (OutputFormat::Html, "duration") => Some(duration_html),
        _ => None,
    }
}

fn status_md(value: &str) -> Result<Cell> {
    let styled = if value == "passed" {
        format!("<span style='color:green'>{}", value)
    } else {
        format!("<span style='color:red'>{}", value)
    };
    Ok(Cell::plain(styled))
}

fn status_html(value: &str) -> Result<Cell> {
    let class = if value == "passed" {
        "status-passed"
    } else {
        "status-failed"
    };
    Ok(Cell::classed(value, class))
}

fn duration_md(value: &str) -> Result<Cell> {
    Ok(Cell::plain(format_duration(parse_seconds(value)?)))
}

fn duration_html(value: &str) -> Result<Cell> {
    Ok(Cell::classed(format_duration(parse_seconds(value)?), ""))
}

fn parse_seconds(value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| ReportError::InvalidFieldValue {
            field: "duration".to_string(),
            value: value.to_string(),
            reason: "expected a number of seconds".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md_status_styling() {
        let passed = status_md("passed").unwrap();
        assert_eq!(passed.text, "<span style='color:green'>passed");
        assert_eq!(passed.class, None);

        let failed = status_md("failed").unwrap();
        assert_eq!(failed.text, "<span style='color:red'>failed");

        // Anything other than "passed" is styled as a failure
        let error = status_md("error").unwrap();
        assert_eq!(error.text, "<span style='color:red'>error");
    }

    #[test]
    fn test_html_status_classes() {
        assert_eq!(
            status_html("passed").unwrap(),
            Cell::classed("passed", "status-passed")
        );
        assert_eq!(
            status_html("failed").unwrap(),
            Cell::classed("failed", "status-failed")
        );
        assert_eq!(
            status_html("skipped").unwrap(),
            Cell::classed("skipped", "status-failed")
        );
    }

    #[test]
    fn test_duration_transforms() {
        assert_eq!(duration_md("1.5").unwrap(), Cell::plain("1s 500ms"));
        assert_eq!(duration_html("0.002").unwrap(), Cell::classed("2ms", ""));
    }

    #[test]
    fn test_duration_rejects_non_numeric_value() {
        let err = duration_md("fast").unwrap_err();
        assert!(matches!(err, ReportError::InvalidFieldValue { .. }));
        assert!(duration_html("").is_err());
    }

    #[test]
    fn test_unregistered_fields_have_no_transform() {
        assert!(transform_for(OutputFormat::Md, "name").is_none());
        assert!(transform_for(OutputFormat::Html, "suite").is_none());
        assert!(transform_for(OutputFormat::Md, "status").is_some());
        assert!(transform_for(OutputFormat::Html, "duration").is_some());
    }
}
