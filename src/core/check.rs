use serde::{Deserialize, Serialize};

use crate::core::types::{CheckOutcome, Severity};

/// Outcome of one metadata check
///
/// A *violation* is an executed check whose result is [`CheckOutcome::Fail`].
/// Checks that could not run because their inputs were missing are kept as
/// results with `executed == false`, so a report always shows what was and
/// wasn't checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub check_name: String,
    pub severity: Severity,
    pub executed: bool,
    pub result: CheckOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResult {
    pub fn pass(check_name: impl Into<String>, severity: Severity) -> Self {
        Self {
            check_name: check_name.into(),
            severity,
            executed: true,
            result: CheckOutcome::Pass,
            message: None,
        }
    }

    pub fn fail(
        check_name: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check_name: check_name.into(),
            severity,
            executed: true,
            result: CheckOutcome::Fail,
            message: Some(message.into()),
        }
    }

    /// A check skipped because its inputs were missing
    pub fn not_executed(
        check_name: impl Into<String>,
        severity: Severity,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            check_name: check_name.into(),
            severity,
            executed: false,
            result: CheckOutcome::Pass,
            message: Some(reason.into()),
        }
    }

    /// Collapse the violations found by one check into a single result:
    /// pass when there are none, otherwise fail with every message joined.
    pub fn from_violations(
        check_name: impl Into<String>,
        severity: Severity,
        violations: &[CheckResult],
    ) -> Self {
        if violations.is_empty() {
            return Self::pass(check_name, severity);
        }
        let message = violations
            .iter()
            .filter_map(|v| v.message.as_deref())
            .collect::<Vec<_>>()
            .join("; ");
        Self::fail(check_name, severity, message)
    }

    #[must_use]
    pub fn is_violation(&self) -> bool {
        self.executed && self.result == CheckOutcome::Fail
    }
}

/// All results for one checked file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub subject: String,
    pub generated_at: String,
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn violations(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_violation())
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.executed && r.result == CheckOutcome::Pass)
            .count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.violations().count()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.results.iter().filter(|r| !r.executed).count()
    }

    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.violations().next().is_some()
    }
}
