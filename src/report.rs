use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one lifecycle run. Serializes with a `status` tag so the
/// printed record reads as either
/// `{"status": "completed", "todo_id": ..}` or
/// `{"status": "error", "error_message": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed {
        todo_id: u64,
        polls_completed: u32,
        deletion_success: bool,
    },
    Error {
        error_message: String,
    },
}

/// The full result record for one run. Timestamps are populated regardless
/// of outcome.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    #[serde(flatten)]
    pub outcome: RunOutcome,
    pub duration_seconds: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn report(outcome: RunOutcome) -> RunReport {
        let start_time = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        RunReport {
            outcome,
            duration_seconds: 40.0,
            start_time,
            end_time: start_time + chrono::Duration::seconds(40),
        }
    }

    #[test]
    fn test_completed_report_shape() {
        let report = report(RunOutcome::Completed {
            todo_id: 101,
            polls_completed: 5,
            deletion_success: true,
        });
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "completed");
        assert_eq!(json["todo_id"], 101);
        assert_eq!(json["polls_completed"], 5);
        assert_eq!(json["deletion_success"], true);
        assert_eq!(json["duration_seconds"], 40.0);
        assert!(json.get("error_message").is_none());
        assert!(json["start_time"].is_string());
        assert!(json["end_time"].is_string());
    }

    #[test]
    fn test_error_report_shape() {
        let report = report(RunOutcome::Error {
            error_message: "request failed: connection refused".to_string(),
        });
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["error_message"], "request failed: connection refused");
        assert!(json.get("todo_id").is_none());
        assert!(json.get("polls_completed").is_none());
        assert!(json.get("deletion_success").is_none());
    }

    #[test]
    fn test_is_success() {
        assert!(report(RunOutcome::Completed {
            todo_id: 1,
            polls_completed: 5,
            deletion_success: true,
        })
        .is_success());
        assert!(!report(RunOutcome::Error {
            error_message: "boom".to_string(),
        })
        .is_success());
    }
}
