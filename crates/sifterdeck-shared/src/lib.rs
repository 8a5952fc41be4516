use std::fmt;

use serde::{
  Deserialize,
  Serialize,
  de
};

/// Opaque task identity as handed out by the job
/// scheduler. The wire carries either a string or a
/// bare integer; both normalize to a string so the
/// id can key rows across refreshes.
#[derive(
  Debug,
  Clone,
  Serialize,
  PartialEq,
  Eq,
  Hash,
)]
pub struct TaskId(String);

impl TaskId {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for TaskId {
  fn from(raw: &str) -> Self {
    TaskId(raw.to_string())
  }
}

impl<'de> Deserialize<'de> for TaskId {
  fn deserialize<D>(
    deserializer: D
  ) -> Result<Self, D::Error>
  where
    D: de::Deserializer<'de>
  {
    struct IdVisitor;

    impl de::Visitor<'_> for IdVisitor {
      type Value = TaskId;

      fn expecting(
        &self,
        f: &mut fmt::Formatter<'_>
      ) -> fmt::Result {
        f.write_str(
          "a string or integer task id"
        )
      }

      fn visit_str<E>(
        self,
        value: &str
      ) -> Result<TaskId, E>
      where
        E: de::Error
      {
        Ok(TaskId(value.to_string()))
      }

      fn visit_u64<E>(
        self,
        value: u64
      ) -> Result<TaskId, E>
      where
        E: de::Error
      {
        Ok(TaskId(value.to_string()))
      }

      fn visit_i64<E>(
        self,
        value: i64
      ) -> Result<TaskId, E>
      where
        E: de::Error
      {
        Ok(TaskId(value.to_string()))
      }
    }

    deserializer
      .deserialize_any(IdVisitor)
  }
}

/// States the scheduler reports for a task. Only
/// `SIFTER_FAILURE` gets special treatment in the
/// client; everything else renders as plain text.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(
  rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum TaskStatus {
  Pending,
  Started,
  Retry,
  Success,
  Failure,
  Revoked,
  SifterFailure
}

impl TaskStatus {
  pub fn is_sifter_failure(self) -> bool {
    matches!(
      self,
      TaskStatus::SifterFailure
    )
  }

  /// Lower-cased form of the wire name, shown in
  /// the status cell regardless of server casing.
  pub fn label(self) -> &'static str {
    match self {
      | TaskStatus::Pending => {
        "pending"
      }
      | TaskStatus::Started => {
        "started"
      }
      | TaskStatus::Retry => "retry",
      | TaskStatus::Success => {
        "success"
      }
      | TaskStatus::Failure => {
        "failure"
      }
      | TaskStatus::Revoked => {
        "revoked"
      }
      | TaskStatus::SifterFailure => {
        "sifter_failure"
      }
    }
  }
}

/// Result payload a finished sifter run reports.
/// Only `error` is consumed client-side, as the
/// drill-down text for failed runs.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
pub struct SifterResults {
  #[serde(default)]
  pub success: bool,
  pub sifter:  Option<String>,
  pub error:   Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct Task {
  pub task_id:    TaskId,
  pub sifter:     String,
  pub course:     String,
  pub time:       String,
  pub status:     TaskStatus,
  #[serde(default)]
  pub extra_args: Vec<String>,
  #[serde(default)]
  pub results:    Option<SifterResults>
}

/// Every endpoint answers with the full task
/// collection; a snapshot supersedes whatever the
/// client held before.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskEnvelope {
  pub tasks: Vec<Task>
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct RunSifterArgs {
  pub sifter:     String,
  pub extra_args: String
}

/// Error body the server sends with non-2xx
/// responses.
#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct ApiError {
  pub message: String
}

#[cfg(test)]
mod wire_tests {
  use super::*;

  #[test]
  fn envelope_accepts_string_and_numeric_ids(
  ) {
    let raw = r#"{
      "tasks": [
        {"task_id": "abc-1", "sifter": "a", "course": "c1", "time": "t1", "status": "SUCCESS"},
        {"task_id": 2, "sifter": "b", "course": "c2", "time": "t2", "status": "PENDING"}
      ]
    }"#;

    let envelope: TaskEnvelope =
      serde_json::from_str(raw)
        .expect("decode envelope");

    assert_eq!(envelope.tasks.len(), 2);
    assert_eq!(
      envelope.tasks[0]
        .task_id
        .as_str(),
      "abc-1"
    );
    assert_eq!(
      envelope.tasks[1]
        .task_id
        .as_str(),
      "2"
    );
    assert!(
      envelope.tasks[0]
        .results
        .is_none()
    );
    assert!(
      envelope.tasks[1]
        .extra_args
        .is_empty()
    );
  }

  #[test]
  fn failure_results_carry_error_text()
  {
    let raw = r#"{
      "task_id": "x",
      "sifter": "grade_dump",
      "course": "c3",
      "time": "t3",
      "status": "SIFTER_FAILURE",
      "results": {"success": false, "error": "boom"}
    }"#;

    let task: Task =
      serde_json::from_str(raw)
        .expect("decode task");

    assert!(task.status.is_sifter_failure());
    assert_eq!(
      task
        .results
        .and_then(|r| r.error),
      Some("boom".to_string())
    );
  }

  #[test]
  fn unknown_status_is_rejected() {
    let raw = r#"{
      "task_id": "x",
      "sifter": "a",
      "course": "c",
      "time": "t",
      "status": "HALF_DONE"
    }"#;

    assert!(
      serde_json::from_str::<Task>(raw)
        .is_err()
    );
  }

  #[test]
  fn status_labels_are_lower_cased_wire_names(
  ) {
    assert_eq!(
      TaskStatus::Success.label(),
      "success"
    );
    assert_eq!(
      TaskStatus::SifterFailure
        .label(),
      "sifter_failure"
    );
    assert!(
      !TaskStatus::Failure.is_sifter_failure()
    );
  }

  #[test]
  fn run_args_serialize_flat() {
    let args = RunSifterArgs {
      sifter:     "grade_dump"
        .to_string(),
      extra_args: "--full".to_string()
    };

    let value =
      serde_json::to_value(&args)
        .expect("encode args");
    assert_eq!(
      value["sifter"],
      "grade_dump"
    );
    assert_eq!(
      value["extra_args"],
      "--full"
    );
  }
}
