use sifterdeck_shared::{
  Task,
  TaskId
};

/// One rendered table row. Derived entirely from a
/// server snapshot; the view never edits it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
  pub task_id:      TaskId,
  pub sifter:       String,
  pub course:       String,
  pub time:         String,
  pub status_label: &'static str,
  pub failed:       bool
}

/// Projects a task snapshot into row view-models,
/// preserving server order verbatim. The rendered
/// row count and order must always equal the
/// snapshot's.
pub fn project(
  tasks: &[Task]
) -> Vec<TaskRow> {
  let rows: Vec<TaskRow> = tasks
    .iter()
    .map(|task| TaskRow {
      task_id:      task
        .task_id
        .clone(),
      sifter:       task
        .sifter
        .clone(),
      course:       task
        .course
        .clone(),
      time:         task.time.clone(),
      status_label: task
        .status
        .label(),
      failed:       task
        .status
        .is_sifter_failure()
    })
    .collect();

  tracing::debug!(
    total = rows.len(),
    failed = rows
      .iter()
      .filter(|row| row.failed)
      .count(),
    "projected task snapshot"
  );

  rows
}

/// Resolves the drill-down text for a failing task
/// from the current snapshot at click time, so an
/// open dialog can never show data from a
/// superseded snapshot.
pub fn failure_detail<'a>(
  tasks: &'a [Task],
  id: &TaskId
) -> Option<&'a str> {
  tasks
    .iter()
    .find(|task| {
      &task.task_id == id
        && task
          .status
          .is_sifter_failure()
    })
    .map(|task| {
      task
        .results
        .as_ref()
        .and_then(|results| {
          results.error.as_deref()
        })
        .unwrap_or("")
    })
}

#[cfg(test)]
mod projection_tests {
  use sifterdeck_shared::{
    SifterResults,
    TaskStatus
  };

  use super::*;

  fn task(
    id: &str,
    status: TaskStatus
  ) -> Task {
    Task {
      task_id:    TaskId::from(id),
      sifter:     format!(
        "sifter-{id}"
      ),
      course:     "course-1"
        .to_string(),
      time:       "2014-03-01 12:00:00Z"
        .to_string(),
      status,
      extra_args: vec![],
      results:    None
    }
  }

  #[test]
  fn rows_preserve_order_and_count() {
    let tasks = vec![
      task("b", TaskStatus::Pending),
      task("a", TaskStatus::Success),
      task("c", TaskStatus::Started),
    ];

    let rows = project(&tasks);

    assert_eq!(rows.len(), 3);
    let ids: Vec<&str> = rows
      .iter()
      .map(|row| row.task_id.as_str())
      .collect();
    assert_eq!(ids, ["b", "a", "c"]);
  }

  #[test]
  fn only_sifter_failure_marks_a_row_failed(
  ) {
    let tasks = vec![
      task("1", TaskStatus::Failure),
      task(
        "2",
        TaskStatus::SifterFailure
      ),
    ];

    let rows = project(&tasks);

    assert!(!rows[0].failed);
    assert_eq!(
      rows[0].status_label,
      "failure"
    );
    assert!(rows[1].failed);
    assert_eq!(
      rows[1].status_label,
      "sifter_failure"
    );
  }

  #[test]
  fn projection_is_idempotent() {
    let tasks = vec![
      task("1", TaskStatus::Success),
      task(
        "2",
        TaskStatus::SifterFailure
      ),
    ];

    assert_eq!(
      project(&tasks),
      project(&tasks)
    );
  }

  #[test]
  fn failure_detail_passes_markup_through_verbatim(
  ) {
    let mut failed = task(
      "2",
      TaskStatus::SifterFailure
    );
    failed.results =
      Some(SifterResults {
        success: false,
        sifter:  None,
        error:   Some(
          "<script>alert(1)</script>"
            .to_string()
        )
      });
    let tasks = vec![
      task("1", TaskStatus::Success),
      failed,
    ];

    assert_eq!(
      failure_detail(
        &tasks,
        &TaskId::from("2")
      ),
      Some("<script>alert(1)</script>")
    );
  }

  #[test]
  fn failure_detail_ignores_healthy_and_missing_tasks(
  ) {
    let tasks = vec![task(
      "1",
      TaskStatus::Success
    )];

    assert_eq!(
      failure_detail(
        &tasks,
        &TaskId::from("1")
      ),
      None
    );
    assert_eq!(
      failure_detail(
        &tasks,
        &TaskId::from("missing")
      ),
      None
    );
  }

  #[test]
  fn failure_detail_defaults_to_empty_text(
  ) {
    let tasks = vec![task(
      "2",
      TaskStatus::SifterFailure
    )];

    assert_eq!(
      failure_detail(
        &tasks,
        &TaskId::from("2")
      ),
      Some("")
    );
  }
}
