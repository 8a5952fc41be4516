use sifterdeck_core::projection::TaskRow;
use sifterdeck_shared::TaskId;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskTableProps {
  pub rows:       Vec<TaskRow>,
  /// Sequence number of the applied snapshot. It
  /// keys the table body, so every snapshot
  /// remounts it: the fade-in plays again and the
  /// failure flash re-triggers for rows that still
  /// report failure.
  pub snapshot:   u64,
  pub on_inspect: Callback<TaskId>
}

#[function_component(TaskTable)]
pub fn task_table(
  props: &TaskTableProps
) -> Html {
  html! {
      <table class="tasks-table">
          <thead>
              <tr>
                  <th>{ "sifter" }</th>
                  <th>{ "course" }</th>
                  <th>{ "time" }</th>
                  <th>{ "task id" }</th>
                  <th>{ "status" }</th>
              </tr>
          </thead>
          <tbody key={props.snapshot.to_string()} class="fade-in">
              {
                  for props.rows.iter().cloned().map(|row| {
                      let on_inspect = props.on_inspect.clone();
                      let row_class = if row.failed {
                          "task-row failed"
                      } else {
                          "task-row"
                      };
                      let status_cell = if row.failed {
                          let id = row.task_id.clone();
                          html! {
                              <a
                                  href="#"
                                  class="failure-output"
                                  onclick={move |e: MouseEvent| {
                                      e.prevent_default();
                                      on_inspect.emit(id.clone());
                                  }}
                              >
                                  { row.status_label }
                              </a>
                          }
                      } else {
                          html! { <>{ row.status_label }</> }
                      };

                      html! {
                          <tr class={row_class}>
                              <td>{ &row.sifter }</td>
                              <td>{ &row.course }</td>
                              <td>{ &row.time }</td>
                              <td>{ row.task_id.to_string() }</td>
                              <td>{ status_cell }</td>
                          </tr>
                      }
                  })
              }
          </tbody>
      </table>
  }
}
