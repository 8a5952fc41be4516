use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskActionsProps {
  pub on_refresh:
    Callback<MouseEvent>,
  pub on_clear: Callback<MouseEvent>
}

#[function_component(TaskActions)]
pub fn task_actions(
  props: &TaskActionsProps
) -> Html {
  html! {
      <div class="task-actions">
          <button class="btn" onclick={props.on_refresh.clone()}>{ "Refresh Status" }</button>
          <button class="btn" onclick={props.on_clear.clone()}>{ "Clear Completed" }</button>
      </div>
  }
}
