use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FailureModalProps {
  pub detail:     String,
  pub on_dismiss: Callback<MouseEvent>
}

/// Drill-down dialog for one failing task. The
/// detail renders as a text node, so markup in the
/// server's error text shows up as literal text
/// instead of executing. At most one dialog is open
/// at a time; inspecting another failure replaces
/// it.
#[function_component(FailureModal)]
pub fn failure_modal(
  props: &FailureModalProps
) -> Html {
  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="header">{ "Sifter failure" }</div>
              <pre class="failure-detail">{ &props.detail }</pre>
              <div class="actions">
                  <button class="btn" onclick={props.on_dismiss.clone()}>{ "Ok" }</button>
              </div>
          </div>
      </div>
  }
}
