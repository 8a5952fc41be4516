use std::collections::BTreeMap;

use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SifterControlsProps {
  pub sifters:    Vec<String>,
  pub extra_args:
    BTreeMap<String, String>,
  pub on_change:
    Callback<(String, String)>,
  pub on_run:     Callback<String>
}

/// One run control per sifter the user may launch,
/// each with its own free-text extra-arguments
/// field. Argument acceptability is the server's
/// call; nothing is validated here.
#[function_component(SifterControls)]
pub fn sifter_controls(
  props: &SifterControlsProps
) -> Html {
  html! {
      <div class="panel sifters">
          <div class="header">{ "Sifters" }</div>
          {
              for props.sifters.iter().cloned().map(|name| {
                  let on_run = props.on_run.clone();
                  let on_change = props.on_change.clone();
                  let value = props
                      .extra_args
                      .get(&name)
                      .cloned()
                      .unwrap_or_default();
                  let run_name = name.clone();
                  let change_name = name.clone();

                  html! {
                      <div class="sifter-row">
                          <span class="sifter-name">{ &name }</span>
                          <input
                              class="extra-args"
                              placeholder="extra arguments"
                              value={value}
                              oninput={move |e: InputEvent| {
                                  let input: HtmlInputElement = e.target_unchecked_into();
                                  on_change.emit((change_name.clone(), input.value()));
                              }}
                          />
                          <button class="btn sifter-run" onclick={move |_| on_run.emit(run_name.clone())}>
                              { "Run" }
                          </button>
                      </div>
                  }
              })
          }
      </div>
  }
}
