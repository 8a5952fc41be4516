use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
  pub line: Option<String>
}

/// The one shared error slot. A new failure
/// overwrites whatever was shown before; task-level
/// sifter failures never land here.
#[function_component(ErrorBanner)]
pub fn error_banner(
  props: &ErrorBannerProps
) -> Html {
  let Some(line) = &props.line else {
    return html! {};
  };

  html! {
      <div class="error-banner">{ line }</div>
  }
}
