use web_sys::Element;

/// Everything the hosting page injects at boot: the
/// versioned API prefix and the sifters the current
/// user is allowed to launch. Both live as
/// attributes on the mount element, the way the
/// server template stamps them out.
#[derive(Debug, Clone, PartialEq)]
pub struct BootConfig {
  pub api_base: String,
  pub sifters:  Vec<String>
}

pub const DEFAULT_API_BASE: &str =
  "/api/v0.1";

impl BootConfig {
  pub fn from_mount(
    mount: &Element
  ) -> Self {
    let api_base = mount
      .get_attribute("data-api-base")
      .unwrap_or_else(|| {
        DEFAULT_API_BASE.to_string()
      });
    let sifters = mount
      .get_attribute("data-sifters")
      .map(|raw| {
        parse_sifter_list(&raw)
      })
      .unwrap_or_default();

    tracing::info!(
      api_base = %api_base,
      sifters = sifters.len(),
      "read boot configuration"
    );

    BootConfig {
      api_base: normalize_base(
        &api_base
      ),
      sifters
    }
  }
}

/// A missing or broken sifter list must not keep
/// the console from booting; the task table and the
/// refresh/clear controls work without one.
fn parse_sifter_list(
  raw: &str
) -> Vec<String> {
  match serde_json::from_str::<
    Vec<String>,
  >(raw)
  {
    | Ok(sifters) => sifters,
    | Err(error) => {
      tracing::warn!(
        %error,
        "ignoring undecodable \
         data-sifters attribute"
      );
      Vec::new()
    }
  }
}

fn normalize_base(
  base: &str
) -> String {
  let trimmed =
    base.trim_end_matches('/');
  if trimmed.is_empty() {
    DEFAULT_API_BASE.to_string()
  } else {
    trimmed.to_string()
  }
}
