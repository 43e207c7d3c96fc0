use super::*;

/// When favorite and delete changes are rendered.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Update {
  /// After the backend accepts the request.
  #[default]
  Confirmed,
  /// Immediately, rolled back if the backend rejects the request.
  Optimistic,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub surface_errors: bool,
  pub update: Update,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      surface_errors: true,
      update: Update::Confirmed,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    assert_eq!(serde_json::from_str::<Config>("{}").unwrap(), Config::default());
  }

  #[test]
  fn optimistic() {
    assert_eq!(
      serde_json::from_str::<Config>(r#"{"update": "optimistic", "surface_errors": false}"#)
        .unwrap(),
      Config {
        surface_errors: false,
        update: Update::Optimistic,
      },
    );
  }

  #[test]
  fn unknown_field() {
    assert!(serde_json::from_str::<Config>(r#"{"retries": 3}"#).is_err());
  }
}
