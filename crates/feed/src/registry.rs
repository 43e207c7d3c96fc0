use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Binding {
  pub action: Action,
  /// Element id of the element the listener is attached to.
  pub container: &'static str,
}

impl Binding {
  pub fn event_type(&self) -> &'static str {
    self.action.event_type()
  }
}

/// Maps containers and actions to the events they dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct Registry {
  bindings: Vec<Binding>,
}

impl Default for Registry {
  fn default() -> Self {
    let mut registry = Self::empty()
      .with("submit-form", Action::Submit)
      .with("nav-all", Action::ShowAll)
      .with("nav-my-stories", Action::ShowOwn)
      .with("nav-favorites", Action::ShowFavorites)
      .with("nav-submit-story", Action::ShowForm);

    for region in Region::iter() {
      registry = registry.with(region.container(), Action::ToggleFavorite);

      if region.show_delete() {
        registry = registry.with(region.container(), Action::Delete);
      }
    }

    registry
  }
}

impl Registry {
  pub fn empty() -> Self {
    Self {
      bindings: Vec::new(),
    }
  }

  pub fn with(mut self, container: &'static str, action: Action) -> Self {
    let binding = Binding { action, container };
    if !self.bindings.contains(&binding) {
      self.bindings.push(binding);
    }
    self
  }

  pub fn bindings(&self) -> &[Binding] {
    &self.bindings
  }

  pub fn containers(&self) -> BTreeSet<&'static str> {
    self
      .bindings
      .iter()
      .map(|binding| binding.container)
      .collect()
  }

  pub fn event_types(&self, container: &str) -> BTreeSet<&'static str> {
    self
      .bindings
      .iter()
      .filter(|binding| binding.container == container)
      .map(Binding::event_type)
      .collect()
  }

  /// Actions bound to `event_type` on `container`, in registration order.
  pub fn actions(&self, container: &str, event_type: &str) -> Vec<Action> {
    self
      .bindings
      .iter()
      .filter(|binding| binding.container == container && binding.event_type() == event_type)
      .map(|binding| binding.action)
      .collect()
  }
}
