use super::*;

/// A user gesture the page can bind.
#[derive(Clone, Copy, Debug, EnumIter, Eq, IntoStaticStr, Ord, PartialEq, PartialOrd)]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
  Delete,
  ShowAll,
  ShowFavorites,
  ShowForm,
  ShowOwn,
  Submit,
  ToggleFavorite,
}

impl Action {
  /// Selector an event target must be inside of, `None` if the bound
  /// container itself is the control.
  pub fn selector(self) -> Option<&'static str> {
    match self {
      Self::Delete => Some(".delete-button"),
      Self::ToggleFavorite => Some(".star"),
      Self::ShowAll | Self::ShowFavorites | Self::ShowForm | Self::ShowOwn | Self::Submit => None,
    }
  }

  pub fn event_type(self) -> &'static str {
    match self {
      Self::Submit => "submit",
      _ => "click",
    }
  }

  /// The event for this action, `story` being the id of the list item the
  /// gesture happened in.
  pub fn event(self, story: Option<StoryId>) -> Option<Event> {
    match self {
      Self::Delete => story.map(Event::Delete),
      Self::ShowAll => Some(Event::Show(Region::All)),
      Self::ShowFavorites => Some(Event::Show(Region::Favorites)),
      Self::ShowForm => Some(Event::ShowForm),
      Self::ShowOwn => Some(Event::Show(Region::Own)),
      Self::Submit => Some(Event::Submit),
      Self::ToggleFavorite => story.map(Event::ToggleFavorite),
    }
  }
}

impl Display for Action {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.into())
  }
}
