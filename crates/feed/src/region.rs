use super::*;

/// One of the three story list containers.
#[derive(
  Clone,
  Copy,
  Debug,
  Deserialize,
  EnumIter,
  EnumString,
  Eq,
  IntoStaticStr,
  Ord,
  PartialEq,
  PartialOrd,
  Serialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Region {
  All,
  Own,
  Favorites,
}

impl Region {
  /// Element id of the region's list container.
  pub fn container(self) -> &'static str {
    match self {
      Self::All => "all-stories-list",
      Self::Own => "my-stories",
      Self::Favorites => "favorited-stories",
    }
  }

  pub fn show_delete(self) -> bool {
    self == Self::Own
  }

  /// Message rendered in place of an empty list.
  pub fn placeholder(self) -> Option<&'static str> {
    match self {
      Self::All => None,
      Self::Own => Some("No stories added by user yet!"),
      Self::Favorites => Some("No favorites added!"),
    }
  }
}

impl Display for Region {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.into())
  }
}
