use super::*;

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Display for StoryId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<String> for StoryId {
  fn from(id: String) -> Self {
    Self(id)
  }
}

impl From<&str> for StoryId {
  fn from(id: &str) -> Self {
    Self(id.into())
  }
}
