use super::*;

/// Login token for API calls. Never rendered and redacted from debug output.
#[derive(Clone, Default, PartialEq)]
pub struct Token(String);

impl Token {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for Token {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str("Token(..)")
  }
}

impl From<String> for Token {
  fn from(token: String) -> Self {
    Self(token)
  }
}

impl From<&str> for Token {
  fn from(token: &str) -> Self {
    Self(token.into())
  }
}

/// The signed-in viewer.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct User {
  pub username: String,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub favorites: Vec<Story>,
  #[serde(default, rename = "stories")]
  pub own_stories: Vec<Story>,
  #[serde(skip)]
  pub token: Token,
}

impl User {
  pub fn is_favorite(&self, id: &StoryId) -> bool {
    self.favorites.iter().any(|story| story.id == *id)
  }

  pub fn find(&self, id: &StoryId) -> Option<&Story> {
    self
      .own_stories
      .iter()
      .chain(&self.favorites)
      .find(|story| story.id == *id)
  }

  /// Returns `false` if the story was already a favorite.
  pub fn add_favorite(&mut self, story: Story) -> bool {
    if self.is_favorite(&story.id) {
      return false;
    }
    self.favorites.push(story);
    true
  }

  pub fn remove_favorite(&mut self, id: &StoryId) -> Option<(usize, Story)> {
    remove(&mut self.favorites, id)
  }

  pub fn insert_favorite(&mut self, index: usize, story: Story) {
    if !self.is_favorite(&story.id) {
      self.favorites.insert(index.min(self.favorites.len()), story);
    }
  }

  pub fn remove_own_story(&mut self, id: &StoryId) -> Option<(usize, Story)> {
    remove(&mut self.own_stories, id)
  }

  pub fn insert_own_story(&mut self, index: usize, story: Story) {
    self
      .own_stories
      .insert(index.min(self.own_stories.len()), story);
  }
}

fn remove(stories: &mut Vec<Story>, id: &StoryId) -> Option<(usize, Story)> {
  let index = stories.iter().position(|story| story.id == *id)?;
  Some((index, stories.remove(index)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn favorites() {
    let mut user = viewer();

    assert!(!user.is_favorite(&"a".into()));
    assert!(user.add_favorite(story("a")));
    assert!(!user.add_favorite(story("a")));
    assert!(user.add_favorite(story("b")));
    assert!(user.is_favorite(&"a".into()));

    assert_eq!(user.remove_favorite(&"a".into()), Some((0, story("a"))));
    assert!(!user.is_favorite(&"a".into()));

    user.insert_favorite(0, story("a"));
    assert_eq!(user.favorites, [story("a"), story("b")]);
  }

  #[test]
  fn token_is_redacted() {
    let user = viewer();
    assert!(!format!("{user:?}").contains(user.token.as_str()));
  }

  #[test]
  fn deserialize() {
    let user = serde_json::from_str::<User>(
      r#"{
        "username": "alice",
        "name": "Alice",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "favorites": [],
        "stories": [{
          "storyId": "a",
          "title": "Story a",
          "author": "Author",
          "url": "https://example.com/a",
          "username": "alice"
        }]
      }"#,
    )
    .unwrap();

    assert_eq!(user.own_stories, [story("a")]);
    assert_eq!(user.token, Token::default());
    assert_eq!(user.find(&"a".into()), Some(&story("a")));
  }
}
