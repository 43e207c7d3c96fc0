use super::*;

/// The remote story and user API.
pub trait Backend {
  type Error: std::error::Error + 'static;

  async fn stories(&self) -> Result<Vec<Story>, Self::Error>;

  async fn add_story(&self, viewer: &User, story: &NewStory) -> Result<Story, Self::Error>;

  async fn remove_story(&self, viewer: &User, id: &StoryId) -> Result<(), Self::Error>;

  async fn add_favorite(&self, viewer: &User, id: &StoryId) -> Result<(), Self::Error>;

  async fn remove_favorite(&self, viewer: &User, id: &StoryId) -> Result<(), Self::Error>;
}
