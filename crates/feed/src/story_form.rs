use super::*;

/// Values of the submission form's inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoryForm {
  pub title: String,
  pub url: String,
  pub author: String,
}

impl StoryForm {
  pub fn is_empty(&self) -> bool {
    self.title.is_empty() && self.url.is_empty() && self.author.is_empty()
  }
}
