use super::*;

/// A rendered list child. `story` is set for story items and unset for
/// placeholder messages.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
  pub story: Option<StoryId>,
  pub html: String,
}

impl Fragment {
  pub fn story(story: &Story, viewer: Option<&User>, delete: bool) -> Self {
    Self {
      story: Some(story.id.clone()),
      html: StoryHtml::new(story, viewer, delete).to_string(),
    }
  }

  pub fn message(message: &'static str) -> Self {
    Self {
      story: None,
      html: MessageHtml { message }.to_string(),
    }
  }
}

impl Display for Fragment {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.html)
  }
}
