use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "story.html")]
pub(crate) struct StoryHtml {
  delete: bool,
  favorite: Option<bool>,
  story: Story,
}

impl StoryHtml {
  pub(crate) fn new(story: &Story, viewer: Option<&User>, delete: bool) -> Self {
    Self {
      delete,
      favorite: viewer.map(|viewer| viewer.is_favorite(&story.id)),
      story: story.clone(),
    }
  }

  fn star(&self) -> Option<&'static str> {
    self
      .favorite
      .map(|favorite| if favorite { "fas" } else { "far" })
  }
}

#[derive(Boilerplate)]
#[boilerplate(filename = "message.html")]
pub(crate) struct MessageHtml {
  pub(crate) message: &'static str,
}
