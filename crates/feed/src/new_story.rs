use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewStory {
  pub title: String,
  pub url: String,
  pub author: String,
  pub username: String,
}

impl NewStory {
  pub fn new(form: &StoryForm, viewer: &User) -> Result<Self> {
    fn field(field: &'static str, value: &str) -> Result<String> {
      let value = value.trim();
      ensure!(!value.is_empty(), error::EmptyField { field });
      Ok(value.into())
    }

    Ok(Self {
      title: field("title", &form.title)?,
      url: field("url", &form.url)?,
      author: field("author", &form.author)?,
      username: viewer.username.clone(),
    })
  }
}
