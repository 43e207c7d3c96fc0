use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("failed to delete story {id}"))]
  Delete {
    id: StoryId,
    source: Box<dyn std::error::Error>,
  },
  #[snafu(display("{field} may not be empty"))]
  EmptyField { field: &'static str },
  #[snafu(display("failed to update favorite for story {id}"))]
  Favorite {
    id: StoryId,
    source: Box<dyn std::error::Error>,
  },
  #[snafu(display("failed to fetch stories"))]
  Fetch { source: Box<dyn std::error::Error> },
  #[snafu(display("not signed in"))]
  SignedOut,
  #[snafu(display("failed to submit story"))]
  Submit { source: Box<dyn std::error::Error> },
  #[snafu(display("story {id} not found"))]
  UnknownStory { id: StoryId },
}

impl Error {
  /// The error and its causes on one line.
  pub fn message(&self) -> String {
    self
      .iter_chain()
      .map(ToString::to_string)
      .collect::<Vec<String>>()
      .join(": ")
  }
}
