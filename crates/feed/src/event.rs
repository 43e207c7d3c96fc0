use super::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
  Delete(StoryId),
  Show(Region),
  ShowForm,
  Submit,
  ToggleFavorite(StoryId),
}
