use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoryList {
  stories: Vec<Story>,
}

impl StoryList {
  pub fn new(stories: Vec<Story>) -> Self {
    Self { stories }
  }

  pub fn stories(&self) -> &[Story] {
    &self.stories
  }

  pub fn len(&self) -> usize {
    self.stories.len()
  }

  pub fn is_empty(&self) -> bool {
    self.stories.is_empty()
  }

  pub fn find(&self, id: &StoryId) -> Option<&Story> {
    self.stories.iter().find(|story| story.id == *id)
  }

  pub fn prepend(&mut self, story: Story) {
    self.stories.insert(0, story);
  }

  pub fn remove(&mut self, id: &StoryId) -> Option<(usize, Story)> {
    let index = self.stories.iter().position(|story| story.id == *id)?;
    Some((index, self.stories.remove(index)))
  }

  pub fn insert(&mut self, index: usize, story: Story) {
    self.stories.insert(index.min(self.stories.len()), story);
  }
}
