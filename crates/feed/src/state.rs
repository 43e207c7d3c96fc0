use super::*;

/// Everything the controller renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
  pub stories: StoryList,
  pub viewer: Option<User>,
}

/// Where a deleted story was, so it can be put back.
#[derive(Debug, Default)]
pub(crate) struct Removed {
  favorite: Option<(usize, Story)>,
  list: Option<(usize, Story)>,
  own: Option<(usize, Story)>,
}

impl State {
  pub fn find(&self, id: &StoryId) -> Option<&Story> {
    self
      .stories
      .find(id)
      .or_else(|| self.viewer.as_ref()?.find(id))
  }

  pub fn fragments(&self, region: Region) -> Vec<Fragment> {
    let viewer = self.viewer.as_ref();

    let stories = match region {
      Region::All => self.stories.stories(),
      Region::Own => viewer.map(|viewer| viewer.own_stories.as_slice()).unwrap_or_default(),
      Region::Favorites => viewer.map(|viewer| viewer.favorites.as_slice()).unwrap_or_default(),
    };

    if stories.is_empty() {
      return region
        .placeholder()
        .map(Fragment::message)
        .into_iter()
        .collect();
    }

    stories
      .iter()
      .map(|story| Fragment::story(story, viewer, region.show_delete()))
      .collect()
  }

  pub(crate) fn remove(&mut self, id: &StoryId) -> Removed {
    let list = self.stories.remove(id);

    let (own, favorite) = match &mut self.viewer {
      Some(viewer) => (viewer.remove_own_story(id), viewer.remove_favorite(id)),
      None => (None, None),
    };

    Removed {
      favorite,
      list,
      own,
    }
  }

  pub(crate) fn restore(&mut self, removed: Removed) {
    if let Some((index, story)) = removed.list {
      self.stories.insert(index, story);
    }

    let Some(viewer) = &mut self.viewer else {
      return;
    };

    if let Some((index, story)) = removed.own {
      viewer.insert_own_story(index, story);
    }

    if let Some((index, story)) = removed.favorite {
      viewer.insert_favorite(index, story);
    }
  }
}
