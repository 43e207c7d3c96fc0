use super::*;

/// A surface that keeps rendered fragments in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct MemorySurface {
  pub error: Option<String>,
  pub form: StoryForm,
  pub form_visible: bool,
  pub loading: bool,
  pub regions: BTreeMap<Region, Vec<Fragment>>,
  pub visible: Option<Region>,
}

impl Default for MemorySurface {
  fn default() -> Self {
    Self {
      error: None,
      form: StoryForm::default(),
      form_visible: false,
      loading: true,
      regions: BTreeMap::new(),
      visible: None,
    }
  }
}

impl MemorySurface {
  pub fn fragments(&self, region: Region) -> &[Fragment] {
    self
      .regions
      .get(&region)
      .map(Vec::as_slice)
      .unwrap_or_default()
  }

  pub fn stories(&self, region: Region) -> Vec<&StoryId> {
    self
      .fragments(region)
      .iter()
      .filter_map(|fragment| fragment.story.as_ref())
      .collect()
  }

  pub fn contains(&self, region: Region, id: &StoryId) -> bool {
    self
      .fragments(region)
      .iter()
      .any(|fragment| fragment.story.as_ref() == Some(id))
  }

  pub fn item(&self, region: Region, id: &StoryId) -> Option<&Fragment> {
    self
      .fragments(region)
      .iter()
      .find(|fragment| fragment.story.as_ref() == Some(id))
  }

  pub fn html(&self, region: Region) -> String {
    self
      .fragments(region)
      .iter()
      .map(|fragment| fragment.html.as_str())
      .collect()
  }
}

impl Surface for MemorySurface {
  fn remove_loading(&mut self) {
    self.loading = false;
  }

  fn replace(&mut self, region: Region, fragments: Vec<Fragment>) {
    self.regions.insert(region, fragments);
  }

  fn prepend(&mut self, region: Region, fragment: Fragment) {
    self.regions.entry(region).or_default().insert(0, fragment);
  }

  fn replace_story(&mut self, region: Region, fragment: Fragment) {
    let Some(fragments) = self.regions.get_mut(&region) else {
      return;
    };

    if let Some(existing) = fragments
      .iter_mut()
      .find(|existing| existing.story.is_some() && existing.story == fragment.story)
    {
      *existing = fragment;
    }
  }

  fn show(&mut self, region: Region) {
    self.visible = Some(region);
  }

  fn form(&self) -> StoryForm {
    self.form.clone()
  }

  fn set_form_visible(&mut self, visible: bool) {
    self.form_visible = visible;
  }

  fn clear_form(&mut self) {
    self.form = StoryForm::default();
  }

  fn show_error(&mut self, message: &str) {
    self.error = Some(message.into());
  }

  fn clear_error(&mut self) {
    self.error = None;
  }
}
