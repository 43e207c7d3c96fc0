use super::*;

/// A surface bound to the story page's elements.
pub struct DomSurface {
  author: HtmlInputElement,
  document: Document,
  error: Option<HtmlElement>,
  form: HtmlElement,
  regions: BTreeMap<Region, HtmlElement>,
  title: HtmlInputElement,
  url: HtmlInputElement,
}

impl DomSurface {
  pub const AUTHOR: &'static str = "#story-author";
  pub const ERROR: &'static str = "#error-message";
  pub const FORM: &'static str = "#submit-form";
  pub const LOADING: &'static str = "#stories-loading-msg";
  pub const TITLE: &'static str = "#story-title";
  pub const URL: &'static str = "#story-url";

  pub fn new() -> Result<Self, Error> {
    let document = document()?;

    let mut regions = BTreeMap::new();
    for region in [Region::All, Region::Own, Region::Favorites] {
      regions.insert(
        region,
        document.select::<HtmlElement>(&format!("#{}", region.container()))?,
      );
    }

    Ok(Self {
      author: document.select(Self::AUTHOR)?,
      error: document.select_optional(Self::ERROR)?,
      form: document.select(Self::FORM)?,
      regions,
      title: document.select(Self::TITLE)?,
      url: document.select(Self::URL)?,
      document,
    })
  }

  fn region(&self, region: Region) -> &HtmlElement {
    &self.regions[&region]
  }
}

/// Index of the item whose id is `id`. Ids are compared directly rather
/// than through a selector, so they need no escaping.
fn position(ids: impl IntoIterator<Item = String>, id: &StoryId) -> Option<u32> {
  ids
    .into_iter()
    .position(|item| item == id.as_str())
    .and_then(|index| index.try_into().ok())
}

fn set_visible(element: &HtmlElement, visible: bool) {
  let style = element.style();

  let result = if visible {
    style.remove_property("display").map(|_| ())
  } else {
    style.set_property("display", "none")
  };

  if let Err(err) = result.map_err(js("set display")) {
    log::error!("{err}");
  }
}

impl Surface for DomSurface {
  fn remove_loading(&mut self) {
    match self.document.select_optional::<Element>(Self::LOADING) {
      Ok(Some(loading)) => loading.remove(),
      Ok(None) => {}
      Err(err) => log::error!("{err}"),
    }
  }

  fn replace(&mut self, region: Region, fragments: Vec<Fragment>) {
    let html = fragments
      .iter()
      .map(|fragment| fragment.html.as_str())
      .collect::<String>();

    self.region(region).set_inner_html(&html);
  }

  fn prepend(&mut self, region: Region, fragment: Fragment) {
    if let Err(err) = self
      .region(region)
      .insert_adjacent_html("afterbegin", &fragment.html)
      .map_err(js("insert fragment"))
    {
      log::error!("{err}");
    }
  }

  fn replace_story(&mut self, region: Region, fragment: Fragment) {
    let Some(id) = &fragment.story else {
      return;
    };

    let items = self.region(region).children();

    let ids = (0..items.length()).map(|index| {
      items
        .item(index)
        .map(|item| item.id())
        .unwrap_or_default()
    });

    if let Some(item) = position(ids, id).and_then(|index| items.item(index)) {
      item.set_outer_html(&fragment.html);
    }
  }

  fn show(&mut self, region: Region) {
    for (&other, element) in &self.regions {
      set_visible(element, other == region);
    }
  }

  fn form(&self) -> StoryForm {
    StoryForm {
      title: self.title.value(),
      url: self.url.value(),
      author: self.author.value(),
    }
  }

  fn set_form_visible(&mut self, visible: bool) {
    set_visible(&self.form, visible);
  }

  fn clear_form(&mut self) {
    for input in [&self.title, &self.url, &self.author] {
      input.set_value("");
    }
  }

  fn show_error(&mut self, message: &str) {
    match &self.error {
      Some(element) => {
        element.set_text_content(Some(message));
        set_visible(element, true);
      }
      None => log::warn!("page has no error element for `{message}`"),
    }
  }

  fn clear_error(&mut self) {
    if let Some(element) = &self.error {
      element.set_text_content(None);
      set_visible(element, false);
    }
  }
}
