use super::*;

pub trait Select {
  fn query(&self, selector: &str) -> Result<Option<Element>, Error>;

  fn select<T: JsCast>(&self, selector: &str) -> Result<T, Error> {
    self
      .select_optional::<T>(selector)?
      .context(error::ElementMissing { selector })
  }

  fn select_optional<T: JsCast>(&self, selector: &str) -> Result<Option<T>, Error> {
    self
      .query(selector)?
      .map(|element| element.cast::<T>())
      .transpose()
  }
}

impl Select for Document {
  fn query(&self, selector: &str) -> Result<Option<Element>, Error> {
    self.query_selector(selector).map_err(js("query selector"))
  }
}

impl Select for Element {
  fn query(&self, selector: &str) -> Result<Option<Element>, Error> {
    self.query_selector(selector).map_err(js("query selector"))
  }
}
