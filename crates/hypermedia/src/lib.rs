//! Browser and network glue for the story feed: the HTTP [`Api`] backend,
//! the [`DomSurface`] page binding, and event wiring.

use {
  self::error::js,
  feed::{
    Action, Backend, Controller, Event, Fragment, NewStory, Region, Registry, Story, StoryForm,
    StoryId, Surface, Token, User,
  },
  reqwest::{Method, RequestBuilder, StatusCode},
  serde::{de::DeserializeOwned, de::IgnoredAny, Deserialize, Serialize},
  snafu::{ensure, OptionExt, ResultExt, Snafu},
  std::{collections::BTreeMap, ops::Deref, rc::Rc},
  wasm_bindgen::{closure::Closure, JsCast, JsError, JsValue},
  web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement},
};

pub use {
  self::{
    api::Api, bind::bind, cast::Cast, dom_surface::DomSurface, error::Error,
    event_target_ext::EventTargetExt, select::Select, session::Session,
  },
  feed, log,
  reqwest::Url,
  wasm_bindgen, wasm_bindgen_futures, web_sys,
};

mod api;
mod bind;
mod cast;
mod dom_surface;
mod error;
mod event_target_ext;
mod select;
mod session;

pub fn initialize_console(level: log::Level) -> Result<(), Error> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}

pub(crate) fn document() -> Result<Document, Error> {
  web_sys::window()
    .context(error::WindowMissing)?
    .document()
    .context(error::DocumentMissing)
}

/// Page configuration from the `snooze-config` JSON script element, or the
/// default configuration if there is none.
pub fn page_config() -> Result<feed::Config, Error> {
  let Some(element) = document()?.get_element_by_id("snooze-config") else {
    return Ok(feed::Config::default());
  };

  let json = element.text_content().unwrap_or_default();

  serde_json::from_str(&json).context(error::Config)
}
