#![allow(async_fn_in_trait)]

//! Story feed view layer.
//!
//! A [`Controller`] owns the story list and the signed-in viewer, talks to a
//! remote [`Backend`], and renders [`Fragment`]s of list markup into a
//! [`Surface`]. Browser and network glue live in the `hypermedia` crate.

use {
  self::markup::{MessageHtml, StoryHtml},
  boilerplate::Boilerplate,
  html_escaper::Escape,
  serde::{Deserialize, Serialize},
  snafu::{ensure, ErrorCompat, OptionExt, ResultExt, Snafu},
  std::{
    cell::{Cell, Ref, RefCell, RefMut},
    collections::{BTreeMap, BTreeSet},
    fmt::{self, Display, Formatter},
  },
  strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr},
  url::Url,
};

pub use self::{
  action::Action,
  backend::Backend,
  config::{Config, Update},
  controller::Controller,
  error::Error,
  event::Event,
  fragment::Fragment,
  memory_surface::MemorySurface,
  new_story::NewStory,
  region::Region,
  registry::{Binding, Registry},
  state::State,
  story::Story,
  story_form::StoryForm,
  story_id::StoryId,
  story_list::StoryList,
  surface::Surface,
  user::{Token, User},
};


#[cfg(test)]
use test::*;

mod action;
mod backend;
mod config;
mod controller;
pub mod error;
mod event;
mod fragment;
mod markup;
mod memory_surface;
mod new_story;
mod region;
mod registry;
mod state;
mod story;
mod story_form;
mod story_id;
mod story_list;
mod surface;
mod user;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
