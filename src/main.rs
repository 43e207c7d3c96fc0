#![allow(clippy::result_large_err)]

use {
  self::{arguments::Arguments, error::Error, options::Options, subcommand::Subcommand},
  camino::{Utf8Path, Utf8PathBuf},
  clap::Parser,
  feed::{Config, Controller, MemorySurface, Region, StoryForm, StoryId, Update},
  hypermedia::{Api, Session, Url},
  libc::EXIT_FAILURE,
  snafu::{ensure, ErrorCompat, ResultExt, Snafu},
  std::{
    backtrace::{Backtrace, BacktraceStatus},
    fs,
    io::{self, Write},
    process,
  },
  tokio::runtime::Runtime,
};


#[cfg(test)]
use test::*;

mod arguments;
mod error;
mod options;
mod subcommand;

type Result<T = (), E = Error> = std::result::Result<T, E>;

type Client = Controller<Api, MemorySurface>;

fn main() {
  env_logger::init();

  if let Err(err) = Arguments::parse().run() {
    err.report();
    process::exit(EXIT_FAILURE)
  }
}
