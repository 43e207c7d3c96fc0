use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub(crate) enum Error {
  #[snafu(display("failed to deserialize YAML config at `{path}`"))]
  ConfigDeserialize {
    backtrace: Option<Backtrace>,
    path: Utf8PathBuf,
    source: serde_yaml::Error,
  },
  #[snafu(display("failed to read config at `{path}`"))]
  ConfigRead {
    backtrace: Option<Backtrace>,
    path: Utf8PathBuf,
    source: io::Error,
  },
  #[snafu(display("story operation failed"))]
  Feed {
    backtrace: Option<Backtrace>,
    source: feed::Error,
  },
  #[snafu(display("I/O error initializing async runtime"))]
  Runtime {
    backtrace: Option<Backtrace>,
    source: io::Error,
  },
  #[snafu(display("`{command}` requires `--username` and `--token`"))]
  SignedOut {
    backtrace: Option<Backtrace>,
    command: &'static str,
  },
  #[snafu(display("I/O error writing to stdout"))]
  Stdout {
    backtrace: Option<Backtrace>,
    source: io::Error,
  },
  #[snafu(display("failed to load user `{username}`"))]
  User {
    backtrace: Option<Backtrace>,
    source: hypermedia::Error,
    username: String,
  },
}

impl Error {
  pub(crate) fn report(&self) {
    eprintln!("error: {self}");

    for (i, err) in self.iter_chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {err}");
    }

    if let Some(backtrace) = self.backtrace() {
      if backtrace.status() == BacktraceStatus::Captured {
        eprintln!();
        eprintln!("backtrace:");
        eprintln!("{backtrace}");
      }
    }
  }
}
