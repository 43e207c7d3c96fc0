use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Options {
  #[arg(
    long,
    default_value = Api::DEFAULT_BASE,
    help = "Send requests to the story API at <URL>."
  )]
  pub(crate) api: Url,
  #[arg(long, help = "Load configuration from YAML file at <PATH>.", value_name = "PATH")]
  pub(crate) config: Option<Utf8PathBuf>,
  #[arg(long, help = "Render favorite and delete changes before the API confirms them.")]
  pub(crate) optimistic: bool,
  #[arg(long, help = "Do not render failures into the page.")]
  pub(crate) quiet_errors: bool,
  #[arg(long, requires = "username", help = "Authenticate with login <TOKEN>.")]
  pub(crate) token: Option<String>,
  #[arg(long, requires = "token", help = "Act as <USERNAME>.")]
  pub(crate) username: Option<String>,
}

impl Options {
  pub(crate) fn config(&self) -> Result<Config> {
    let mut config = match &self.config {
      Some(path) => Self::load(path)?,
      None => Config::default(),
    };

    if self.optimistic {
      config.update = Update::Optimistic;
    }

    if self.quiet_errors {
      config.surface_errors = false;
    }

    Ok(config)
  }

  fn load(path: &Utf8Path) -> Result<Config> {
    let yaml = fs::read_to_string(path).context(error::ConfigRead { path })?;
    serde_yaml::from_str(&yaml).context(error::ConfigDeserialize { path })
  }

  pub(crate) fn session(&self) -> Option<Session> {
    match (&self.username, &self.token) {
      (Some(username), Some(token)) => Some(Session {
        token: token.as_str().into(),
        username: username.clone(),
      }),
      _ => None,
    }
  }

  /// A client for the configured API, signed in if credentials were given.
  pub(crate) async fn client(&self) -> Result<Client> {
    let config = self.config()?;

    let api = Api::new(self.api.clone());

    let viewer = match self.session() {
      Some(session) => {
        let username = session.username.clone();
        log::debug!("loading user {username}");
        Some(session.user(&api).await.context(error::User { username })?)
      }
      None => None,
    };

    Ok(Controller::new(api, MemorySurface::default(), config, viewer))
  }
}
