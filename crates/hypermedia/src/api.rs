use super::*;

/// HTTP client for the Hack or Snooze story API.
#[derive(Clone, Debug)]
pub struct Api {
  base: Url,
  client: reqwest::Client,
}

#[derive(Deserialize)]
struct StoriesResponse {
  stories: Vec<Story>,
}

#[derive(Deserialize)]
struct StoryResponse {
  story: Story,
}

#[derive(Deserialize)]
struct UserResponse {
  user: User,
}

#[derive(Serialize)]
struct TokenBody<'a> {
  token: &'a str,
}

#[derive(Serialize)]
struct StoryBody<'a> {
  token: &'a str,
  story: StoryFields<'a>,
}

#[derive(Serialize)]
struct StoryFields<'a> {
  author: &'a str,
  title: &'a str,
  url: &'a str,
}

impl Default for Api {
  fn default() -> Self {
    Self::new(Self::DEFAULT_BASE.parse().expect("default API base is a valid URL"))
  }
}

impl Api {
  pub const DEFAULT_BASE: &'static str = "https://hack-or-snooze-v3.herokuapp.com/";

  pub fn new(mut base: Url) -> Self {
    if !base.path().ends_with('/') {
      let path = format!("{}/", base.path());
      base.set_path(&path);
    }

    base.set_query(None);
    base.set_fragment(None);

    Self {
      base,
      client: reqwest::Client::new(),
    }
  }

  pub fn base(&self) -> &Url {
    &self.base
  }

  /// Fetch a user's profile. The returned user carries `token`.
  pub async fn user(&self, username: &str, token: Token) -> Result<User, Error> {
    let url = self.url(&format!("users/{username}"))?;

    let response: UserResponse = self
      .execute(
        url.clone(),
        self
          .client
          .get(url)
          .query(&[("token", token.as_str())]),
      )
      .await?;

    Ok(User {
      token,
      ..response.user
    })
  }

  fn url(&self, path: &str) -> Result<Url, Error> {
    self.base.join(path).context(error::Path { path })
  }

  async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
    let url = self.url(path)?;
    self.execute(url.clone(), self.client.get(url)).await
  }

  async fn send<T: DeserializeOwned>(
    &self,
    method: Method,
    path: &str,
    body: &impl Serialize,
  ) -> Result<T, Error> {
    let url = self.url(path)?;
    self
      .execute(url.clone(), self.client.request(method, url).json(body))
      .await
  }

  async fn execute<T: DeserializeOwned>(
    &self,
    url: Url,
    request: RequestBuilder,
  ) -> Result<T, Error> {
    log::debug!("requesting {url}");

    let response = request
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let status = response.status();

    ensure!(
      status.is_success(),
      error::Status {
        status,
        url: url.clone()
      }
    );

    let body = response
      .bytes()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    serde_json::from_slice(&body).with_context(|_| error::Deserialize { url: url.clone() })
  }
}

impl Backend for Api {
  type Error = Error;

  async fn stories(&self) -> Result<Vec<Story>, Error> {
    Ok(self.get::<StoriesResponse>("stories").await?.stories)
  }

  async fn add_story(&self, viewer: &User, story: &NewStory) -> Result<Story, Error> {
    let body = StoryBody {
      token: viewer.token.as_str(),
      story: StoryFields {
        author: &story.author,
        title: &story.title,
        url: &story.url,
      },
    };

    Ok(
      self
        .send::<StoryResponse>(Method::POST, "stories", &body)
        .await?
        .story,
    )
  }

  async fn remove_story(&self, viewer: &User, id: &StoryId) -> Result<(), Error> {
    self
      .send::<IgnoredAny>(
        Method::DELETE,
        &format!("stories/{id}"),
        &TokenBody {
          token: viewer.token.as_str(),
        },
      )
      .await?;
    Ok(())
  }

  async fn add_favorite(&self, viewer: &User, id: &StoryId) -> Result<(), Error> {
    self.favorite(Method::POST, viewer, id).await
  }

  async fn remove_favorite(&self, viewer: &User, id: &StoryId) -> Result<(), Error> {
    self.favorite(Method::DELETE, viewer, id).await
  }
}

impl Api {
  async fn favorite(&self, method: Method, viewer: &User, id: &StoryId) -> Result<(), Error> {
    self
      .send::<IgnoredAny>(
        method,
        &format!("users/{}/favorites/{id}", viewer.username),
        &TokenBody {
          token: viewer.token.as_str(),
        },
      )
      .await?;
    Ok(())
  }
}
