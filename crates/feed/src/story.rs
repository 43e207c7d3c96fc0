use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Story {
  #[serde(rename = "storyId")]
  pub id: StoryId,
  pub title: String,
  pub url: String,
  pub author: String,
  pub username: String,
}

impl Story {
  /// The authority of the story's URL, or the URL itself if it has none.
  pub fn host_name(&self) -> String {
    let Ok(url) = Url::parse(&self.url) else {
      return self.url.clone();
    };

    match (url.host_str(), url.port()) {
      (Some(host), _) if host.is_empty() => self.url.clone(),
      (Some(host), Some(port)) => format!("{host}:{port}"),
      (Some(host), None) => host.into(),
      (None, _) => self.url.clone(),
    }
  }

  /// Link target for the story, only `http` and `https` URLs are linked.
  pub fn href(&self) -> &str {
    match Url::parse(&self.url) {
      Ok(url) if matches!(url.scheme(), "http" | "https") => &self.url,
      _ => "#",
    }
  }
}
