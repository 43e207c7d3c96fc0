use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Favorite {
  #[arg(help = "Toggle favorite on story <STORY>.")]
  pub(crate) story: String,
}

impl Favorite {
  pub(crate) async fn run(self, client: &Client) -> Result<Region> {
    client
      .toggle_favorite(&StoryId::from(self.story))
      .await
      .context(error::Feed)?;

    Ok(Region::All)
  }
}
