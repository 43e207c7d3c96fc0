use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Delete {
  #[arg(help = "Delete story <STORY>.")]
  pub(crate) story: String,
}

impl Delete {
  pub(crate) async fn run(self, client: &Client) -> Result<Region> {
    client
      .delete(&StoryId::from(self.story))
      .await
      .context(error::Feed)?;

    client.show(Region::Own);

    Ok(Region::Own)
  }
}
