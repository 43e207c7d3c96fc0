use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Submit {
  #[arg(long, help = "Credit story to <AUTHOR>.")]
  pub(crate) author: String,
  #[arg(long, help = "Title story <TITLE>.")]
  pub(crate) title: String,
  #[arg(long, help = "Link story to <URL>.")]
  pub(crate) url: String,
}

impl Submit {
  pub(crate) async fn run(self, client: &Client) -> Result<Region> {
    client.show_form();

    client.surface_mut().form = StoryForm {
      title: self.title,
      url: self.url,
      author: self.author,
    };

    client.submit().await.context(error::Feed)?;

    Ok(Region::All)
  }
}
