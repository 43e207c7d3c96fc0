use super::*;

pub(crate) mod delete;
pub(crate) mod favorite;
pub(crate) mod list;
pub(crate) mod submit;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  #[command(about = "Delete one of your stories and print your stories")]
  Delete(delete::Delete),
  #[command(about = "Favorite or unfavorite a story and print all stories")]
  Favorite(favorite::Favorite),
  #[command(about = "Print stories")]
  List(list::List),
  #[command(about = "Submit a story and print all stories")]
  Submit(submit::Submit),
}

impl Subcommand {
  fn name(&self) -> &'static str {
    match self {
      Self::Delete(_) => "delete",
      Self::Favorite(_) => "favorite",
      Self::List(_) => "list",
      Self::Submit(_) => "submit",
    }
  }

  fn signed_in(&self) -> bool {
    !matches!(self, Self::List(_))
  }

  pub(crate) async fn run(self, options: Options) -> Result {
    ensure!(
      !self.signed_in() || options.session().is_some(),
      error::SignedOut {
        command: self.name()
      }
    );

    let client = options.client().await?;

    client.bootstrap().await.context(error::Feed)?;

    let region = match self {
      Self::Delete(delete) => delete.run(&client).await?,
      Self::Favorite(favorite) => favorite.run(&client).await?,
      Self::List(list) => list.run(&client),
      Self::Submit(submit) => submit.run(&client).await?,
    };

    Self::print(&client, region)
  }

  fn print(client: &Client, region: Region) -> Result {
    let html = client.surface().html(region);
    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes()).context(error::Stdout)?;
    stdout.flush().context(error::Stdout)
  }
}
