use super::*;

#[derive(Debug, Parser)]
pub(crate) struct List {
  #[arg(
    long,
    default_value = "all",
    help = "Print <REGION> stories, one of `all`, `own`, or `favorites`."
  )]
  pub(crate) region: Region,
}

impl List {
  pub(crate) fn run(self, client: &Client) -> Region {
    client.show(self.region);
    self.region
  }
}
