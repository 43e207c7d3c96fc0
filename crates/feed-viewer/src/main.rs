use {
  hypermedia::{
    feed::{Controller, Registry},
    log,
    wasm_bindgen::{self, prelude::wasm_bindgen, JsValue},
    wasm_bindgen_futures, Api, DomSurface, Session,
  },
  std::rc::Rc,
};

#[wasm_bindgen(main)]
async fn main() -> Result<(), JsValue> {
  hypermedia::initialize_console(log::Level::Debug)?;

  let config = hypermedia::page_config()?;

  let api = Api::default();

  let viewer = match Session::load()? {
    Some(session) => session.viewer(&api).await,
    None => None,
  };

  log::info!(
    "viewing stories as {}",
    viewer
      .as_ref()
      .map(|viewer| viewer.username.as_str())
      .unwrap_or("guest")
  );

  let controller = Rc::new(Controller::new(api, DomSurface::new()?, config, viewer));

  hypermedia::bind(&controller, &Registry::default())?;

  if controller.bootstrap().await.is_err() {
    log::warn!("stories unavailable, leaving loading indicator in place");
  }

  Ok(())
}
