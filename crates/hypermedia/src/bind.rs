use super::*;

/// Attach one delegated listener per bound container and event type, and
/// dispatch the events they resolve to.
pub fn bind<B, S>(controller: &Rc<Controller<B, S>>, registry: &Registry) -> Result<(), Error>
where
  B: Backend + 'static,
  S: Surface + 'static,
{
  let document = document()?;

  for container in registry.containers() {
    let element = document.select::<HtmlElement>(&format!("#{container}"))?;

    for event_type in registry.event_types(container) {
      let actions = registry.actions(container, event_type);

      log::debug!("binding {event_type} on #{container} to {actions:?}");

      let controller = controller.clone();

      element.add_event_listener(event_type, move |event: web_sys::Event| {
        let Some(resolved) = resolve(&event, &actions) else {
          return;
        };

        event.prevent_default();

        let controller = controller.clone();

        wasm_bindgen_futures::spawn_local(async move {
          if let Err(err) = controller.dispatch(resolved).await {
            log::debug!("dispatch failed: {err}");
          }
        });
      })?;
    }
  }

  Ok(())
}

/// The first action whose control contains the event target.
fn resolve(event: &web_sys::Event, actions: &[Action]) -> Option<Event> {
  let target = event.target()?.dyn_into::<Element>().ok()?;

  let story = target
    .closest("li")
    .ok()
    .flatten()
    .map(|item| StoryId::from(item.id()))
    .filter(|id| !id.as_str().is_empty());

  actions
    .iter()
    .find(|action| match action.selector() {
      Some(selector) => matches!(target.closest(selector), Ok(Some(_))),
      None => true,
    })
    .and_then(|action| action.event(story))
}
