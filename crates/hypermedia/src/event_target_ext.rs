use super::*;

pub trait EventTargetExt {
  /// Attach `callback` for the lifetime of the page.
  fn add_event_listener<F>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    F: FnMut(web_sys::Event) + 'static;
}

impl<T: Deref<Target = EventTarget>> EventTargetExt for T {
  fn add_event_listener<F>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    F: FnMut(web_sys::Event) + 'static,
  {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(callback);
    self
      .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
      .map_err(js("add event listener"))?;
    closure.forget();
    Ok(())
  }
}
