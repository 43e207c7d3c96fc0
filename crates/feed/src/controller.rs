use super::*;

/// Owns the story list, the viewer, and the surface they are rendered into.
///
/// State lives in `RefCell`s that are never borrowed across an await, so
/// gestures may overlap. Requests for a story that already has one in flight
/// are ignored, as are submissions while one is in flight.
pub struct Controller<B, S> {
  backend: B,
  config: Config,
  in_flight: RefCell<BTreeSet<StoryId>>,
  state: RefCell<State>,
  submitting: Cell<bool>,
  surface: RefCell<S>,
}

struct InFlight<'a> {
  id: StoryId,
  ids: &'a RefCell<BTreeSet<StoryId>>,
}

impl Drop for InFlight<'_> {
  fn drop(&mut self) {
    self.ids.borrow_mut().remove(&self.id);
  }
}

enum Mark {
  Added,
  Removed { index: usize },
  Unchanged,
}

impl<B: Backend, S: Surface> Controller<B, S> {
  pub fn new(backend: B, surface: S, config: Config, viewer: Option<User>) -> Self {
    Self {
      backend,
      config,
      in_flight: RefCell::new(BTreeSet::new()),
      state: RefCell::new(State {
        stories: StoryList::default(),
        viewer,
      }),
      submitting: Cell::new(false),
      surface: RefCell::new(surface),
    }
  }

  pub fn into_parts(self) -> (B, S) {
    (self.backend, self.surface.into_inner())
  }

  pub fn backend(&self) -> &B {
    &self.backend
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn state(&self) -> Ref<State> {
    self.state.borrow()
  }

  pub fn surface(&self) -> Ref<S> {
    self.surface.borrow()
  }

  pub fn surface_mut(&self) -> RefMut<S> {
    self.surface.borrow_mut()
  }

  /// Fetch all stories, remove the loading indicator, and render them. On
  /// failure the loading indicator stays.
  pub async fn bootstrap(&self) -> Result {
    log::debug!("fetching stories");

    let stories = self
      .backend
      .stories()
      .await
      .boxed_local()
      .context(error::Fetch);

    let stories = self.report(stories)?;

    log::info!("fetched {} stories", stories.len());

    self.state.borrow_mut().stories = StoryList::new(stories);
    self.surface.borrow_mut().remove_loading();
    self.show(Region::All);

    Ok(())
  }

  /// Rebuild `region` from current state.
  pub fn render(&self, region: Region) {
    let fragments = self.state.borrow().fragments(region);
    log::debug!("rendering {} fragments into {region}", fragments.len());
    self.surface.borrow_mut().replace(region, fragments);
  }

  pub fn show(&self, region: Region) {
    self.render(region);
    self.surface.borrow_mut().show(region);
  }

  pub fn show_form(&self) {
    self.surface.borrow_mut().set_form_visible(true);
  }

  pub async fn dispatch(&self, event: Event) -> Result {
    log::debug!("dispatching {event:?}");

    match event {
      Event::Delete(id) => self.delete(&id).await,
      Event::Show(region) => {
        self.show(region);
        Ok(())
      }
      Event::ShowForm => {
        self.show_form();
        Ok(())
      }
      Event::Submit => self.submit().await,
      Event::ToggleFavorite(id) => self.toggle_favorite(&id).await,
    }
  }

  /// Create a story from the form. The story is rendered only once the
  /// backend returns it, on failure the form keeps its contents.
  pub async fn submit(&self) -> Result {
    if self.submitting.replace(true) {
      log::debug!("ignoring submission while another is in flight");
      return Ok(());
    }

    let result = self.submit_story().await;

    self.submitting.set(false);

    self.report(result)
  }

  async fn submit_story(&self) -> Result {
    let viewer = self.viewer()?;

    let form = self.surface.borrow().form();

    let new_story = NewStory::new(&form, &viewer)?;

    log::debug!("submitting story `{}`", new_story.title);

    let story = self
      .backend
      .add_story(&viewer, &new_story)
      .await
      .boxed_local()
      .context(error::Submit)?;

    log::info!("submitted story {}", story.id);

    let fragment = {
      let mut state = self.state.borrow_mut();
      state.stories.prepend(story.clone());
      if let Some(viewer) = &mut state.viewer {
        viewer.insert_own_story(0, story.clone());
      }
      Fragment::story(&story, state.viewer.as_ref(), Region::All.show_delete())
    };

    {
      let mut surface = self.surface.borrow_mut();
      surface.prepend(Region::All, fragment);
      surface.set_form_visible(false);
      surface.clear_form();
    }

    self.render(Region::Own);

    Ok(())
  }

  /// Favorite or unfavorite a story, depending on the viewer's current
  /// favorites.
  pub async fn toggle_favorite(&self, id: &StoryId) -> Result {
    let Some(_in_flight) = self.begin(id) else {
      return Ok(());
    };

    let result = self.toggle(id).await;

    self.report(result)
  }

  async fn toggle(&self, id: &StoryId) -> Result {
    let viewer = self.viewer()?;

    let story = self
      .state
      .borrow()
      .find(id)
      .cloned()
      .context(error::UnknownStory { id: id.clone() })?;

    let favorite = viewer.is_favorite(id);

    log::debug!(
      "{} story {id}",
      if favorite { "unfavoriting" } else { "favoriting" }
    );

    let optimistic = self.config.update == Update::Optimistic;

    let mark = optimistic.then(|| self.mark_favorite(&story, !favorite));

    let result = if favorite {
      self.backend.remove_favorite(&viewer, id).await
    } else {
      self.backend.add_favorite(&viewer, id).await
    };

    if let Err(source) = result {
      if let Some(mark) = mark {
        self.unmark_favorite(story, mark);
      }
      return Err(source)
        .boxed_local()
        .context(error::Favorite { id: id.clone() });
    }

    if !optimistic {
      self.mark_favorite(&story, !favorite);
    }

    log::info!(
      "{} story {id}",
      if favorite { "unfavorited" } else { "favorited" }
    );

    Ok(())
  }

  fn mark_favorite(&self, story: &Story, favorite: bool) -> Mark {
    let mark = {
      let mut state = self.state.borrow_mut();

      let Some(viewer) = &mut state.viewer else {
        return Mark::Unchanged;
      };

      if favorite {
        if viewer.add_favorite(story.clone()) {
          Mark::Added
        } else {
          Mark::Unchanged
        }
      } else {
        match viewer.remove_favorite(&story.id) {
          Some((index, _)) => Mark::Removed { index },
          None => Mark::Unchanged,
        }
      }
    };

    self.refresh(story);

    mark
  }

  fn unmark_favorite(&self, story: Story, mark: Mark) {
    {
      let mut state = self.state.borrow_mut();

      let Some(viewer) = &mut state.viewer else {
        return;
      };

      match mark {
        Mark::Added => {
          viewer.remove_favorite(&story.id);
        }
        Mark::Removed { index } => viewer.insert_favorite(index, story.clone()),
        Mark::Unchanged => {}
      }
    }

    self.refresh(&story);
  }

  /// Re-render one story's items and the favorites list.
  fn refresh(&self, story: &Story) {
    let state = self.state.borrow();
    let mut surface = self.surface.borrow_mut();

    for region in [Region::All, Region::Own] {
      surface.replace_story(
        region,
        Fragment::story(story, state.viewer.as_ref(), region.show_delete()),
      );
    }

    surface.replace(Region::Favorites, state.fragments(Region::Favorites));
  }

  /// Delete a story and re-render every region.
  pub async fn delete(&self, id: &StoryId) -> Result {
    let Some(_in_flight) = self.begin(id) else {
      return Ok(());
    };

    let result = self.remove(id).await;

    self.report(result)
  }

  async fn remove(&self, id: &StoryId) -> Result {
    let viewer = self.viewer()?;

    ensure!(
      self.state.borrow().find(id).is_some(),
      error::UnknownStory { id: id.clone() }
    );

    log::debug!("deleting story {id}");

    let optimistic = self.config.update == Update::Optimistic;

    let removed = optimistic.then(|| self.state.borrow_mut().remove(id));

    if optimistic {
      self.render_all();
    }

    if let Err(source) = self.backend.remove_story(&viewer, id).await {
      if let Some(removed) = removed {
        self.state.borrow_mut().restore(removed);
        self.render_all();
      }
      return Err(source)
        .boxed_local()
        .context(error::Delete { id: id.clone() });
    }

    if !optimistic {
      self.state.borrow_mut().remove(id);
      self.render_all();
    }

    log::info!("deleted story {id}");

    Ok(())
  }

  fn render_all(&self) {
    for region in Region::iter() {
      self.render(region);
    }
  }

  fn begin(&self, id: &StoryId) -> Option<InFlight<'_>> {
    if !self.in_flight.borrow_mut().insert(id.clone()) {
      log::debug!("ignoring gesture on story {id} while a request is in flight");
      return None;
    }

    Some(InFlight {
      id: id.clone(),
      ids: &self.in_flight,
    })
  }

  fn viewer(&self) -> Result<User> {
    self.state.borrow().viewer.clone().context(error::SignedOut)
  }

  /// Log a failed operation and show it in the error region, or clear the
  /// error region after a successful one.
  fn report<T>(&self, result: Result<T>) -> Result<T> {
    match &result {
      Ok(_) => {
        if self.config.surface_errors {
          self.surface.borrow_mut().clear_error();
        }
      }
      Err(err) => {
        let message = err.message();

        log::error!("{message}");

        if self.config.surface_errors {
          self.surface.borrow_mut().show_error(&message);
        }
      }
    }

    result
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    std::{
      future::{poll_fn, Future},
      pin::pin,
      task::Poll,
    },
    tokio::sync::Notify,
  };

  type TestController = Controller<FakeBackend, MemorySurface>;

  fn controller(backend: FakeBackend, viewer: Option<User>, config: Config) -> TestController {
    Controller::new(backend, MemorySurface::default(), config, viewer)
  }

  fn optimistic() -> Config {
    Config {
      update: Update::Optimistic,
      ..Config::default()
    }
  }

  fn gated(stories: Vec<Story>) -> FakeBackend {
    FakeBackend {
      gate: Some(Notify::new()),
      ..FakeBackend::new(stories)
    }
  }

  fn star(controller: &TestController, region: Region, id: &str) -> Option<&'static str> {
    let surface = controller.surface();
    let html = &surface.item(region, &id.into())?.html;
    if html.contains(r#"class="fas fa-star""#) {
      Some("fas")
    } else if html.contains(r#"class="far fa-star""#) {
      Some("far")
    } else {
      None
    }
  }

  fn requests(controller: &TestController) -> Vec<String> {
    controller.backend().requests.borrow().clone()
  }

  #[tokio::test]
  async fn bootstrap() {
    let controller = controller(
      FakeBackend::new(vec![story("a"), story("b")]),
      None,
      Config::default(),
    );

    assert!(controller.surface().loading);

    controller.bootstrap().await.unwrap();

    let surface = controller.surface();
    assert!(!surface.loading);
    assert_eq!(surface.visible, Some(Region::All));
    assert_eq!(
      surface.stories(Region::All),
      [&StoryId::from("a"), &StoryId::from("b")]
    );
    assert!(!surface.html(Region::All).contains("star"));
    assert!(!surface.html(Region::All).contains("delete-button"));
  }

  #[tokio::test]
  async fn bootstrap_with_viewer_shows_stars() {
    let mut viewer = viewer();
    viewer.add_favorite(story("b"));

    let controller = controller(
      FakeBackend::new(vec![story("a"), story("b")]),
      Some(viewer),
      Config::default(),
    );

    controller.bootstrap().await.unwrap();

    assert_eq!(star(&controller, Region::All, "a"), Some("far"));
    assert_eq!(star(&controller, Region::All, "b"), Some("fas"));
  }

  #[tokio::test]
  async fn bootstrap_failure_keeps_loading_indicator() {
    let controller = controller(FakeBackend::new(vec![story("a")]), None, Config::default());

    controller.backend().reject.set(true);

    assert_matches!(controller.bootstrap().await.unwrap_err(), Error::Fetch { .. });

    let surface = controller.surface();
    assert!(surface.loading);
    assert!(surface.fragments(Region::All).is_empty());
    assert_eq!(
      surface.error.as_deref(),
      Some("failed to fetch stories: backend rejected request")
    );
  }

  #[tokio::test]
  async fn errors_are_not_surfaced_when_disabled() {
    let controller = controller(
      FakeBackend::new(Vec::new()),
      None,
      Config {
        surface_errors: false,
        ..Config::default()
      },
    );

    controller.backend().reject.set(true);

    assert!(controller.bootstrap().await.is_err());
    assert_eq!(controller.surface().error, None);
  }

  #[tokio::test]
  async fn empty_regions() {
    let controller = controller(FakeBackend::new(Vec::new()), Some(viewer()), Config::default());

    controller.bootstrap().await.unwrap();
    controller.render(Region::Own);
    controller.render(Region::Favorites);

    let surface = controller.surface();
    assert!(surface.fragments(Region::All).is_empty());
    assert!(surface
      .html(Region::Own)
      .contains("No stories added by user yet!"));
    assert!(surface.html(Region::Favorites).contains("No favorites added!"));
  }

  #[tokio::test]
  async fn own_stories_show_delete() {
    let mut viewer = viewer();
    viewer.own_stories = vec![story("a")];
    viewer.add_favorite(story("a"));

    let controller = controller(FakeBackend::new(vec![story("a")]), Some(viewer), Config::default());

    controller.bootstrap().await.unwrap();
    controller.render(Region::Own);
    controller.render(Region::Favorites);

    let surface = controller.surface();
    assert!(surface.html(Region::Own).contains("delete-button"));
    assert!(!surface.html(Region::Favorites).contains("delete-button"));
    assert!(!surface.html(Region::All).contains("delete-button"));
  }

  #[tokio::test]
  async fn submit() {
    let controller = controller(
      FakeBackend::new(vec![story("a"), story("b")]),
      Some(viewer()),
      Config::default(),
    );

    controller.bootstrap().await.unwrap();

    controller.dispatch(Event::ShowForm).await.unwrap();

    controller.surface_mut().form = StoryForm {
      title: "New".into(),
      url: "https://rust-lang.org/learn".into(),
      author: "Ferris".into(),
    };

    controller.dispatch(Event::Submit).await.unwrap();

    let surface = controller.surface();

    let first = &surface.fragments(Region::All)[0];
    assert_eq!(first.story, Some("new-2".into()));
    assert!(first.html.contains(">New</a>"), "{}", first.html);
    assert!(first.html.contains("(rust-lang.org)"));
    assert!(first.html.contains("posted by alice"));
    assert_eq!(surface.fragments(Region::All).len(), 3);

    assert!(!surface.form_visible);
    assert!(surface.form.is_empty());

    assert!(surface.contains(Region::Own, &"new-2".into()));

    let state = controller.state();
    assert_eq!(state.stories.stories()[0].id, "new-2".into());
    assert_eq!(
      state.viewer.as_ref().unwrap().own_stories[0].id,
      "new-2".into()
    );
  }

  #[tokio::test]
  async fn rejected_submit_keeps_form() {
    let controller = controller(FakeBackend::new(vec![story("a")]), Some(viewer()), Config::default());

    controller.bootstrap().await.unwrap();
    controller.show_form();

    let form = StoryForm {
      title: "New".into(),
      url: "https://example.com".into(),
      author: "Ferris".into(),
    };

    controller.surface_mut().form = form.clone();
    controller.backend().reject.set(true);

    assert_matches!(controller.submit().await.unwrap_err(), Error::Submit { .. });

    let surface = controller.surface();
    assert!(surface.form_visible);
    assert_eq!(surface.form, form);
    assert_eq!(surface.fragments(Region::All).len(), 1);
    assert_eq!(
      surface.error.as_deref(),
      Some("failed to submit story: backend rejected request")
    );
  }

  #[tokio::test]
  async fn blank_submit_makes_no_request() {
    let controller = controller(FakeBackend::new(Vec::new()), Some(viewer()), Config::default());

    controller.bootstrap().await.unwrap();

    controller.surface_mut().form.title = "Title".into();

    assert_matches!(
      controller.submit().await.unwrap_err(),
      Error::EmptyField { field: "url" },
    );
    assert_eq!(requests(&controller), ["stories"]);
  }

  #[tokio::test]
  async fn signed_out() {
    let controller = controller(FakeBackend::new(vec![story("a")]), None, Config::default());

    controller.bootstrap().await.unwrap();

    assert_matches!(controller.submit().await.unwrap_err(), Error::SignedOut);
    assert_matches!(
      controller.toggle_favorite(&"a".into()).await.unwrap_err(),
      Error::SignedOut
    );
    assert_matches!(
      controller.delete(&"a".into()).await.unwrap_err(),
      Error::SignedOut
    );
  }

  #[tokio::test]
  async fn toggle_favorite_twice() {
    let controller = controller(
      FakeBackend::new(vec![story("a"), story("b")]),
      Some(viewer()),
      Config::default(),
    );

    controller.bootstrap().await.unwrap();

    let id = StoryId::from("a");

    assert_eq!(star(&controller, Region::All, "a"), Some("far"));

    controller
      .dispatch(Event::ToggleFavorite(id.clone()))
      .await
      .unwrap();

    assert_eq!(star(&controller, Region::All, "a"), Some("fas"));
    assert!(controller.backend().favorites.borrow().contains(&id));
    assert!(controller.surface().contains(Region::Favorites, &id));

    controller.toggle_favorite(&id).await.unwrap();

    assert_eq!(star(&controller, Region::All, "a"), Some("far"));
    assert!(controller.backend().favorites.borrow().is_empty());
    assert!(controller
      .surface()
      .html(Region::Favorites)
      .contains("No favorites added!"));

    assert_eq!(
      requests(&controller),
      ["stories", "add_favorite a", "remove_favorite a"]
    );
  }

  #[tokio::test]
  async fn rejected_favorite_leaves_star() {
    let controller = controller(FakeBackend::new(vec![story("a")]), Some(viewer()), Config::default());

    controller.bootstrap().await.unwrap();
    controller.backend().reject.set(true);

    assert_matches!(
      controller.toggle_favorite(&"a".into()).await.unwrap_err(),
      Error::Favorite { id, .. } if id == "a".into(),
    );

    assert_eq!(star(&controller, Region::All, "a"), Some("far"));
    assert!(controller.surface().error.is_some());

    controller.backend().reject.set(false);
    controller.toggle_favorite(&"a".into()).await.unwrap();

    assert_eq!(star(&controller, Region::All, "a"), Some("fas"));
    assert_eq!(controller.surface().error, None);
  }

  #[tokio::test]
  async fn rejected_optimistic_favorite_is_rolled_back() {
    let mut viewer = viewer();
    viewer.add_favorite(story("z"));
    viewer.add_favorite(story("a"));

    let controller = controller(gated(vec![story("a")]), Some(viewer), optimistic());

    controller.bootstrap().await.unwrap();
    controller.backend().reject.set(true);

    let id = StoryId::from("a");

    let mut toggle = pin!(controller.toggle_favorite(&id));

    poll_fn(|cx| {
      assert!(toggle.as_mut().poll(cx).is_pending());
      Poll::Ready(())
    })
    .await;

    assert_eq!(star(&controller, Region::All, "a"), Some("far"));

    controller.backend().gate.as_ref().unwrap().notify_one();

    assert_matches!(toggle.await.unwrap_err(), Error::Favorite { .. });

    assert_eq!(star(&controller, Region::All, "a"), Some("fas"));
    assert_eq!(
      controller.state().viewer.as_ref().unwrap().favorites,
      [story("z"), story("a")]
    );
  }

  #[tokio::test]
  async fn optimistic_favorite_renders_before_response() {
    let controller = controller(gated(vec![story("a")]), Some(viewer()), optimistic());

    controller.bootstrap().await.unwrap();

    let id = StoryId::from("a");

    let mut toggle = pin!(controller.toggle_favorite(&id));

    poll_fn(|cx| {
      assert!(toggle.as_mut().poll(cx).is_pending());
      Poll::Ready(())
    })
    .await;

    assert_eq!(star(&controller, Region::All, "a"), Some("fas"));
    assert!(controller.surface().contains(Region::Favorites, &id));
    assert!(controller.backend().favorites.borrow().is_empty());

    controller.backend().gate.as_ref().unwrap().notify_one();

    toggle.await.unwrap();

    assert_eq!(star(&controller, Region::All, "a"), Some("fas"));
    assert!(controller.backend().favorites.borrow().contains(&id));
    assert_eq!(
      controller.state().viewer.as_ref().unwrap().favorites,
      [story("a")]
    );
    assert_eq!(requests(&controller), ["stories", "add_favorite a"]);
  }

  #[tokio::test]
  async fn gestures_during_request_are_ignored() {
    let controller = controller(gated(vec![story("a")]), Some(viewer()), Config::default());

    controller.bootstrap().await.unwrap();

    let id = StoryId::from("a");

    let mut first = pin!(controller.toggle_favorite(&id));

    poll_fn(|cx| {
      assert!(first.as_mut().poll(cx).is_pending());
      Poll::Ready(())
    })
    .await;

    controller.toggle_favorite(&id).await.unwrap();
    controller.delete(&id).await.unwrap();

    controller.backend().gate.as_ref().unwrap().notify_one();

    first.await.unwrap();

    assert_eq!(requests(&controller), ["stories", "add_favorite a"]);
    assert_eq!(star(&controller, Region::All, "a"), Some("fas"));

    controller.delete(&id).await.unwrap();

    assert_eq!(
      requests(&controller),
      ["stories", "add_favorite a", "remove_story a"]
    );
  }

  #[tokio::test]
  async fn delete() {
    let mut viewer = viewer();
    viewer.own_stories = vec![story("a"), story("b")];
    viewer.add_favorite(story("a"));

    let controller = controller(
      FakeBackend::new(vec![story("a"), story("b"), story("c")]),
      Some(viewer),
      Config::default(),
    );

    controller.bootstrap().await.unwrap();
    controller.show(Region::Own);

    let id = StoryId::from("a");

    assert!(controller.surface().contains(Region::Own, &id));

    controller.dispatch(Event::Delete(id.clone())).await.unwrap();

    let surface = controller.surface();
    assert!(!surface.contains(Region::Own, &id));
    assert!(!surface.contains(Region::All, &id));
    assert!(!surface.contains(Region::Favorites, &id));
    assert_eq!(surface.stories(Region::Own), [&StoryId::from("b")]);
    assert_eq!(controller.state().find(&id), None);
  }

  #[tokio::test]
  async fn rejected_delete_leaves_story() {
    let mut viewer = viewer();
    viewer.own_stories = vec![story("a"), story("b")];

    let controller = controller(
      FakeBackend::new(vec![story("a"), story("b")]),
      Some(viewer),
      Config::default(),
    );

    controller.bootstrap().await.unwrap();
    controller.render(Region::Own);

    let before = controller.state().clone();

    controller.backend().reject.set(true);

    assert_matches!(
      controller.delete(&"a".into()).await.unwrap_err(),
      Error::Delete { id, .. } if id == "a".into(),
    );

    let surface = controller.surface();
    assert!(surface.contains(Region::All, &"a".into()));
    assert!(surface.contains(Region::Own, &"a".into()));
    assert_eq!(
      surface.error.as_deref(),
      Some("failed to delete story a: backend rejected request")
    );
    assert_eq!(*controller.state(), before);
  }

  #[tokio::test]
  async fn rejected_optimistic_delete_is_rolled_back() {
    let mut viewer = viewer();
    viewer.own_stories = vec![story("a"), story("b")];

    let controller = controller(
      FakeBackend::new(vec![story("a"), story("b")]),
      Some(viewer),
      optimistic(),
    );

    controller.bootstrap().await.unwrap();
    controller.render(Region::Own);

    let before = controller.state().clone();

    controller.backend().reject.set(true);

    assert_matches!(
      controller.delete(&"b".into()).await.unwrap_err(),
      Error::Delete { .. }
    );

    assert_eq!(*controller.state(), before);
    assert_eq!(
      controller.surface().stories(Region::Own),
      [&StoryId::from("a"), &StoryId::from("b")]
    );
  }

  #[tokio::test]
  async fn delete_unknown_story() {
    let controller = controller(FakeBackend::new(vec![story("a")]), Some(viewer()), Config::default());

    controller.bootstrap().await.unwrap();

    assert_matches!(
      controller.delete(&"x".into()).await.unwrap_err(),
      Error::UnknownStory { id } if id == "x".into(),
    );
    assert_eq!(requests(&controller), ["stories"]);
  }

  #[tokio::test]
  async fn show_region() {
    let mut viewer = viewer();
    viewer.add_favorite(story("a"));

    let controller = controller(FakeBackend::new(vec![story("a")]), Some(viewer), Config::default());

    controller.bootstrap().await.unwrap();
    controller
      .dispatch(Event::Show(Region::Favorites))
      .await
      .unwrap();

    let surface = controller.surface();
    assert_eq!(surface.visible, Some(Region::Favorites));
    assert_eq!(surface.stories(Region::Favorites), [&StoryId::from("a")]);
  }

  #[tokio::test]
  async fn into_parts() {
    let controller = controller(FakeBackend::new(vec![story("a")]), None, Config::default());

    controller.bootstrap().await.unwrap();

    let (backend, surface) = controller.into_parts();
    assert_eq!(*backend.requests.borrow(), ["stories"]);
    assert!(!surface.loading);
  }
}
