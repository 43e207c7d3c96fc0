use super::*;

/// The page the controller renders into.
///
/// Implementations are infallible from the controller's point of view, a
/// surface that fails to apply a change logs it.
pub trait Surface {
  fn remove_loading(&mut self);

  /// Clear `region` and append `fragments` in order.
  fn replace(&mut self, region: Region, fragments: Vec<Fragment>);

  fn prepend(&mut self, region: Region, fragment: Fragment);

  /// Swap the item for `fragment.story` in `region`, if present.
  fn replace_story(&mut self, region: Region, fragment: Fragment);

  /// Make `region` the visible list.
  fn show(&mut self, region: Region);

  fn form(&self) -> StoryForm;

  fn set_form_visible(&mut self, visible: bool);

  fn clear_form(&mut self);

  fn show_error(&mut self, message: &str);

  fn clear_error(&mut self);
}
