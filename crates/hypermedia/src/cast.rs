use super::*;

pub trait Cast {
  fn cast<T: JsCast>(self) -> Result<T, Error>;
}

impl<V: JsCast> Cast for V {
  fn cast<T: JsCast>(self) -> Result<T, Error> {
    self.dyn_into::<T>().map_err(|_| {
      error::ElementType {
        ty: std::any::type_name::<T>(),
      }
      .build()
    })
  }
}
