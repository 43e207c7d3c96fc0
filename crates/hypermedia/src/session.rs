use super::*;

/// Credentials of the signed-in user, as stored by the login page.
#[derive(Clone, Debug)]
pub struct Session {
  pub token: Token,
  pub username: String,
}

impl Session {
  /// Read `username` and `token` from local storage. `None` unless both are
  /// present.
  pub fn load() -> Result<Option<Self>, Error> {
    let Some(storage) = web_sys::window()
      .context(error::WindowMissing)?
      .local_storage()
      .map_err(js("open local storage"))?
    else {
      return Ok(None);
    };

    let username = storage.get_item("username").map_err(js("read username"))?;
    let token = storage.get_item("token").map_err(js("read token"))?;

    Ok(match (username, token) {
      (Some(username), Some(token)) if !username.is_empty() && !token.is_empty() => Some(Self {
        token: token.into(),
        username,
      }),
      _ => None,
    })
  }

  /// Fetch the session's user profile.
  pub async fn user(self, api: &Api) -> Result<User, Error> {
    api.user(&self.username, self.token).await
  }

  /// The session's user, or `None` if the profile can't be loaded, for
  /// example because the stored token has expired.
  pub async fn viewer(self, api: &Api) -> Option<User> {
    let username = self.username.clone();

    match self.user(api).await {
      Ok(user) => Some(user),
      Err(err) => {
        log::warn!("continuing signed out, could not load user `{username}`: {err}");
        None
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn unreachable_profile_signs_out() {
    let api = Api::new("http://127.0.0.1:9/".parse().unwrap());

    let session = Session {
      token: "expired".into(),
      username: "alice".into(),
    };

    assert!(session.clone().user(&api).await.is_err());
    assert_eq!(session.viewer(&api).await, None);
  }
}
