use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  #[snafu(display("invalid page configuration"))]
  Config { source: serde_json::Error },
  #[snafu(display("deserializing response from {url} failed"))]
  Deserialize {
    url: Url,
    source: serde_json::Error,
  },
  DocumentMissing,
  #[snafu(display("no element matches `{selector}`"))]
  ElementMissing { selector: String },
  #[snafu(display("element is not a `{ty}`"))]
  ElementType { ty: &'static str },
  #[snafu(display("{operation} failed: {message}"))]
  Js {
    operation: &'static str,
    message: String,
  },
  #[snafu(display("invalid API path `{path}`"))]
  Path {
    path: String,
    source: url::ParseError,
  },
  #[snafu(display("request to {url} failed"))]
  Request {
    url: Url,
    source: reqwest::Error,
  },
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  #[snafu(display("response from {url} failed with {status}"))]
  Status {
    url: Url,
    status: StatusCode,
  },
  WindowMissing,
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}

/// Wrap a JavaScript exception from `operation`.
pub(crate) fn js(operation: &'static str) -> impl FnOnce(JsValue) -> Error {
  move |value| Error::Js {
    operation,
    message: value
      .as_string()
      .unwrap_or_else(|| format!("{value:?}")),
  }
}
