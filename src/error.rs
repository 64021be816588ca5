use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error("{0}")]
  InvalidArgument(String)
}

impl Error {
  pub fn invalid_argument(msg: impl Into<String>) -> Error {
    Error::InvalidArgument(msg.into())
  }

  /// Whether the usage text should be shown alongside this error
  pub fn is_usage_error(&self) -> bool {
    matches!(self, Error::InvalidArgument(_))
  }
}
