/// The errors raised by materialization, templates and registration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The root of a template materialized into nothing.
    #[error("No node was created")]
    NoNodeCreated,
    /// A custom element type without an element name was registered.
    #[error("No defined name")]
    NoDefinedName,
    /// The host environment has no custom element registry.
    #[error("Custom element registry not available")]
    RegistryUnavailable,
    /// An operation of the backend failed.
    #[error("{msg}")]
    BackendError {
        msg: String,
        err: Option<Box<dyn std::error::Error>>,
    },
}

impl Error {
    /// Build a `BackendError` without an underlying cause.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::BackendError {
            msg: msg.into(),
            err: None,
        }
    }
}
