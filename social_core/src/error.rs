use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Any failure of the external feed API: transport, status, or response shape.
    #[error("Upstream error: {0}")]
    Upstream(#[source] anyhow::Error),
}

impl Error {
    pub fn upstream<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Error::Upstream(err.into())
    }
}
