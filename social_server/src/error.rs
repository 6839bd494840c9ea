use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use social_core::Error as SocialError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug)]
pub struct ServerError(anyhow::Error);

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let status = self.status_code();
        (status, self.to_string()).into_response()
    }
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        let err = &self.0;
        for cause in err.chain() {
            if let Some(err) = cause.downcast_ref::<SocialError>() {
                match err {
                    SocialError::Upstream(_) => return StatusCode::BAD_GATEWAY,
                }
            }
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        let err = ServerError::from(SocialError::upstream(anyhow::anyhow!("connection reset")));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "Upstream error: connection reset");

        let err = ServerError::from(anyhow::anyhow!("something else"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
