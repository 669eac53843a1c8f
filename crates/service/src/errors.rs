use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// Not-found error carrying the client-facing message for `resource`.
    pub fn not_found(resource: &str) -> Self {
        Self::NotFound(format!("I cannot find the {} you are looking for", resource))
    }
}
