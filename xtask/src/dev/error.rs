use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Container runtime not found: {0}")]
    ContainerRuntimeNotFound(String),

    #[error("{0}")]
    ContainerStartFailed(String),

    #[error("Container '{name}' not healthy after {timeout_secs}s")]
    ContainerNotHealthy { name: String, timeout_secs: u64 },

    #[error("Seeding failed: {0}")]
    Seed(String),
}

pub type Result<T> = std::result::Result<T, DevError>;
