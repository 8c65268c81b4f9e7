use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestgenError {
    #[error("user stories directory not found: {}", .0.display())]
    StoriesDirNotFound(PathBuf),

    #[error("config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TestgenError>;
