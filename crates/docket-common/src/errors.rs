use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("failed to load page '{page}': {reason}")]
    FragmentLoad { page: String, reason: String },

    #[error("webview error: {0}")]
    View(String),

    #[error("script error: {0}")]
    Script(String),

    #[error("field store error: {0}")]
    Store(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DocketError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("{0}")]
    Other(String),
}
