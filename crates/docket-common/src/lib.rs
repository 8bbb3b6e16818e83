pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, DocketError, ShellError};
pub use events::{EventBus, ShellEvent};
pub use types::{Color, FieldKey, PageKey};

pub type Result<T> = std::result::Result<T, DocketError>;
