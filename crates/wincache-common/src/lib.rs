pub mod errors;
pub mod types;

pub use errors::{ConfigError, RegistryError, WincacheError};
pub use types::{CloseBehavior, HandleId, WindowOptions, WindowStatus};

pub type Result<T> = std::result::Result<T, WincacheError>;
