//! Registry policy configuration.

use serde::{Deserialize, Serialize};
use wincache_common::CloseBehavior;

/// Registry-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// What closing a window does until the application starts quitting.
    pub close_behavior: CloseBehavior,
}
