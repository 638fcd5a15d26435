//! Configuration validation.
//!
//! Checks window names and sizes, collecting every problem into one error.

use std::collections::HashSet;

use wincache_common::ConfigError;

use crate::schema::WincacheConfig;

const MIN_WINDOW_DIM: u32 = 100;
const MAX_WINDOW_DIM: u32 = 10_000;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WincacheConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    let mut seen = HashSet::new();

    for (i, spec) in config.windows.iter().enumerate() {
        let label = if spec.name.is_empty() {
            errors.push(format!("windows[{i}].name must not be empty"));
            format!("windows[{i}]")
        } else {
            if !seen.insert(spec.name.as_str()) {
                errors.push(format!("duplicate window name '{}'", spec.name));
            }
            format!("windows.{}", spec.name)
        };

        validate_range(
            &mut errors,
            &format!("{label}.width"),
            spec.options.width,
            MIN_WINDOW_DIM,
            MAX_WINDOW_DIM,
        );
        validate_range(
            &mut errors,
            &format!("{label}.height"),
            spec.options.height,
            MIN_WINDOW_DIM,
            MAX_WINDOW_DIM,
        );

        if spec.url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            errors.push(format!("{label}.url must not be empty"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, field: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{field} must be {min}-{max}, got {value}"));
    }
}
