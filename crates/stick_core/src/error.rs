use thiserror::Error;

/// Rejected stick configuration. Raised at construction time so a bad
/// config can never misbehave silently mid-drag.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("movement range must be a finite positive number, got {value}")]
    MovementRange { value: f32 },

    #[error("dead zone must be within [0, 1], got {value}")]
    DeadZone { value: f32 },
}
