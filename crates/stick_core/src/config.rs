use glam::Vec2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::ConfigError;

/// How the background graphic repositions across a press/drag session.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum StickType {
    /// The background never moves.
    #[default]
    Fixed,
    /// The background recenters under each new press.
    Floating,
    /// Recenters like `Floating`, and additionally chases the pointer once
    /// it travels past the movement range.
    Dynamic,
}

/// Which components of the control vector are live.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum AxisOptions {
    #[default]
    Both,
    Horizontal,
    Vertical,
}

impl AxisOptions {
    /// Elementwise mask applied to the raw pointer vector.
    pub fn mask(self) -> Vec2 {
        match self {
            Self::Both => Vec2::ONE,
            Self::Horizontal => Vec2::X,
            Self::Vertical => Vec2::Y,
        }
    }
}

/// Author-set stick behavior. Immutable once handed to a mapper; swapping
/// in a new mapper takes effect on the next press session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickConfig {
    pub stick_type: StickType,
    pub axis: AxisOptions,
    /// Radius, in local UI units, the handle can travel from the
    /// background's center.
    pub movement_range: f32,
    /// Normalized displacement at or below which input snaps to zero.
    pub dead_zone: f32,
    /// Hide the background graphic while no press is active.
    pub show_only_when_pressed: bool,
    /// Reset the background anchor to the origin when the press ends.
    /// Off by default, so a `Dynamic` stick stays where the last drag
    /// pushed it.
    pub recenter_on_release: bool,
}

impl Default for StickConfig {
    fn default() -> Self {
        Self {
            stick_type: StickType::default(),
            axis: AxisOptions::default(),
            movement_range: 50.0,
            dead_zone: 0.0,
            show_only_when_pressed: false,
            recenter_on_release: false,
        }
    }
}

impl StickConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.movement_range.is_finite() || self.movement_range <= 0.0 {
            return Err(ConfigError::MovementRange {
                value: self.movement_range,
            });
        }
        if !self.dead_zone.is_finite() || !(0.0..=1.0).contains(&self.dead_zone) {
            return Err(ConfigError::DeadZone {
                value: self.dead_zone,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(StickConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_movement_range() {
        for value in [0.0, -50.0, f32::NAN, f32::INFINITY] {
            let config = StickConfig {
                movement_range: value,
                ..StickConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::MovementRange { .. })),
                "movement_range {value} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_dead_zone() {
        for value in [-0.1, 1.1, f32::NAN] {
            let config = StickConfig {
                dead_zone: value,
                ..StickConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::DeadZone { .. })),
                "dead_zone {value} should be rejected"
            );
        }
    }

    #[test]
    fn dead_zone_bounds_are_valid() {
        for value in [0.0, 1.0] {
            let config = StickConfig {
                dead_zone: value,
                ..StickConfig::default()
            };
            assert_eq!(config.validate(), Ok(()), "dead_zone {value} is in range");
        }
    }

    #[test]
    fn stick_type_parses_from_str() {
        assert_eq!(StickType::from_str("Dynamic"), Ok(StickType::Dynamic));
        assert!(StickType::from_str("Wobbly").is_err());
    }

    #[test]
    fn axis_masks() {
        assert_eq!(AxisOptions::Both.mask(), Vec2::ONE);
        assert_eq!(AxisOptions::Horizontal.mask(), Vec2::X);
        assert_eq!(AxisOptions::Vertical.mask(), Vec2::Y);
    }
}
