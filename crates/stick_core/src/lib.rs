//! Engine-agnostic virtual analog stick: converts pointer press/drag/release
//! events into a normalized 2D control vector and visual offsets.

mod config;
mod error;
mod mapper;
mod surface;

pub use config::{AxisOptions, StickConfig, StickType};
pub use error::ConfigError;
pub use mapper::{StickEvent, StickMapper};
pub use surface::{ControlSink, StickSurface};
