use glam::Vec2;
use tracing::{trace, warn};

use crate::config::{StickConfig, StickType};
use crate::error::ConfigError;
use crate::surface::{ControlSink, StickSurface};

/// A pointer event, dispatched by the host UI layer.
///
/// Valid session order is press, zero or more drags, release. Events
/// arriving outside that order are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StickEvent {
    Press(Vec2),
    Drag(Vec2),
    Release,
}

/// Converts pointer events into a normalized control vector plus visual
/// offsets for the background and handle graphics.
///
/// The mapper owns the per-session state exclusively and models a single
/// pointer stream; the host decides which pointer feeds it.
#[derive(Clone, Debug)]
pub struct StickMapper {
    config: StickConfig,
    background_anchor: Vec2,
    handle_offset: Vec2,
    pressed: bool,
}

impl StickMapper {
    pub fn new(config: StickConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            background_anchor: Vec2::ZERO,
            handle_offset: Vec2::ZERO,
            pressed: false,
        })
    }

    pub fn config(&self) -> &StickConfig {
        &self.config
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Local offset of the background graphic. Moves on press for
    /// non-`Fixed` sticks and during over-range `Dynamic` drags.
    pub fn background_anchor(&self) -> Vec2 {
        self.background_anchor
    }

    /// Visual offset of the handle from the background's center.
    /// Never longer than the configured movement range.
    pub fn handle_offset(&self) -> Vec2 {
        self.handle_offset
    }

    pub fn background_visible(&self) -> bool {
        !self.config.show_only_when_pressed || self.pressed
    }

    pub fn handle(
        &mut self,
        event: StickEvent,
        surface: &impl StickSurface,
        sink: &mut impl ControlSink,
    ) {
        match event {
            StickEvent::Press(position) => self.press(position, surface, sink),
            StickEvent::Drag(position) => self.drag(position, surface, sink),
            StickEvent::Release => self.release(sink),
        }
    }

    fn press(&mut self, position: Vec2, surface: &impl StickSurface, sink: &mut impl ControlSink) {
        if self.pressed {
            warn!("stick pressed while a session is already active, ignoring");
            return;
        }
        self.pressed = true;

        let mut recentered = false;
        if self.config.stick_type != StickType::Fixed {
            // Keep the previous anchor if the surface cannot resolve the point
            if let Some(local) = surface.screen_to_local_anchor(position) {
                self.background_anchor = local;
                recentered = true;
            }
        }

        // First-frame output is identical to a drag at the same position.
        // A recentered background sits under the pointer even though the
        // host has not repositioned its graphic yet.
        let background = if recentered {
            position
        } else {
            surface.background_screen_position()
        };
        self.drag_against(position, background, surface.scale_factor(), sink);
    }

    fn drag(&mut self, position: Vec2, surface: &impl StickSurface, sink: &mut impl ControlSink) {
        if !self.pressed {
            trace!("stick drag without an active press, ignoring");
            return;
        }
        self.drag_against(
            position,
            surface.background_screen_position(),
            surface.scale_factor(),
            sink,
        );
    }

    fn drag_against(
        &mut self,
        position: Vec2,
        background: Vec2,
        scale_factor: f32,
        sink: &mut impl ControlSink,
    ) {
        let travel = self.config.movement_range * scale_factor;
        let mut input = (position - background) / travel * self.config.axis.mask();
        if !input.is_finite() {
            input = Vec2::ZERO;
        }

        let raw_magnitude = input.length();
        let direction = input.normalize_or_zero();

        if raw_magnitude <= self.config.dead_zone {
            input = Vec2::ZERO;
        } else if raw_magnitude > 1.0 {
            input = direction;
        }

        sink.emit(input);

        if self.config.stick_type == StickType::Dynamic && raw_magnitude > 1.0 {
            self.background_anchor += self.config.movement_range * (raw_magnitude - 1.0) * direction;
        }

        self.handle_offset = input * self.config.movement_range;
    }

    fn release(&mut self, sink: &mut impl ControlSink) {
        if !self.pressed {
            trace!("stick release without an active press, ignoring");
            return;
        }

        sink.emit(Vec2::ZERO);
        self.handle_offset = Vec2::ZERO;
        self.pressed = false;

        if self.config.recenter_on_release {
            self.background_anchor = Vec2::ZERO;
        }
    }
}
