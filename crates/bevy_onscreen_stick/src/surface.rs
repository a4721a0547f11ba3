use bevy::prelude::*;
use stick_core::StickSurface;

/// Flips window coordinates (y down) into the stick's control space
/// (y up), so "stick up" comes out as a positive y component.
pub(crate) fn to_control_space(window_position: Vec2) -> Vec2 {
    Vec2::new(window_position.x, -window_position.y)
}

/// Node rect in logical pixels, in window coordinates.
pub(crate) fn node_rect(node: &ComputedNode, transform: &GlobalTransform) -> Rect {
    let scale = node.inverse_scale_factor();
    Rect::from_center_size(
        transform.translation().truncate() * scale,
        node.size() * scale,
    )
}

/// `StickSurface` backed by the stick's region geometry.
///
/// The background position derives from the mapper's current anchor rather
/// than the background node's transform, which lags a frame behind layout.
pub(crate) struct UiStickSurface {
    /// Region center in control space.
    pub(crate) region_center: Vec2,
    /// The mapper's background anchor, relative to the region center.
    pub(crate) anchor: Vec2,
    pub(crate) ui_scale: f32,
}

impl StickSurface for UiStickSurface {
    fn screen_to_local_anchor(&self, screen: Vec2) -> Option<Vec2> {
        Some(screen - self.region_center)
    }

    fn background_screen_position(&self) -> Vec2 {
        self.region_center + self.anchor
    }

    fn scale_factor(&self) -> f32 {
        self.ui_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_space_flips_the_vertical_axis() {
        assert_eq!(to_control_space(Vec2::new(30.0, 40.0)), Vec2::new(30.0, -40.0));
    }

    #[test]
    fn background_position_tracks_the_anchor() {
        let surface = UiStickSurface {
            region_center: Vec2::new(100.0, -500.0),
            anchor: Vec2::new(25.0, 10.0),
            ui_scale: 1.0,
        };
        assert_eq!(
            surface.background_screen_position(),
            Vec2::new(125.0, -490.0)
        );
        assert_eq!(
            surface.screen_to_local_anchor(Vec2::new(130.0, -500.0)),
            Some(Vec2::new(30.0, 0.0))
        );
    }
}
