use glam::Vec2;

/// Geometry queries the mapper needs from the host render surface.
///
/// All positions share one screen space; the anchor space is whatever local
/// space the host positions the background graphic in.
pub trait StickSurface {
    /// Projects a screen point into the background's local anchor space.
    /// Returns `None` when the point cannot be resolved (degenerate camera
    /// or canvas state); the mapper then keeps the previous anchor.
    fn screen_to_local_anchor(&self, screen: Vec2) -> Option<Vec2>;

    /// Current screen-space position of the background's center.
    fn background_screen_position(&self) -> Vec2;

    /// Render scale between local UI units and screen units.
    /// Contract: finite and greater than zero.
    fn scale_factor(&self) -> f32;
}

/// Receiver for the normalized control vector.
///
/// Each emitted component is in `[-1, 1]`. Called at least once per drag
/// and exactly once, with `Vec2::ZERO`, per release.
pub trait ControlSink {
    fn emit(&mut self, value: Vec2);
}
