use bevy::prelude::*;

use crate::stick::ActivePointer;

/// Position and identity of a pointer that started pressing this frame.
/// Mouse wins over touch when both land on the same frame.
pub(crate) fn just_pressed_pointer(
    buttons: &ButtonInput<MouseButton>,
    touches: &Touches,
    windows: &Query<&Window>,
) -> Option<(ActivePointer, Vec2)> {
    if buttons.just_pressed(MouseButton::Left) {
        let position = windows.single().cursor_position()?;
        return Some((ActivePointer::Mouse, position));
    }
    let touch = touches.iter_just_pressed().next()?;
    Some((ActivePointer::Touch(touch.id()), touch.position()))
}

/// Current position of the session's pointer while it is still held.
pub(crate) fn held_pointer_position(
    pointer: ActivePointer,
    buttons: &ButtonInput<MouseButton>,
    touches: &Touches,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    match pointer {
        ActivePointer::Mouse => {
            if !buttons.pressed(MouseButton::Left) {
                return None;
            }
            windows.single().cursor_position()
        }
        ActivePointer::Touch(id) => touches.get_pressed(id).map(bevy::input::touch::Touch::position),
    }
}

/// Whether the session's pointer ended this frame. Touch cancellation
/// counts as a release.
pub(crate) fn pointer_released(
    pointer: ActivePointer,
    buttons: &ButtonInput<MouseButton>,
    touches: &Touches,
) -> bool {
    match pointer {
        ActivePointer::Mouse => buttons.just_released(MouseButton::Left),
        ActivePointer::Touch(id) => touches.just_released(id) || touches.just_canceled(id),
    }
}
