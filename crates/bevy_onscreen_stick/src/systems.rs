use bevy::prelude::*;
use stick_core::{ControlSink, StickEvent};

use crate::input::{held_pointer_position, just_pressed_pointer, pointer_released};
use crate::stick::{
    OnScreenStick, StickBackground, StickInput, StickKnob, StickLayout, StickSession, StickValue,
};
use crate::surface::{node_rect, to_control_space, UiStickSurface};

/// Collects the mapper's emissions so they can be forwarded as events
/// after the borrow on the mapper ends.
#[derive(Default)]
struct EmitBuffer {
    values: Vec<Vec2>,
}

impl ControlSink for EmitBuffer {
    fn emit(&mut self, value: Vec2) {
        self.values.push(value);
    }
}

/// Feeds pointer sessions into each stick's mapper and forwards the
/// emitted control vectors.
pub(crate) fn drive_sticks(
    mut sticks: Query<(
        Entity,
        &mut OnScreenStick,
        &mut StickSession,
        &mut StickValue,
        &ComputedNode,
        &GlobalTransform,
    )>,
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window>,
    ui_scale: Res<UiScale>,
    mut events: EventWriter<StickInput>,
) {
    for (entity, mut stick, mut session, mut value, node, transform) in &mut sticks {
        let rect = node_rect(node, transform);
        let surface = UiStickSurface {
            region_center: to_control_space(rect.center()),
            anchor: stick.mapper.background_anchor(),
            ui_scale: ui_scale.0,
        };
        let mut sink = EmitBuffer::default();

        match session.pointer() {
            None => {
                if let Some((pointer, position)) =
                    just_pressed_pointer(&buttons, &touches, &windows)
                {
                    if rect.contains(position) {
                        debug!("stick {entity} session started");
                        session.start(pointer);
                        stick.mapper.handle(
                            StickEvent::Press(to_control_space(position)),
                            &surface,
                            &mut sink,
                        );
                    }
                }
            }
            Some(pointer) => {
                if pointer_released(pointer, &buttons, &touches) {
                    debug!("stick {entity} session ended");
                    session.clear();
                    stick.mapper.handle(StickEvent::Release, &surface, &mut sink);
                } else if let Some(position) =
                    held_pointer_position(pointer, &buttons, &touches, &windows)
                {
                    stick.mapper.handle(
                        StickEvent::Drag(to_control_space(position)),
                        &surface,
                        &mut sink,
                    );
                }
            }
        }

        for emitted in sink.values {
            value.0 = emitted;
            events.send(StickInput {
                stick: entity,
                value: emitted,
            });
        }
    }
}

/// Center offset of a child node inside its parent, as a top-left corner
/// position. `center` is in control space, so its y flips back to UI-down.
fn corner_for(parent_size: Vec2, child_size: Vec2, center: Vec2) -> Vec2 {
    (parent_size - child_size) / 2.0 + Vec2::new(center.x, -center.y)
}

/// Applies the mapper's visual state: background visibility and offset,
/// knob offset.
pub(crate) fn apply_stick_visuals(
    sticks: Query<(&OnScreenStick, &StickLayout, &Children)>,
    mut backgrounds: Query<
        (&mut Node, &mut Visibility, Option<&Children>),
        With<StickBackground>,
    >,
    mut knobs: Query<&mut Node, (With<StickKnob>, Without<StickBackground>)>,
) {
    for (stick, layout, children) in &sticks {
        for child in children {
            let Ok((mut node, mut visibility, background_children)) = backgrounds.get_mut(*child)
            else {
                continue;
            };

            let corner = corner_for(
                layout.region_size,
                layout.background_size,
                stick.mapper.background_anchor(),
            );
            node.left = Val::Px(corner.x);
            node.top = Val::Px(corner.y);
            *visibility = if stick.mapper.background_visible() {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };

            let Some(background_children) = background_children else {
                continue;
            };
            for knob_entity in background_children {
                let Ok(mut knob_node) = knobs.get_mut(*knob_entity) else {
                    continue;
                };
                let corner = corner_for(
                    layout.background_size,
                    layout.knob_size,
                    stick.mapper.handle_offset(),
                );
                knob_node.left = Val::Px(corner.x);
                knob_node.top = Val::Px(corner.y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_math_flips_y_back_into_ui_space() {
        let parent = Vec2::splat(120.0);
        let child = Vec2::splat(40.0);
        // Centered child
        assert_eq!(corner_for(parent, child, Vec2::ZERO), Vec2::splat(40.0));
        // Stick pushed up-right: right in UI space, up means a smaller top
        assert_eq!(
            corner_for(parent, child, Vec2::new(10.0, 10.0)),
            Vec2::new(50.0, 30.0)
        );
    }
}
