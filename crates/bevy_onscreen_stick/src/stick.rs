use bevy::prelude::*;
use stick_core::{ConfigError, StickConfig, StickMapper};

/// One on-screen stick. Lives on the touch-region UI node; the background
/// and knob graphics are child nodes.
#[derive(Component)]
pub struct OnScreenStick {
    pub mapper: StickMapper,
}

/// Marker for the background graphic node.
#[derive(Component)]
pub struct StickBackground;

/// Marker for the knob graphic node.
#[derive(Component)]
pub struct StickKnob;

/// Latest control vector emitted by this stick.
#[derive(Component, Clone, Copy, Debug, Default, Deref)]
pub struct StickValue(pub Vec2);

/// The pointer currently feeding a stick, if any. One logical pointer per
/// stick; other pointers are ignored until the session ends.
#[derive(Component, Default)]
pub struct StickSession {
    pointer: Option<ActivePointer>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ActivePointer {
    Mouse,
    Touch(u64),
}

impl StickSession {
    pub(crate) fn pointer(&self) -> Option<ActivePointer> {
        self.pointer
    }

    pub(crate) fn start(&mut self, pointer: ActivePointer) {
        self.pointer = Some(pointer);
    }

    pub(crate) fn clear(&mut self) {
        self.pointer = None;
    }
}

/// Control vector emitted by a stick, sent once per drag and once (zero)
/// per release.
#[derive(Event, Debug, Clone, Copy)]
pub struct StickInput {
    pub stick: Entity,
    pub value: Vec2,
}

/// Node sizes and colors for the spawned stick graphics.
#[derive(Clone, Copy, Debug)]
pub struct StickVisuals {
    pub region_size: Vec2,
    pub background_size: Vec2,
    pub knob_size: Vec2,
    pub background_color: Color,
    pub knob_color: Color,
}

impl Default for StickVisuals {
    fn default() -> Self {
        Self {
            region_size: Vec2::splat(160.0),
            background_size: Vec2::splat(120.0),
            knob_size: Vec2::splat(48.0),
            background_color: Color::srgba(1.0, 1.0, 1.0, 0.25),
            knob_color: Color::srgba(1.0, 1.0, 1.0, 0.6),
        }
    }
}

/// Spawned node sizes, kept so the layout systems can place the background
/// and knob without re-reading computed geometry.
#[derive(Component, Clone, Copy)]
pub(crate) struct StickLayout {
    pub(crate) region_size: Vec2,
    pub(crate) background_size: Vec2,
    pub(crate) knob_size: Vec2,
}

/// Spawns the three-node stick hierarchy: touch region, background, knob.
///
/// `region` carries the caller's positioning (e.g. absolute with
/// `left`/`bottom`); its size is overridden from `visuals`.
pub fn spawn_stick(
    commands: &mut Commands,
    config: StickConfig,
    visuals: &StickVisuals,
    region: Node,
) -> Result<Entity, ConfigError> {
    let mapper = StickMapper::new(config)?;
    let hidden = !mapper.background_visible();

    let mut region = region;
    region.width = Val::Px(visuals.region_size.x);
    region.height = Val::Px(visuals.region_size.y);

    let background_corner = (visuals.region_size - visuals.background_size) / 2.0;
    let knob_corner = (visuals.background_size - visuals.knob_size) / 2.0;

    let entity = commands
        .spawn((
            region,
            OnScreenStick { mapper },
            StickSession::default(),
            StickValue::default(),
            StickLayout {
                region_size: visuals.region_size,
                background_size: visuals.background_size,
                knob_size: visuals.knob_size,
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(background_corner.x),
                        top: Val::Px(background_corner.y),
                        width: Val::Px(visuals.background_size.x),
                        height: Val::Px(visuals.background_size.y),
                        ..default()
                    },
                    BackgroundColor(visuals.background_color),
                    BorderRadius::MAX,
                    if hidden {
                        Visibility::Hidden
                    } else {
                        Visibility::Inherited
                    },
                    StickBackground,
                ))
                .with_children(|background| {
                    background.spawn((
                        Node {
                            position_type: PositionType::Absolute,
                            left: Val::Px(knob_corner.x),
                            top: Val::Px(knob_corner.y),
                            width: Val::Px(visuals.knob_size.x),
                            height: Val::Px(visuals.knob_size.y),
                            ..default()
                        },
                        BackgroundColor(visuals.knob_color),
                        BorderRadius::MAX,
                        StickKnob,
                    ));
                });
        })
        .id();

    Ok(entity)
}
