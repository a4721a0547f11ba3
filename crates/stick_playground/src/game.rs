use bevy::prelude::*;
use bevy_onscreen_stick::{spawn_stick, StickConfig, StickType, StickValue, StickVisuals};
use leafwing_input_manager::prelude::*;

use crate::app::{WINDOW_HEIGHT, WINDOW_WIDTH};

const PLAYER_SPEED: f32 = 220.0;
const PLAYER_SIZE: f32 = 30.0;
const PICKUP_RADIUS: f32 = 12.0;
const PICKUP_COUNT: usize = 5;

// This is the list of "things in the game I want to be able to do based on input"
#[derive(Actionlike, PartialEq, Eq, Hash, Clone, Copy, Debug, Reflect)]
pub enum Action {
    #[actionlike(DualAxis)]
    Move,
}

#[derive(Component)]
pub struct Player;

#[derive(Component)]
pub struct Pickup;

#[derive(Resource, Default)]
pub struct Score(pub u32);

#[derive(Component)]
pub struct ScoreText;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<Action>::default())
            .init_resource::<Score>()
            .add_systems(Startup, setup)
            .add_systems(
                Update,
                (move_player, collect_pickups, update_score_text).chain(),
            );
    }
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    // Keyboard and physical gamepad cover what the on-screen stick covers
    // on touch devices
    let input_map = InputMap::default()
        .with_dual_axis(Action::Move, VirtualDPad::wasd())
        .with_dual_axis(Action::Move, GamepadStick::LEFT);

    commands.spawn((
        Sprite::from_color(Color::srgb(0.9, 0.6, 0.2), Vec2::splat(PLAYER_SIZE)),
        Transform::from_xyz(0.0, 0.0, 1.0),
        Player,
        InputManagerBundle::with_map(input_map),
    ));

    for _ in 0..PICKUP_COUNT {
        spawn_pickup(&mut commands);
    }

    commands.spawn((
        Text::new("Score: 0"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));

    // Movement stick in the lower-left corner
    let config = StickConfig {
        stick_type: StickType::Floating,
        dead_zone: 0.1,
        ..StickConfig::default()
    };
    let region = Node {
        position_type: PositionType::Absolute,
        left: Val::Px(20.0),
        bottom: Val::Px(20.0),
        ..default()
    };
    if let Err(error) = spawn_stick(&mut commands, config, &StickVisuals::default(), region) {
        error!("failed to spawn movement stick: {error}");
    }
}

fn spawn_pickup(commands: &mut Commands) {
    let x = (fastrand::f32() - 0.5) * (WINDOW_WIDTH - 60.0);
    let y = (fastrand::f32() - 0.5) * (WINDOW_HEIGHT - 200.0);

    commands.spawn((
        Sprite::from_color(Color::srgb(0.3, 0.8, 0.4), Vec2::splat(PICKUP_RADIUS * 2.0)),
        Transform::from_xyz(x, y, 0.0),
        Pickup,
    ));
}

fn move_player(
    time: Res<Time>,
    sticks: Query<&StickValue>,
    actions: Query<&ActionState<Action>, With<Player>>,
    mut players: Query<&mut Transform, With<Player>>,
) {
    let mut direction = Vec2::ZERO;
    for value in &sticks {
        direction += **value;
    }
    if let Ok(action_state) = actions.get_single() {
        direction += action_state.axis_pair(&Action::Move);
    }
    let direction = direction.clamp_length_max(1.0);

    let half_extents = Vec2::new(
        (WINDOW_WIDTH - PLAYER_SIZE) / 2.0,
        (WINDOW_HEIGHT - PLAYER_SIZE) / 2.0,
    );
    for mut transform in &mut players {
        let step = direction * PLAYER_SPEED * time.delta_secs();
        transform.translation.x = (transform.translation.x + step.x).clamp(-half_extents.x, half_extents.x);
        transform.translation.y = (transform.translation.y + step.y).clamp(-half_extents.y, half_extents.y);
    }
}

fn collect_pickups(
    mut commands: Commands,
    mut score: ResMut<Score>,
    players: Query<&Transform, With<Player>>,
    pickups: Query<(Entity, &Transform), With<Pickup>>,
) {
    let Ok(player) = players.get_single() else {
        return;
    };

    for (entity, transform) in &pickups {
        let distance = player
            .translation
            .truncate()
            .distance(transform.translation.truncate());
        if distance < PLAYER_SIZE / 2.0 + PICKUP_RADIUS {
            commands.entity(entity).despawn();
            score.0 += 1;
            spawn_pickup(&mut commands);
        }
    }
}

fn update_score_text(score: Res<Score>, mut texts: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    for mut text in &mut texts {
        **text = format!("Score: {}", score.0);
    }
}
