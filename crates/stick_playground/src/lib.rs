use bevy_onscreen_stick::OnScreenStickPlugin;

mod app;
mod game;

use game::GamePlugin;

pub fn run() {
    app::default_app("Stick Playground")
        .add_plugins(OnScreenStickPlugin)
        .add_plugins(GamePlugin)
        .run();
}
