//! Keyboard shortcuts for the simulation screen.
//!
//! Keys produce the same [`ControlCommand`]s as the on-screen buttons.

use bevy::prelude::*;

use crate::types::{configure_frame_sets, AppScreen, ControlCommand, FrameSet};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        configure_frame_sets(app);
        app.add_message::<ControlCommand>().add_systems(
            Update,
            keyboard_shortcuts
                .in_set(FrameSet::Input)
                .run_if(in_state(AppScreen::Simulation)),
        );
    }
}

/// Map a freshly pressed key to its control command.
pub fn command_for_key(key: KeyCode) -> Option<ControlCommand> {
    match key {
        KeyCode::BracketRight => Some(ControlCommand::DoubleSpeed),
        KeyCode::BracketLeft => Some(ControlCommand::HalfSpeed),
        KeyCode::KeyR => Some(ControlCommand::ResetOffset),
        _ => None,
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: MessageWriter<ControlCommand>,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    for key in keys.get_just_pressed() {
        if let Some(command) = command_for_key(*key) {
            commands.write(command);
        }
    }

    // Escape: back to the menu, the world keeps its state
    if keys.just_pressed(KeyCode::Escape) {
        info!("Returning to menu");
        next_screen.set(AppScreen::Menu);
    }
}
