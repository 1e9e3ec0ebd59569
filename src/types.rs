//! Shared constants, screen states and control messages.

use bevy::prelude::*;

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67428e-11;

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.495978707e11;

/// Meters to AU
pub const METERS_TO_AU: f64 = 1.0 / AU_TO_METERS;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Maximum number of positions kept in a body's trail.
pub const TRAIL_LENGTH: usize = 100;

/// Bodies closer than this (meters) are treated as coincident.
pub const MIN_SEPARATION: f64 = 1.0;

/// Per-frame ordering: commands are applied before the physics step, the
/// camera smooths after it, and drawing reads the settled state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Keyboard, mouse and button handling
    Input,
    /// Speed commands and the simulation step
    Physics,
    /// Zoom smoothing
    Camera,
    /// Gizmos and mesh sync
    Render,
}

/// Order the [`FrameSet`]s in `Update`.
pub fn configure_frame_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            FrameSet::Input,
            FrameSet::Physics,
            FrameSet::Camera,
            FrameSet::Render,
        )
            .chain(),
    );
}

/// Top-level screens of the application.
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppScreen {
    /// Title screen with the start/quit buttons.
    #[default]
    Menu,
    /// Running orbital simulation.
    Simulation,
}

/// Discrete commands produced by the control surface (buttons, keyboard).
///
/// Consumed by the physics and camera plugins once per frame.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCommand {
    /// Multiply the time step by 2.
    DoubleSpeed,
    /// Multiply the time step by 0.5.
    HalfSpeed,
    /// Move the pan offset back to the origin.
    ResetOffset,
}

impl ControlCommand {
    /// Time step factor carried by a speed command, if any.
    pub fn speed_factor(self) -> Option<f64> {
        match self {
            ControlCommand::DoubleSpeed => Some(2.0),
            ControlCommand::HalfSpeed => Some(0.5),
            ControlCommand::ResetOffset => None,
        }
    }
}
