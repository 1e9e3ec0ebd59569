//! Camera system for the planet simulator.
//!
//! The view model is [`CameraState`]: a smoothly animated world-to-pixel
//! scale plus a screen-space pan offset. Screen coordinates follow the usual
//! window convention (origin top-left, y down) and are converted to Bevy's
//! centered 2D space only when drawing.

use bevy::{
    input::mouse::{AccumulatedMouseScroll, MouseScrollUnit},
    math::DVec2,
    prelude::*,
    window::PrimaryWindow,
};
use bevy_egui::EguiContexts;

use crate::types::{configure_frame_sets, AppScreen, ControlCommand, FrameSet, AU_TO_METERS};

/// Pixels of scroll reported by touchpads that count as one wheel notch.
pub const SCROLL_PIXELS_PER_NOTCH: f32 = 100.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("non-finite {what}: {value}")]
    NonFiniteInput { what: &'static str, value: f64 },

    #[error("invalid camera config: {what} = {value}")]
    InvalidConfig { what: &'static str, value: f64 },
}

/// Tunables for zoom and smoothing.
#[derive(Resource, Clone, Debug)]
pub struct CameraConfig {
    /// Pixels per meter at startup. Default: 250 px per AU.
    pub initial_scale: f64,
    /// Scale multiplier per scroll notch. Default: 1.4.
    pub zoom_factor_per_notch: f64,
    /// Fraction of the remaining gap closed each frame. Default: 0.1.
    pub smoothing: f64,
    /// Lower bound for the target scale.
    pub min_scale: f64,
    /// Upper bound for the target scale.
    pub max_scale: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let initial_scale = 250.0 / AU_TO_METERS;
        Self {
            initial_scale,
            zoom_factor_per_notch: 1.4,
            smoothing: 0.1,
            min_scale: initial_scale * 1e-4,
            max_scale: initial_scale * 1e4,
        }
    }
}

impl CameraConfig {
    /// Check that the scales and the notch factor are finite and positive,
    /// `smoothing` is in `(0, 1]` and `min_scale <= max_scale`.
    pub fn validate(&self) -> Result<(), CameraError> {
        let positive = [
            ("initial_scale", self.initial_scale),
            ("zoom_factor_per_notch", self.zoom_factor_per_notch),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
        ];
        for (what, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CameraError::InvalidConfig { what, value });
            }
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(CameraError::InvalidConfig {
                what: "smoothing",
                value: self.smoothing,
            });
        }
        if self.min_scale > self.max_scale {
            return Err(CameraError::InvalidConfig {
                what: "min_scale above max_scale",
                value: self.min_scale,
            });
        }
        Ok(())
    }
}

/// Zoom and pan state of the simulation view.
///
/// `current_scale` and `target_scale` are always strictly positive.
#[derive(Resource, Clone, Debug)]
pub struct CameraState {
    current_scale: f64,
    target_scale: f64,
    offset: DVec2,
    config: CameraConfig,
}

impl CameraState {
    /// Create the view at the configured initial scale.
    ///
    /// An invalid config is replaced by [`CameraConfig::default`].
    pub fn new(config: CameraConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!("{err}, using default camera config");
                CameraConfig::default()
            }
        };
        let scale = config.initial_scale;
        Self {
            current_scale: scale,
            target_scale: scale,
            offset: DVec2::ZERO,
            config,
        }
    }

    /// Pixels per meter used for drawing this frame.
    pub fn current_scale(&self) -> f64 {
        self.current_scale
    }

    /// Scale the view is animating toward.
    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    /// Pan offset in pixels.
    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Current scale relative to the startup scale; used to size body discs.
    pub fn zoom_ratio(&self) -> f64 {
        self.current_scale / self.config.initial_scale
    }

    /// Multiply the target scale by `zoom_factor_per_notch ^ notches`.
    ///
    /// Positive notches zoom in. The target is clamped to the configured
    /// range. Returns the new target.
    pub fn set_zoom_target(&mut self, notches: f64) -> Result<f64, CameraError> {
        if !notches.is_finite() {
            return Err(CameraError::NonFiniteInput {
                what: "zoom delta",
                value: notches,
            });
        }
        let factor = self.config.zoom_factor_per_notch.powf(notches);
        self.target_scale =
            (self.target_scale * factor).clamp(self.config.min_scale, self.config.max_scale);
        Ok(self.target_scale)
    }

    /// Move the current scale a fixed fraction of the way toward the target.
    ///
    /// Must run once per frame whether or not the target changed.
    pub fn tick(&mut self) -> f64 {
        self.current_scale = lerp(self.current_scale, self.target_scale, self.config.smoothing);
        self.current_scale
    }

    /// Accumulate a drag delta in pixels.
    pub fn pan(&mut self, delta: DVec2) -> Result<(), CameraError> {
        if !delta.is_finite() {
            let value = if delta.x.is_finite() { delta.y } else { delta.x };
            return Err(CameraError::NonFiniteInput {
                what: "pan delta",
                value,
            });
        }
        self.offset += delta;
        Ok(())
    }

    pub fn reset_offset(&mut self) {
        self.offset = DVec2::ZERO;
    }

    /// Map a world position (meters) to window pixels.
    pub fn world_to_screen(&self, world_pos: DVec2, window_center: DVec2) -> DVec2 {
        world_pos * self.current_scale + window_center + self.offset
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

fn lerp(start: f64, stop: f64, t: f64) -> f64 {
    start + (stop - start) * t
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        configure_frame_sets(app);
        app.init_resource::<CameraConfig>()
            .add_message::<ControlCommand>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(AppScreen::Simulation), create_camera_state)
            .add_systems(
                Update,
                (
                    (camera_zoom, camera_pan, apply_offset_commands).in_set(FrameSet::Input),
                    tick_camera.in_set(FrameSet::Camera),
                )
                    .run_if(in_state(AppScreen::Simulation))
                    .run_if(resource_exists::<CameraState>),
            );
    }
}

/// Spawn the 2D camera. One world unit is one logical pixel.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Create the view state on first entry; it persists across screen changes.
fn create_camera_state(
    mut commands: Commands,
    existing: Option<Res<CameraState>>,
    config: Res<CameraConfig>,
) {
    if existing.is_none() {
        commands.insert_resource(CameraState::new(config.clone()));
    }
}

/// True when egui is using the pointer (hovering or dragging a panel).
fn pointer_over_ui(contexts: &mut EguiContexts) -> bool {
    match contexts.ctx_mut() {
        Ok(ctx) => ctx.wants_pointer_input() || ctx.is_pointer_over_area(),
        Err(_) => false,
    }
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mut contexts: EguiContexts,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera: ResMut<CameraState>,
) {
    // Skip if no scroll input
    if mouse_scroll.delta.y == 0.0 || pointer_over_ui(&mut contexts) {
        return;
    }

    let notches = match mouse_scroll.unit {
        MouseScrollUnit::Line => mouse_scroll.delta.y,
        MouseScrollUnit::Pixel => mouse_scroll.delta.y / SCROLL_PIXELS_PER_NOTCH,
    };

    if let Err(err) = camera.set_zoom_target(notches as f64) {
        warn!("Ignoring zoom input: {err}");
    }
}

/// Cursor movement since the previous frame of a drag, in window pixels.
pub fn cursor_drag_delta(previous: Option<Vec2>, current: Vec2) -> Option<DVec2> {
    let delta = current - previous?;
    (delta != Vec2::ZERO).then(|| delta.as_dvec2())
}

/// Handle middle mouse button drag for panning.
///
/// The view follows the cursor: the offset moves by the change in cursor
/// position between frames while the button is held.
fn camera_pan(
    mut contexts: EguiContexts,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut last_cursor: Local<Option<Vec2>>,
    mut camera: ResMut<CameraState>,
) {
    if !mouse_buttons.pressed(MouseButton::Middle) {
        *last_cursor = None;
        return;
    }
    let Some(cursor) = windows.single().ok().and_then(Window::cursor_position) else {
        *last_cursor = None;
        return;
    };
    if mouse_buttons.just_pressed(MouseButton::Middle) && pointer_over_ui(&mut contexts) {
        *last_cursor = None;
        return;
    }
    // Drags that started over the UI never get a previous position
    if last_cursor.is_none() && !mouse_buttons.just_pressed(MouseButton::Middle) {
        return;
    }

    let Some(delta) = cursor_drag_delta(last_cursor.replace(cursor), cursor) else {
        return;
    };
    if let Err(err) = camera.pan(delta) {
        warn!("Ignoring pan input: {err}");
    }
}

/// Apply [`ControlCommand::ResetOffset`] to the view.
pub fn apply_offset_commands(
    mut commands: MessageReader<ControlCommand>,
    mut camera: ResMut<CameraState>,
) {
    for command in commands.read() {
        if *command == ControlCommand::ResetOffset {
            camera.reset_offset();
            info!("View offset reset");
        }
    }
}

fn tick_camera(mut camera: ResMut<CameraState>) {
    camera.tick();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zoom_target_uses_notch_factor() {
        let mut camera = CameraState::default();
        let start = camera.target_scale();

        camera.set_zoom_target(1.0).unwrap();
        assert_relative_eq!(camera.target_scale(), start * 1.4, max_relative = 1e-12);

        camera.set_zoom_target(-2.0).unwrap();
        assert_relative_eq!(camera.target_scale(), start / 1.4, max_relative = 1e-12);
    }

    #[test]
    fn test_zoom_does_not_move_current_scale_until_tick() {
        let mut camera = CameraState::default();
        let start = camera.current_scale();
        camera.set_zoom_target(3.0).unwrap();
        assert_eq!(camera.current_scale(), start);

        camera.tick();
        assert!(camera.current_scale() > start);
    }

    #[test]
    fn test_tick_closes_ten_percent_of_gap() {
        let mut camera = CameraState::default();
        let start = camera.current_scale();
        camera.set_zoom_target(1.0).unwrap();
        let target = camera.target_scale();

        camera.tick();
        assert_relative_eq!(
            camera.current_scale(),
            start + (target - start) * 0.1,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zoom_target_is_clamped() {
        let mut camera = CameraState::default();
        camera.set_zoom_target(1000.0).unwrap();
        assert_eq!(camera.target_scale(), camera.config().max_scale);
        camera.set_zoom_target(-5000.0).unwrap();
        assert_eq!(camera.target_scale(), camera.config().min_scale);
        assert!(camera.target_scale() > 0.0);
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let mut camera = CameraState::default();
        let before = camera.clone();

        assert!(camera.set_zoom_target(f64::NAN).is_err());
        assert!(camera.set_zoom_target(f64::INFINITY).is_err());
        assert!(camera.pan(DVec2::new(f64::NAN, 0.0)).is_err());
        assert!(camera.pan(DVec2::new(0.0, f64::NEG_INFINITY)).is_err());

        assert_eq!(camera.target_scale(), before.target_scale());
        assert_eq!(camera.offset(), before.offset());
    }

    #[test]
    fn test_pan_accumulates_and_resets() {
        let mut camera = CameraState::default();
        camera.pan(DVec2::new(10.0, -4.0)).unwrap();
        camera.pan(DVec2::new(2.5, 1.0)).unwrap();
        assert_eq!(camera.offset(), DVec2::new(12.5, -3.0));

        camera.reset_offset();
        assert_eq!(camera.offset(), DVec2::ZERO);
    }

    #[test]
    fn test_world_to_screen() {
        let mut camera = CameraState::default();
        let center = DVec2::new(640.0, 360.0);

        let one_au = DVec2::new(AU_TO_METERS, 0.0);
        let screen = camera.world_to_screen(one_au, center);
        assert_relative_eq!(screen.x, 890.0, max_relative = 1e-12);
        assert_relative_eq!(screen.y, 360.0);

        camera.pan(DVec2::new(5.0, 7.0)).unwrap();
        let origin = camera.world_to_screen(DVec2::ZERO, center);
        assert_eq!(origin, DVec2::new(645.0, 367.0));
    }

    #[test]
    fn test_inverted_scale_bounds_fall_back_to_default() {
        let config = CameraConfig {
            min_scale: 1.0,
            max_scale: 0.5,
            ..CameraConfig::default()
        };
        assert!(matches!(config.validate(), Err(CameraError::InvalidConfig { .. })));

        let mut camera = CameraState::new(config);
        assert_eq!(camera.config().max_scale, CameraConfig::default().max_scale);
        // Clamping with the fallback bounds cannot panic
        camera.set_zoom_target(1.0).unwrap();
        assert!(camera.target_scale() > 0.0);
    }

    #[test]
    fn test_zero_min_scale_keeps_scale_positive() {
        let config = CameraConfig {
            min_scale: 0.0,
            ..CameraConfig::default()
        };
        assert!(config.validate().is_err());

        let mut camera = CameraState::new(config);
        camera.set_zoom_target(-1.0e6).unwrap();
        assert_eq!(camera.target_scale(), camera.config().min_scale);
        assert!(camera.target_scale() > 0.0);
        for _ in 0..500 {
            assert!(camera.tick() > 0.0);
        }
    }

    #[test]
    fn test_invalid_camera_config_fields_rejected() {
        let bad = [
            CameraConfig { initial_scale: -1.0, ..CameraConfig::default() },
            CameraConfig { zoom_factor_per_notch: 0.0, ..CameraConfig::default() },
            CameraConfig { smoothing: 0.0, ..CameraConfig::default() },
            CameraConfig { smoothing: 1.5, ..CameraConfig::default() },
            CameraConfig { max_scale: f64::NAN, ..CameraConfig::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
        assert!(CameraConfig::default().validate().is_ok());
    }

    #[test]
    fn test_cursor_drag_delta() {
        assert_eq!(cursor_drag_delta(None, Vec2::new(5.0, 5.0)), None);
        assert_eq!(cursor_drag_delta(Some(Vec2::new(5.0, 5.0)), Vec2::new(5.0, 5.0)), None);
        assert_eq!(
            cursor_drag_delta(Some(Vec2::new(100.0, 40.0)), Vec2::new(112.5, 30.0)),
            Some(DVec2::new(12.5, -10.0))
        );
    }

    #[test]
    fn test_zoom_ratio_starts_at_one() {
        let camera = CameraState::default();
        assert_relative_eq!(camera.zoom_ratio(), 1.0);
    }
}
