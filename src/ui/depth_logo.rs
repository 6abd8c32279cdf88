//! Parallax depth logo: render-mode fallback and pointer easing.
//!
//! The animated logo displaces the runtime icon by the runtime depth map
//! following the pointer. Whenever anything in the graphics setup is
//! missing the page silently shows a plain image instead.

pub const RUNTIME_ICON_SRC: &str = "/icon_runtime.png";
pub const FALLBACK_ICON_SRC: &str = "/icon.png";
pub const RUNTIME_DEPTH_SRC: &str = "/icon_depthmap_runtime.png";

/// Share of the remaining distance the pointer covers each frame
pub const LERP_FACTOR: f32 = 0.08;

/// Tilt at full pointer deflection, in degrees
pub const MAX_TILT_DEG: f32 = 7.0;

/// Below this the animation loop stops
pub const SETTLE_EPSILON: f32 = 0.0008;

/// Viewport-normalized pointer positions are scaled by this before easing
pub const POINTER_RANGE: f32 = 0.55;

/// Pointer inactivity after which the logo drifts back to rest
pub const IDLE_RESET_MS: u32 = 220;

/// Environment hints that rule out the animated logo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionPreferences {
    pub prefers_reduced_motion: bool,
    pub coarse_pointer: bool,
    pub max_touch_points: u32,
}

pub fn should_animate(prefs: &MotionPreferences) -> bool {
    !prefs.prefers_reduced_motion && !prefs.coarse_pointer && prefs.max_touch_points == 0
}

/// Outcome of each graphics setup stage, in the order the stages run.
///
/// A stage is only attempted once every earlier stage succeeded, so later
/// fields are meaningless after the first `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsSetup {
    pub context_created: bool,
    pub program_linked: bool,
    pub buffers_allocated: bool,
    /// Icon and depth images fetched
    pub textures_loaded: bool,
    /// Images uploaded as textures and bound to the shader
    pub textures_bound: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoRenderMode {
    Animated,
    Static { src: &'static str },
}

/// Source of the plain logo image. A runtime icon that fails to load is
/// swapped for the bundled one.
pub fn static_icon_src(runtime_icon_loaded: bool) -> &'static str {
    if runtime_icon_loaded {
        RUNTIME_ICON_SRC
    } else {
        FALLBACK_ICON_SRC
    }
}

pub fn render_mode(
    prefs: &MotionPreferences,
    setup: &GraphicsSetup,
    runtime_icon_loaded: bool,
) -> LogoRenderMode {
    let fallback = LogoRenderMode::Static {
        src: static_icon_src(runtime_icon_loaded),
    };
    if !should_animate(prefs) {
        return fallback;
    }
    if !(setup.context_created && setup.program_linked && setup.buffers_allocated) {
        return fallback;
    }
    if !setup.textures_loaded {
        // The runtime icon itself may be what failed to load
        return LogoRenderMode::Static {
            src: FALLBACK_ICON_SRC,
        };
    }
    if !setup.textures_bound {
        return fallback;
    }
    LogoRenderMode::Animated
}

/// Pointer position eased toward a target, both in tilt units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    pub current: (f32, f32),
    pub target: (f32, f32),
    idle_ms: u32,
}

impl PointerTracker {
    /// Pointer moved to viewport-normalized `(x, y)` in [-1, 1].
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = (
            x.clamp(-1.0, 1.0) * POINTER_RANGE,
            y.clamp(-1.0, 1.0) * POINTER_RANGE,
        );
        self.idle_ms = 0;
    }

    /// Convert a pointer position in CSS pixels and aim at it.
    pub fn pointer_moved(&mut self, client: (f32, f32), viewport: (f32, f32)) {
        if viewport.0 <= 0.0 || viewport.1 <= 0.0 {
            return;
        }
        self.set_target(
            client.0 / viewport.0 * 2.0 - 1.0,
            client.1 / viewport.1 * 2.0 - 1.0,
        );
    }

    /// Pointer left the logo, the window blurred, or the page was hidden.
    pub fn reset(&mut self) {
        self.target = (0.0, 0.0);
    }

    /// Account for time without pointer movement. Returns true when the
    /// target was reset because the pointer went idle.
    pub fn idle(&mut self, elapsed_ms: u32) -> bool {
        if self.target == (0.0, 0.0) {
            return false;
        }
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms >= IDLE_RESET_MS {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Advance one animation frame. Returns false once the logo has settled.
    pub fn step(&mut self) -> bool {
        self.current.0 += (self.target.0 - self.current.0) * LERP_FACTOR;
        self.current.1 += (self.target.1 - self.current.1) * LERP_FACTOR;

        let distance =
            (self.target.0 - self.current.0).abs() + (self.target.1 - self.current.1).abs();
        let settling = self.current.0.abs() + self.current.1.abs();
        distance > SETTLE_EPSILON || settling > SETTLE_EPSILON
    }

    /// `(rotate_x, rotate_y)` in degrees for the wrapper transform.
    pub fn tilt(&self) -> (f32, f32) {
        (-self.current.1 * MAX_TILT_DEG, self.current.0 * MAX_TILT_DEG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn working_setup() -> GraphicsSetup {
        GraphicsSetup {
            context_created: true,
            program_linked: true,
            buffers_allocated: true,
            textures_loaded: true,
            textures_bound: true,
        }
    }

    fn runtime_icon() -> LogoRenderMode {
        LogoRenderMode::Static {
            src: RUNTIME_ICON_SRC,
        }
    }

    fn bundled_icon() -> LogoRenderMode {
        LogoRenderMode::Static {
            src: FALLBACK_ICON_SRC,
        }
    }

    #[test]
    fn test_should_animate_respects_preferences() {
        assert!(should_animate(&MotionPreferences::default()));
        assert!(!should_animate(&MotionPreferences {
            prefers_reduced_motion: true,
            ..Default::default()
        }));
        assert!(!should_animate(&MotionPreferences {
            coarse_pointer: true,
            ..Default::default()
        }));
        assert!(!should_animate(&MotionPreferences {
            max_touch_points: 5,
            ..Default::default()
        }));
    }

    #[test]
    fn test_render_mode_animated_when_everything_works() {
        let mode = render_mode(&MotionPreferences::default(), &working_setup(), true);
        assert_eq!(mode, LogoRenderMode::Animated);
    }

    #[test]
    fn test_render_mode_falls_back_on_setup_failure() {
        let prefs = MotionPreferences::default();
        for setup in [
            GraphicsSetup {
                context_created: false,
                ..working_setup()
            },
            GraphicsSetup {
                program_linked: false,
                ..working_setup()
            },
            GraphicsSetup {
                buffers_allocated: false,
                ..working_setup()
            },
            GraphicsSetup {
                textures_bound: false,
                ..working_setup()
            },
        ] {
            assert_eq!(render_mode(&prefs, &setup, true), runtime_icon());
        }
    }

    #[test]
    fn test_early_stage_failure_never_reaches_texture_loading() {
        let setup = GraphicsSetup {
            context_created: false,
            program_linked: false,
            buffers_allocated: false,
            textures_loaded: false,
            textures_bound: false,
        };
        assert_eq!(
            render_mode(&MotionPreferences::default(), &setup, true),
            runtime_icon()
        );

        let setup = GraphicsSetup {
            buffers_allocated: false,
            textures_loaded: false,
            textures_bound: false,
            ..working_setup()
        };
        assert_eq!(
            render_mode(&MotionPreferences::default(), &setup, true),
            runtime_icon()
        );
    }

    #[test]
    fn test_texture_load_failure_uses_bundled_icon() {
        let setup = GraphicsSetup {
            textures_loaded: false,
            textures_bound: false,
            ..working_setup()
        };
        assert_eq!(
            render_mode(&MotionPreferences::default(), &setup, true),
            bundled_icon()
        );
    }

    #[test]
    fn test_reduced_motion_swaps_in_bundled_icon_when_runtime_icon_fails() {
        let prefs = MotionPreferences {
            prefers_reduced_motion: true,
            ..Default::default()
        };
        assert_eq!(render_mode(&prefs, &working_setup(), true), runtime_icon());
        assert_eq!(render_mode(&prefs, &working_setup(), false), bundled_icon());

        let broken = GraphicsSetup {
            context_created: false,
            ..working_setup()
        };
        assert_eq!(
            render_mode(&MotionPreferences::default(), &broken, false),
            bundled_icon()
        );
    }

    #[test]
    fn test_runtime_sources_match_generated_assets() {
        let file_name = |path: std::path::PathBuf| {
            format!("/{}", path.file_name().unwrap().to_string_lossy())
        };
        assert_eq!(RUNTIME_ICON_SRC, file_name(crate::paths::icon_output()));
        assert_eq!(RUNTIME_DEPTH_SRC, file_name(crate::paths::depth_output()));
    }

    #[test]
    fn test_pointer_eases_and_settles() {
        let mut tracker = PointerTracker::default();
        tracker.set_target(1.0, -1.0);
        assert!(tracker.step());
        assert!((tracker.current.0 - POINTER_RANGE * LERP_FACTOR).abs() < 1e-6);

        let (rotate_x, rotate_y) = tracker.tilt();
        assert!(rotate_y > 0.0);
        assert!(rotate_x > 0.0);

        tracker.reset();
        let mut frames = 0;
        while tracker.step() {
            frames += 1;
            assert!(frames < 1_000, "pointer never settled");
        }
        assert!(tracker.current.0.abs() <= SETTLE_EPSILON);
    }

    #[test]
    fn test_target_is_scaled_and_clamped() {
        let mut tracker = PointerTracker::default();
        tracker.set_target(3.0, -2.0);
        assert_eq!(tracker.target, (POINTER_RANGE, -POINTER_RANGE));

        // Full deflection stays well short of the maximum tilt
        for _ in 0..1_000 {
            tracker.step();
        }
        let (_, rotate_y) = tracker.tilt();
        assert!((rotate_y - POINTER_RANGE * MAX_TILT_DEG).abs() < 0.01);
    }

    #[test]
    fn test_pointer_moved_normalizes_viewport_position() {
        let mut tracker = PointerTracker::default();
        tracker.pointer_moved((1000.0, 0.0), (1000.0, 800.0));
        assert_eq!(tracker.target, (POINTER_RANGE, -POINTER_RANGE));

        tracker.pointer_moved((500.0, 400.0), (1000.0, 800.0));
        assert_eq!(tracker.target, (0.0, 0.0));

        tracker.pointer_moved((10.0, 10.0), (0.0, 0.0));
        assert_eq!(tracker.target, (0.0, 0.0));
    }

    #[test]
    fn test_idle_pointer_resets_target() {
        let mut tracker = PointerTracker::default();
        tracker.set_target(1.0, 1.0);
        assert!(!tracker.idle(IDLE_RESET_MS - 1));
        assert_eq!(tracker.target, (POINTER_RANGE, POINTER_RANGE));
        assert!(tracker.idle(1));
        assert_eq!(tracker.target, (0.0, 0.0));

        // Movement restarts the idle timer
        tracker.set_target(0.5, 0.5);
        tracker.idle(200);
        tracker.set_target(0.5, 0.5);
        assert!(!tracker.idle(200));
    }
}
