// Shared tuning constants for the page controller and the background scene.

// Breakpoints (CSS pixels)
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // menu auto-close, cursor and scene density cut over here
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0; // navbar switches to its "scrolled" shade past this

// Navbar shades: [theme][scrolled]
pub const NAV_BG_LIGHT: &str = "rgba(248, 248, 248, 0.95)";
pub const NAV_BG_LIGHT_SCROLLED: &str = "rgba(248, 248, 248, 0.98)";
pub const NAV_BG_DARK: &str = "rgba(26, 26, 26, 0.95)";
pub const NAV_BG_DARK_SCROLLED: &str = "rgba(26, 26, 26, 0.98)";

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;
pub const FEATURE_ICON_STAGGER_MS: u32 = 200;

// Brand color as exposed by the stylesheet
pub const PRIMARY_YELLOW: &str = "var(--primary-yellow)";

// Stat counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_SCALE_BOOST: f64 = 0.1; // peak extra scale at the end of the ease
pub const COUNTER_HUE_START: f64 = 45.0;
pub const COUNTER_HUE_SPAN: f64 = 15.0;

// Smooth-scroll entrance pulse
pub const SCROLL_PULSE_MS: u32 = 600;
pub const SCROLL_PULSE_ANIMATION: &str = "bounce-in 0.6s ease";

// Parallax (px of translation per px scrolled)
pub const HERO_PARALLAX_FACTOR: f64 = 0.1;
pub const STATS_PARALLAX_FACTOR: f64 = -0.05;

// Custom cursor
pub const CURSOR_SMOOTHING: f64 = 0.1; // fraction of the remaining distance covered per frame
pub const CURSOR_HOVER_TRANSFORM: &str = "scale(1.5)";
pub const CURSOR_HOVER_COLOR: &str = "#ff6b35";
pub const CURSOR_IDLE_COLOR: &str = PRIMARY_YELLOW;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_POINTER_REACH: f32 = 2.0; // world units the camera drifts at full pointer deflection
pub const CAMERA_SMOOTHING: f32 = 0.05;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Palette (0xRRGGBB)
pub const INDIGO: u32 = 0x6366f1;
pub const AMBER: u32 = 0xfcb900;
pub const ORANGE: u32 = 0xff6b35;

// Cube
pub const CUBE_SIZE: f32 = 2.0;
pub const CUBE_OPACITY: f32 = 0.6;
pub const CUBE_SPIN: [f32; 2] = [0.005, 0.01]; // base x/y increment per frame
pub const CUBE_POINTER_SPIN: f32 = 0.01;

// Particles
pub const PARTICLE_RADIUS: f32 = 0.05;
pub const PARTICLE_SEGMENTS: u32 = 8;
pub const PARTICLE_OPACITY: f32 = 0.4;
pub const PARTICLE_VOLUME: f32 = 20.0;
pub const PARTICLE_SPIN: f32 = 0.01;
pub const PARTICLE_BOB_FREQ: f32 = 0.001; // per millisecond
pub const PARTICLE_BOB_AMPLITUDE: f32 = 0.01;

// Polyhedra
pub const SHAPE_VOLUME: f32 = 15.0;
pub const SHAPE_OPACITY: f32 = 0.3;
pub const TETRAHEDRON_RADIUS: f32 = 0.5;
pub const OCTAHEDRON_RADIUS: f32 = 0.4;
pub const ICOSAHEDRON_RADIUS: f32 = 0.3;
pub const SHAPE_SPIN: [f32; 3] = [0.008, 0.012, 0.005];

// Lines
pub const LINE_VOLUME: f32 = 15.0;
pub const LINE_OPACITY: f32 = 0.2;
pub const LINE_SPIN: f32 = 0.003;

// Object counts: (wide, narrow)
pub const PARTICLE_COUNTS: (usize, usize) = (60, 30);
pub const SHAPE_COUNTS: (usize, usize) = (10, 5);
pub const LINE_COUNTS: (usize, usize) = (15, 8);
