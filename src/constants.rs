/// Front-end constants for the logo morph.
///
/// Engine tuning lives in `morph_core::MorphParams`; this module only holds
/// what the page wiring and the painter need.
// Element the host page renders for the animation
pub const CANVAS_ID: &str = "logo-canvas";

// Backing-store size of the drawing surface (pixels, square)
pub const CANVAS_SIZE_PX: u32 = 300;

// Logo states, in cycle order; the first one is shown at rest
pub const SHAPE_URLS: [&str; 3] = ["/ap-logo.svg", "/writing-logo.svg", "/dev-logo.svg"];

// Plain particle fill
pub const PARTICLE_FILL: &str = "black";

// Glow gradient: (stop offset, hue shift, lightness %, alpha share)
pub const GLOW_STOPS: [(f32, f32, f32, f32); 3] =
    [(0.0, 0.0, 50.0, 1.0), (0.6, 20.0, 70.0, 0.5), (1.0, -10.0, 40.0, 0.0)];

// Comet trail gradient colours (tail to head)
pub const TRAIL_TAIL_RGB: [u8; 3] = [50, 100, 255];
pub const TRAIL_MID_RGB: [u8; 3] = [100, 150, 255];
pub const TRAIL_HEAD_RGB: [u8; 3] = [150, 200, 255];
pub const TRAIL_MID_STOP: f32 = 0.4;
pub const TRAIL_MID_ALPHA: f32 = 0.3;

// Spark sprites
pub const SPARK_GLOW_RGB: [u8; 3] = [200, 220, 255];
pub const SPARK_EDGE_RGB: [u8; 3] = [100, 180, 255];
pub const SPARK_CORE_FILL: &str = "rgba(220, 240, 255, 0.9)";
pub const SPARK_GLOW_SCALE: f64 = 3.0; // glow radius in spark radii
