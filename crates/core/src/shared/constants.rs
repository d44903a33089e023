use image::Rgb;

/// Boundaries enclosing this many square pixels or fewer are treated as noise.
pub const MIN_DIE_AREA: f64 = 1000.0;

/// Polygon approximation tolerance, as a fraction of the boundary perimeter.
pub const APPROX_EPSILON_FRACTION: f64 = 0.04;

pub const DIE_VERTEX_COUNT: usize = 4;

pub const HIGHLIGHT: Rgb<u8> = Rgb([0, 255, 0]);

pub const OUTLINE_THICKNESS: u32 = 3;
pub const LABEL_SCALE: f32 = 1.75;
pub const LABEL_THICKNESS: u32 = 3;

/// Baseline-left origin of the `Sum: <n>` label.
pub const SUM_LABEL_ORIGIN: (i32, i32) = (25, 50);
pub const SUM_LABEL_THICKNESS: u32 = 4;

pub const OUTPUT_PREFIX: &str = "output_";
