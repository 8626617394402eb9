use crate::complex::{Complex, Fold};
use crate::{FractalParameters, FractalResult};

/// Starting value of the running minimum radius.
pub const MIN_RADIUS_SENTINEL: f32 = f32::MAX;

/// Loop state shared by both iterators.
struct EscapeState {
    iteration: u32,
    sqr_distance: f32,
    min_radius: f32,
}

impl EscapeState {
    fn new() -> Self {
        Self {
            iteration: 0,
            sqr_distance: 0.0,
            min_radius: MIN_RADIUS_SENTINEL,
        }
    }

    fn running(&self, params: &FractalParameters) -> bool {
        self.iteration < params.iteration_depth && self.sqr_distance <= params.sqr_escape_radius
    }

    /// Records the squared distance of `z`, optionally blended towards the
    /// leaf term `|re² - im²|`, and advances the iteration count.
    fn record(&mut self, z: Complex, leaf_effect: f32) -> f32 {
        let re2 = z.re * z.re;
        let im2 = z.im * z.im;
        let mut sqr_distance = re2 + im2;

        if leaf_effect > 0.0 {
            sqr_distance = mix(sqr_distance, (re2 - im2).abs(), leaf_effect);
        }

        self.sqr_distance = sqr_distance;
        self.min_radius = self.min_radius.min(sqr_distance);
        self.iteration += 1;
        sqr_distance
    }

    fn finish(self, z: Complex) -> FractalResult {
        FractalResult {
            iteration: self.iteration,
            decomposition_sign: decomposition_sign(z.im),
            sqr_distance: self.sqr_distance,
            min_radius: self.min_radius,
        }
    }
}

/// Box-fold ("mandelbox") escape-time iteration.
///
/// Each step box-folds the state, measures it, sphere-folds it against the
/// squared box radii using that measurement, then scales by `box_ratio` and
/// adds `c`.
pub fn mandelbox(params: &FractalParameters) -> FractalResult {
    let mut state = EscapeState::new();
    let mut z = params.z;

    while state.running(params) {
        z = z.box_fold();
        let sqr_distance = state.record(z, params.leaf_effect);
        z = z.sphere_fold(sqr_distance, params.sqr_box_min_radius, params.sqr_box_radius);
        z = z * params.box_ratio + params.c;
    }
    state.finish(z)
}

/// Power ("mandelbrot") escape-time iteration: `z = z^lobes + c`.
///
/// Squaring is used whenever the real part of `lobes` is exactly 2.
pub fn mandelbrot(params: &FractalParameters) -> FractalResult {
    let mut state = EscapeState::new();
    let mut z = params.z;
    let fast_square = params.lobes.re == 2.0;

    while state.running(params) {
        z = if fast_square {
            z * z
        } else if z.norm_sqr() == 0.0 {
            // Zero raised to any lobe count stays zero.
            z
        } else {
            z.powc(params.lobes)
        };
        z = z + params.c;
        state.record(z, params.leaf_effect);
    }
    state.finish(z)
}

/// `sign(-imag)` quantized to -1, 0 or 1. NaN maps to 0.
fn decomposition_sign(imag: f32) -> i32 {
    if imag < 0.0 {
        1
    } else if imag > 0.0 {
        -1
    } else {
        0
    }
}

fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
