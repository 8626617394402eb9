//! Maps an escape-time result to a scalar in [0, 1], offset by the binary
//! decomposition term.
//!
//! Reference: "On Smooth Fractal Coloring Techniques", Jussi Harkonen.

use std::f32::consts::LN_2;

/// Coloring of points that never escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteriorMethod {
    /// Constant 0. Never receives the decomposition offset.
    Flat,
    /// `iteration / iteration_depth`.
    IterationRatio,
    /// Approximate heuristic on the minimum radius. It does not reproduce any
    /// reference renderer and is kept as a starting point.
    MinimumRadius,
    /// Reserved selectors (3 and 4) and anything unknown.
    Unsupported(i32),
}

impl From<i32> for InteriorMethod {
    fn from(index: i32) -> Self {
        match index {
            0 => InteriorMethod::Flat,
            1 => InteriorMethod::IterationRatio,
            2 => InteriorMethod::MinimumRadius,
            other => InteriorMethod::Unsupported(other),
        }
    }
}

impl InteriorMethod {
    fn index(self) -> i32 {
        match self {
            InteriorMethod::Flat => 0,
            InteriorMethod::IterationRatio => 1,
            InteriorMethod::MinimumRadius => 2,
            InteriorMethod::Unsupported(index) => index,
        }
    }
}

/// Coloring of escaped points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExteriorMethod {
    /// `iteration / iteration_depth`.
    IterationRatio,
    /// Continuous (double logarithm) iteration count.
    SmoothIteration,
    /// Approximate heuristic on the minimum radius; drifts at high depths.
    MinimumRadius,
    /// Final distance scaled by the escape radius.
    Distance,
    Unsupported(i32),
}

impl From<i32> for ExteriorMethod {
    fn from(index: i32) -> Self {
        match index {
            0 => ExteriorMethod::IterationRatio,
            1 => ExteriorMethod::SmoothIteration,
            2 => ExteriorMethod::MinimumRadius,
            3 => ExteriorMethod::Distance,
            other => ExteriorMethod::Unsupported(other),
        }
    }
}

/// `iteration / depth`, or 0 when there is no depth to divide by.
fn iteration_ratio(iteration: u32, iteration_depth: u32) -> f32 {
    if iteration_depth == 0 {
        return 0.0;
    }
    iteration as f32 / iteration_depth as f32
}

/// Clamps to [0, 1], sending NaN to 0.
fn saturate(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

pub fn interior_coloring(
    iteration: u32,
    iteration_depth: u32,
    method: InteriorMethod,
    min_radius: f32,
    escape_radius: f32,
    binary_decomposition: f32,
) -> f32 {
    let mapping = match method {
        InteriorMethod::Flat => 0.0,
        InteriorMethod::IterationRatio => iteration_ratio(iteration, iteration_depth),
        InteriorMethod::MinimumRadius => {
            1.0 - min_radius.powf(0.25) * escape_radius.powf(0.25) / LN_2
        }
        InteriorMethod::Unsupported(index) => {
            log::trace!("interior coloring method {index} unsupported, mapping passes through");
            0.0
        }
    };
    let mapping = saturate(mapping);

    // Only non-flat methods carry the decomposition offset.
    if method.index() > 0 {
        mapping + binary_decomposition
    } else {
        mapping
    }
}

#[allow(clippy::too_many_arguments)]
pub fn exterior_coloring(
    iteration: u32,
    iteration_depth: u32,
    method: ExteriorMethod,
    lobes: f32,
    sqr_distance: f32,
    min_radius: f32,
    sqr_escape_radius: f32,
    binary_decomposition: f32,
) -> f32 {
    let depth = iteration_depth as f32;
    let mapping = match method {
        ExteriorMethod::IterationRatio => iteration_ratio(iteration, iteration_depth),
        ExteriorMethod::SmoothIteration => {
            let ln_r = sqr_distance.ln() / 2.0;
            let ln_m = sqr_escape_radius.ln() / 2.0;
            let base = if lobes != 1.0 { (lobes + 1.0).ln() } else { LN_2 };
            (iteration as f32 + 1.0 + (ln_m / ln_r).ln() / base) / depth
        }
        ExteriorMethod::MinimumRadius => {
            (sqr_escape_radius.sqrt() - min_radius.sqrt()) / depth
        }
        ExteriorMethod::Distance => sqr_distance.sqrt() / depth * sqr_escape_radius.sqrt(),
        ExteriorMethod::Unsupported(index) => {
            log::trace!("exterior coloring method {index} unsupported");
            0.0
        }
    };
    saturate(mapping) + binary_decomposition
}
