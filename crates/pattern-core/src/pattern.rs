use glam::{Vec2, Vec3};

use crate::billow::billow;
use crate::coloring::{exterior_coloring, interior_coloring, ExteriorMethod, InteriorMethod};
use crate::fractal::{mandelbox, mandelbrot};
use crate::octaves::{fbm, turbulence, waves};
use crate::warp::implode;
use crate::{
    BillowParameters, Complex, FractalParameters, FractalResult, NoiseParameters, NoiseSource,
    WaveParameters,
};

/// One shading sample handed over by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: Vec3,
    pub time: f32,
    /// Footprint of the sample, added to the generator's own filter width.
    pub filter_width: f32,
}

impl Sample {
    pub fn new(position: Vec3, time: f32) -> Self {
        Self {
            position,
            time,
            filter_width: 0.0,
        }
    }
}

/// Which term of the iteration the sample position drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalMode {
    /// Sample is the constant term, iteration starts from the parameters' `z`.
    Mandelbrot,
    /// Sample is the starting state, the parameters' `c` is the constant.
    Julia,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalColoring {
    pub interior: InteriorMethod,
    pub exterior: ExteriorMethod,
    /// Scale applied to the decomposition sign before it offsets the mapping.
    pub decomposition: f32,
}

impl Default for FractalColoring {
    fn default() -> Self {
        Self {
            interior: InteriorMethod::Flat,
            exterior: ExteriorMethod::IterationRatio,
            decomposition: 0.0,
        }
    }
}

/// The algorithm behind a pattern together with its settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Generator {
    Turbulence(NoiseParameters),
    Fbm(NoiseParameters),
    Waves(WaveParameters),
    Billow(BillowParameters),
    Mandelbox {
        params: FractalParameters,
        mode: FractalMode,
        coloring: FractalColoring,
    },
    Mandelbrot {
        params: FractalParameters,
        mode: FractalMode,
        coloring: FractalColoring,
    },
}

/// A generator plus the optional implode pre-pass on the sample's x/y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pattern {
    pub generator: Generator,
    pub implode: f32,
    pub implode_center: Vec2,
}

impl Pattern {
    pub fn new(generator: Generator) -> Self {
        Self {
            generator,
            implode: 0.0,
            implode_center: Vec2::new(0.5, 0.5),
        }
    }

    pub fn with_implode(mut self, amount: f32, center: Vec2) -> Self {
        self.implode = amount;
        self.implode_center = center;
        self
    }

    /// Evaluates the pattern for one sample. Pure: safe to call from any
    /// number of threads with a shared noise source.
    pub fn evaluate<N: NoiseSource + ?Sized>(&self, noise: &N, sample: &Sample) -> f32 {
        let (x, y) = implode(
            self.implode,
            self.implode_center,
            sample.position.x,
            sample.position.y,
        );
        let position = Vec3::new(x, y, sample.position.z);

        match &self.generator {
            Generator::Turbulence(params) => {
                turbulence(noise, position, sample.time, &widen(params, sample))
            }
            Generator::Fbm(params) => fbm(noise, position, sample.time, &widen(params, sample)),
            Generator::Waves(params) => waves(noise, position, sample.time, params),
            Generator::Billow(params) => billow(noise, position, sample.time, params),
            Generator::Mandelbox {
                params,
                mode,
                coloring,
            } => {
                let params = seed_fractal(params, *mode, x, y);
                color_fractal(&params, &mandelbox(&params), coloring)
            }
            Generator::Mandelbrot {
                params,
                mode,
                coloring,
            } => {
                let params = seed_fractal(params, *mode, x, y);
                color_fractal(&params, &mandelbrot(&params), coloring)
            }
        }
    }
}

fn widen(params: &NoiseParameters, sample: &Sample) -> NoiseParameters {
    NoiseParameters {
        filter_width: params.filter_width + sample.filter_width,
        ..*params
    }
}

fn seed_fractal(params: &FractalParameters, mode: FractalMode, x: f32, y: f32) -> FractalParameters {
    let point = Complex::new(x, y);
    match mode {
        FractalMode::Mandelbrot => FractalParameters { c: point, ..*params },
        FractalMode::Julia => FractalParameters { z: point, ..*params },
    }
}

/// Picks interior or exterior coloring depending on whether the orbit left
/// the escape radius.
fn color_fractal(
    params: &FractalParameters,
    result: &FractalResult,
    coloring: &FractalColoring,
) -> f32 {
    let binary_decomposition = result.decomposition_sign as f32 * coloring.decomposition;

    if result.sqr_distance > params.sqr_escape_radius {
        exterior_coloring(
            result.iteration,
            params.iteration_depth,
            coloring.exterior,
            params.lobes.re,
            result.sqr_distance,
            result.min_radius,
            params.sqr_escape_radius,
            binary_decomposition,
        )
    } else {
        interior_coloring(
            result.iteration,
            params.iteration_depth,
            coloring.interior,
            result.min_radius,
            params.sqr_escape_radius.sqrt(),
            binary_decomposition,
        )
    }
}
