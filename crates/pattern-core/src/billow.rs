use std::f32::consts::TAU;

use glam::Vec3;

use crate::{BillowParameters, NoiseSource, LATTICE_SIZE};

/// Effective blob densities below this produce no blobs at all.
const MIN_BLOB_DENSITY: f32 = 1.0e-4;

/// Position drift applied before every octave so layers do not line up.
const OCTAVE_DRIFT_X: f32 = 0.021;
const OCTAVE_DRIFT_Y: f32 = 0.33;

/// Blob falloff kernel, applied to the squared normalized distance `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Falloff {
    /// `1 - sqrt(d)`: linear in radius.
    Linear,
    /// `1 + d * (-3 + 2 * sqrt(d))`: cubic smoothstep in radius.
    Smooth,
    /// `1 - d`.
    Fast,
    /// Distance scaled by 1.1 passes through below 1 and drops ten times
    /// faster beyond it, giving a hollow rim.
    Bubble,
}

impl Falloff {
    /// Kernel for a host's integer selector; `None` for unknown selectors.
    pub fn from_index(index: i32) -> Option<Falloff> {
        match index {
            0 => Some(Falloff::Linear),
            1 => Some(Falloff::Smooth),
            2 => Some(Falloff::Fast),
            3 => Some(Falloff::Bubble),
            _ => None,
        }
    }

    fn apply(self, d: f32) -> f32 {
        match self {
            Falloff::Linear => 1.0 - d.sqrt(),
            Falloff::Smooth => 1.0 + d * (-3.0 + 2.0 * d.sqrt()),
            Falloff::Fast => 1.0 - d,
            Falloff::Bubble => {
                let d = d * 1.1;
                if d > 1.0 {
                    1.0 - (d - 1.0) * 10.0
                } else {
                    d
                }
            }
        }
    }
}

/// One octave of cellular blob noise on the periodic 20×20 lattice.
///
/// `x` and `y` are in lattice periods: the pattern repeats every 1.0 in both
/// axes. Every cell owns one blob whose centre circles its cell over time;
/// the query sums the falloff of all blobs within reach in the 3×3
/// neighbourhood.
pub fn billow_cell<N: NoiseSource + ?Sized>(
    noise: &N,
    x: f32,
    y: f32,
    time: f32,
    params: &BillowParameters,
) -> f32 {
    let size_randomness = params.randomness * 2.0;
    let blob_density = (2.0 - size_randomness).max(params.density);

    if blob_density < MIN_BLOB_DENSITY {
        log::trace!("billow blob density {blob_density} below threshold");
        return 0.0;
    }

    let lattice = LATTICE_SIZE as f32;
    let lattice_x = x.rem_euclid(1.0) * lattice;
    let lattice_y = y.rem_euclid(1.0) * lattice;

    let cell_x = lattice_x.fract();
    let cell_y = lattice_y.fract();

    // rem_euclid can round up to exactly 1.0; keep the index on the lattice.
    let x_cell = (lattice_x as i32).rem_euclid(LATTICE_SIZE);
    let y_cell = (lattice_y as i32).rem_euclid(LATTICE_SIZE);

    let blob_size = 2.0 / blob_density;
    let jittering = 0.5 * size_randomness;
    let inv_spottyness = 1.0 - params.spottyness;
    let mut sum = 0.0;

    for dy in -1..=1 {
        let row = (y_cell + dy).rem_euclid(LATTICE_SIZE) * LATTICE_SIZE;

        for dx in -1..=1 {
            let index = ((x_cell + dx).rem_euclid(LATTICE_SIZE) + row) as u32;

            let pos_x = (time * 2.0 + TAU * noise.hash_sample(index)).sin() * jittering + 0.5;
            let pos_y = (time + TAU * noise.hash_sample(index + 1)).cos() * jittering + 0.5;

            let sx = cell_x - dx as f32 - pos_x;
            let sy = cell_y - dy as f32 - pos_y;
            let mut distance = blob_size * (sx * sx + sy * sy);

            if size_randomness != 0.0 {
                distance /= (noise.hash_sample(index + 2) + 1.0) * 0.5 * size_randomness
                    + (1.0 - size_randomness);
            }

            if distance < 1.0 {
                let mut falloff = params.falloff.apply(distance);
                if params.spottyness != 0.0 {
                    falloff *= params.spottyness * (noise.hash_sample(index + 3) + 1.0) + inv_spottyness;
                }
                sum += falloff;
            }
        }
    }
    sum
}

/// Multi-octave billow noise, normalized by the accumulated amplitude and
/// scaled by `gain`. Returns 0 when no octave runs.
pub fn billow<N: NoiseSource + ?Sized>(
    noise: &N,
    position: Vec3,
    time: f32,
    params: &BillowParameters,
) -> f32 {
    let lattice = LATTICE_SIZE as f32;
    let mut x = position.x / lattice;
    let mut y = position.y / lattice;
    let mut x_offset = 0.0;
    let mut y_offset = 0.0;

    let time_ratio = params.ratio.sqrt();
    let mut current_time = time;
    let mut amplitude = 1.0;
    let mut total_amplitude = 0.0;
    let mut sum = 0.0;

    for _ in 0..params.max_depth {
        if amplitude == 0.0 {
            break;
        }

        x_offset += OCTAVE_DRIFT_X;
        y_offset += OCTAVE_DRIFT_Y;

        let mut value = billow_cell(noise, x + x_offset, y + y_offset, current_time, params);
        if params.inflection {
            value = value.abs();
        }

        sum += amplitude * value;
        total_amplitude += amplitude;
        amplitude *= params.ratio;

        x *= params.frequency_ratio;
        y *= params.frequency_ratio;
        current_time *= time_ratio;
    }

    if total_amplitude == 0.0 {
        log::trace!("billow accumulated no amplitude");
        return 0.0;
    }
    params.gain * sum / total_amplitude
}
