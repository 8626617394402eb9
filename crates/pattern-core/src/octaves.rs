use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::{NoiseParameters, NoiseSource, WaveParameters, EPSILON};

/// Hash indices reserved per wave octave.
const WAVE_SEED_STRIDE: u32 = 50;

// ---------------------------------------------------------------------------
// Turbulence
// ---------------------------------------------------------------------------

/// Sum of absolute filtered-noise octaves. Unbounded above.
pub fn turbulence<N: NoiseSource + ?Sized>(
    noise: &N,
    position: Vec3,
    time: f32,
    params: &NoiseParameters,
) -> f32 {
    let mut xyz = position;
    let mut amplitude = params.amplitude;
    let mut filter_width = params.filter_width;
    let mut current_time = time;
    let mut sum = 0.0;

    // The raw base lattice looks too regular; shift every octave off it.
    let perturbation = Vec3::splat(noise.unsigned_noise(params.lacunarity));

    for _ in 0..params.octaves {
        if amplitude == 0.0 {
            break;
        }

        let value = amplitude * noise.filtered_noise(xyz + perturbation, current_time, filter_width);
        sum += value.abs();

        amplitude *= params.ratio;
        xyz *= params.lacunarity;
        filter_width *= params.lacunarity;
        current_time *= params.lacunarity;
    }
    sum
}

// ---------------------------------------------------------------------------
// fBm
// ---------------------------------------------------------------------------

/// Layered signed noise remapped to [0, 1].
///
/// Each octave goes through `amplitude * 1.2 * (n - 0.1) + 0.05`; these are
/// fixed compatibility constants and the final value is
/// `clamp(sum * 0.5 + 0.5, 0, 1)`.
pub fn fbm<N: NoiseSource + ?Sized>(
    noise: &N,
    position: Vec3,
    time: f32,
    params: &NoiseParameters,
) -> f32 {
    let mut xyz = position;
    let mut amplitude = params.amplitude;
    let mut filter_width = params.filter_width;
    let mut current_time = time;
    let mut sum = 0.0;

    for _ in 0..params.octaves {
        if amplitude == 0.0 {
            break;
        }

        sum += amplitude * 1.2 * (noise.filtered_noise(xyz, current_time, filter_width) - 0.1) + 0.05;

        amplitude *= params.ratio;
        xyz *= params.lacunarity;
        filter_width *= params.lacunarity;
        current_time *= params.lacunarity;
    }
    (sum * 0.5 + 0.5).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Directional waves
// ---------------------------------------------------------------------------

/// Mean of `num_waves` planar cosine waves for one octave.
///
/// Wave `w` of octave `step` draws direction x, direction y and phase from
/// hash indices `step * 50 + w * 3 + {0, 1, 2}`. Directions shorter than
/// `EPSILON` contribute nothing.
pub fn cos_waves<N: NoiseSource + ?Sized>(
    noise: &N,
    position: Vec3,
    time: f32,
    step: u32,
    num_waves: u32,
) -> f32 {
    if num_waves == 0 {
        return 0.0;
    }

    let base = step.wrapping_mul(WAVE_SEED_STRIDE);
    let mut sum = 0.0;

    for wave in 0..num_waves {
        let seed = base.wrapping_add(wave.wrapping_mul(3));
        let x = noise.hash_sample(seed);
        let y = noise.hash_sample(seed.wrapping_add(1));
        let length = x.hypot(y);

        if length <= EPSILON {
            continue;
        }

        let phase = noise.hash_sample(seed.wrapping_add(2));
        sum += ((x / length) * position.x * TAU
            + (y / length) * position.y * TAU
            + phase * PI
            + time * PI)
            .cos();
    }
    sum / num_waves as f32
}

/// Multi-octave directional wave noise.
///
/// Position scales by `frequency_ratio` per octave and time by its square
/// root. With `inflection` the result is the sum of absolute octaves,
/// otherwise the signed sum remapped by `* 0.5 + 0.5`.
pub fn waves<N: NoiseSource + ?Sized>(
    noise: &N,
    position: Vec3,
    time: f32,
    params: &WaveParameters,
) -> f32 {
    let time_ratio = params.frequency_ratio.sqrt();
    let mut xyz = position;
    let mut amplitude = params.amplitude;
    let mut current_time = time;
    let mut sum = 0.0;

    for step in 0..params.max_depth {
        if amplitude == 0.0 {
            break;
        }

        let mut value = amplitude * cos_waves(noise, xyz, current_time, step, params.num_waves);
        if params.inflection {
            value = value.abs();
        }
        sum += value;

        amplitude *= params.ratio;
        xyz *= params.frequency_ratio;
        current_time *= time_ratio;
    }

    if params.inflection {
        sum
    } else {
        sum * 0.5 + 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Returns a fixed noise value and counts filtered-noise calls.
    struct ConstantNoise {
        value: f32,
        hash: f32,
        calls: AtomicU32,
    }

    impl ConstantNoise {
        fn new(value: f32) -> Self {
            Self { value, hash: 0.5, calls: AtomicU32::new(0) }
        }
    }

    impl NoiseSource for ConstantNoise {
        fn filtered_noise(&self, _: Vec3, _: f32, _: f32) -> f32 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.value
        }
        fn hash_sample(&self, _: u32) -> f32 {
            self.hash
        }
        fn unsigned_noise(&self, _: f32) -> f32 {
            0.25
        }
    }

    fn noise_params(amplitude: f32, octaves: u32) -> NoiseParameters {
        NoiseParameters {
            amplitude,
            octaves,
            ..NoiseParameters::default()
        }
    }

    // --- turbulence -----------------------------------------------------------

    #[test]
    fn turbulence_zero_octaves_is_zero() {
        let noise = ConstantNoise::new(0.7);
        assert_eq!(turbulence(&noise, Vec3::ONE, 0.0, &noise_params(1.0, 0)), 0.0);
    }

    #[test]
    fn turbulence_sums_absolute_octaves() {
        // |-0.5| * (1 + 0.5 + 0.25)
        let noise = ConstantNoise::new(-0.5);
        let params = NoiseParameters {
            ratio: 0.5,
            ..noise_params(1.0, 3)
        };
        let v = turbulence(&noise, Vec3::ZERO, 0.0, &params);
        assert!((v - 0.875).abs() < 1e-6, "got {v}");
    }

    #[test]
    fn turbulence_stops_at_zero_amplitude() {
        let noise = ConstantNoise::new(0.5);
        let params = NoiseParameters {
            ratio: 0.0,
            ..noise_params(1.0, 8)
        };
        let v = turbulence(&noise, Vec3::ZERO, 0.0, &params);
        assert!((v - 0.5).abs() < 1e-6, "got {v}");
        assert_eq!(noise.calls.load(Ordering::Relaxed), 1);
    }

    /// Noise equal to the sum of the sampled coordinates.
    struct CoordinateSum;

    impl NoiseSource for CoordinateSum {
        fn filtered_noise(&self, p: Vec3, _: f32, _: f32) -> f32 {
            p.x + p.y + p.z
        }
        fn hash_sample(&self, _: u32) -> f32 {
            0.0
        }
        fn unsigned_noise(&self, x: f32) -> f32 {
            x * 0.1
        }
    }

    #[test]
    fn turbulence_offsets_every_octave_position() {
        // offset = unsigned_noise(lacunarity 2) = 0.2 on every axis
        // octave 0: |0.1 + 3 * 0.2| = 0.7
        // octave 1: 0.5 * |0.2 + 3 * 0.2| = 0.4
        let params = NoiseParameters {
            lacunarity: 2.0,
            ratio: 0.5,
            ..noise_params(1.0, 2)
        };
        let v = turbulence(&CoordinateSum, Vec3::new(0.1, 0.0, 0.0), 0.0, &params);
        assert!((v - 1.1).abs() < 1e-5, "got {v}");
    }

    // --- fbm ------------------------------------------------------------------

    #[test]
    fn fbm_zero_octaves_is_half() {
        let noise = ConstantNoise::new(0.9);
        assert_eq!(fbm(&noise, Vec3::ONE, 0.0, &noise_params(1.0, 0)), 0.5);
    }

    #[test]
    fn fbm_single_octave_reference_value() {
        // (1 * 1.2 * (0.3 - 0.1) + 0.05) * 0.5 + 0.5 = 0.645
        let noise = ConstantNoise::new(0.3);
        let params = NoiseParameters {
            lacunarity: 3.7,
            ratio: 1.9,
            filter_width: 0.4,
            ..noise_params(1.0, 1)
        };
        let v = fbm(&noise, Vec3::new(1.0, 2.0, 3.0), 0.5, &params);
        assert!((v - 0.645).abs() < 1e-6, "got {v}");
    }

    #[test]
    fn fbm_zero_amplitude_skips_all_octaves() {
        let noise = ConstantNoise::new(0.3);
        let v = fbm(&noise, Vec3::ZERO, 0.0, &noise_params(0.0, 5));
        assert_eq!(v, 0.5);
        assert_eq!(noise.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn fbm_is_clamped() {
        let noise = ConstantNoise::new(1.0);
        let params = NoiseParameters {
            ratio: 1.5,
            ..noise_params(4.0, 6)
        };
        assert_eq!(fbm(&noise, Vec3::ZERO, 0.0, &params), 1.0);
    }

    // --- waves ----------------------------------------------------------------

    #[test]
    fn cos_waves_zero_waves_is_zero() {
        let noise = ConstantNoise::new(0.0);
        assert_eq!(cos_waves(&noise, Vec3::ONE, 0.0, 0, 0), 0.0);
    }

    #[test]
    fn cos_waves_degenerate_direction_contributes_nothing() {
        let mut noise = ConstantNoise::new(0.0);
        noise.hash = 0.0;
        assert_eq!(cos_waves(&noise, Vec3::new(0.3, 0.1, 0.0), 0.0, 2, 4), 0.0);
    }

    #[test]
    fn cos_waves_at_origin() {
        // direction (0.5, 0.5) normalized, phase 0.5 * pi -> cos(pi / 2) = 0
        let noise = ConstantNoise::new(0.0);
        let v = cos_waves(&noise, Vec3::ZERO, 0.0, 0, 3);
        assert!(v.abs() < 1e-6, "got {v}");
        // time 0.5 adds another pi / 2 -> cos(pi) = -1
        let v = cos_waves(&noise, Vec3::ZERO, 0.5, 0, 3);
        assert!((v + 1.0).abs() < 1e-6, "got {v}");
    }

    #[test]
    fn waves_zero_depth_remaps_to_half() {
        let noise = ConstantNoise::new(0.0);
        let params = WaveParameters {
            max_depth: 0,
            ..WaveParameters::default()
        };
        assert_eq!(waves(&noise, Vec3::ONE, 0.0, &params), 0.5);
    }

    #[test]
    fn waves_inflection_is_non_negative() {
        let noise = HashedWaves;
        let params = WaveParameters {
            inflection: true,
            max_depth: 4,
            ..WaveParameters::default()
        };
        for i in 0..50 {
            let p = Vec3::new(i as f32 * 0.13, i as f32 * -0.07, 0.0);
            let v = waves(&noise, p, i as f32 * 0.01, &params);
            assert!(v >= 0.0, "got {v}");
        }
    }

    #[test]
    fn waves_signed_sum_is_remapped() {
        // single octave at the origin, time 0.5: sum = -1 -> -1 * 0.5 + 0.5 = 0
        let noise = ConstantNoise::new(0.0);
        let params = WaveParameters {
            max_depth: 1,
            num_waves: 2,
            ..WaveParameters::default()
        };
        let v = waves(&noise, Vec3::ZERO, 0.5, &params);
        assert!(v.abs() < 1e-6, "got {v}");
    }

    /// Varies the hash with its index so wave directions differ.
    struct HashedWaves;

    impl NoiseSource for HashedWaves {
        fn filtered_noise(&self, p: Vec3, _: f32, _: f32) -> f32 {
            (p.x * 3.1).sin() * (p.y * 1.7).cos()
        }
        fn hash_sample(&self, index: u32) -> f32 {
            ((index as f32 * 12.9898).sin() * 43758.547).rem_euclid(1.0)
        }
        fn unsigned_noise(&self, x: f32) -> f32 {
            x.fract().abs()
        }
    }
}
