use fastnoise_lite::{FastNoiseLite, NoiseType};
use glam::Vec3;

/// The noise and hash collaborators every pattern samples from.
///
/// Implementations must be pure: the same arguments always give the same
/// value, with no interior mutation, so one source can be shared across
/// any number of shading threads.
pub trait NoiseSource: Send + Sync {
    /// Band-limited signed noise, roughly in [-1, 1]. Wider filters fade
    /// the result towards zero.
    fn filtered_noise(&self, position: Vec3, time: f32, filter_width: f32) -> f32;

    /// Pseudorandom value in [0, 1) for an integer index.
    fn hash_sample(&self, index: u32) -> f32;

    /// Unsigned 1D noise in [0, 1], used to perturb turbulence octaves.
    fn unsigned_noise(&self, x: f32) -> f32;
}

// ---------------------------------------------------------------------------
// PerlinSource
// ---------------------------------------------------------------------------

/// Offset between the two 3D slices that are blended to animate noise in time.
const TIME_SLICE_OFFSET: Vec3 = Vec3::new(31.416, 47.853, 12.793);

/// Default [`NoiseSource`] backed by fastnoise-lite Perlin noise.
pub struct PerlinSource {
    noise: FastNoiseLite,
    seed: u32,
}

impl PerlinSource {
    /// `seed` drives both the Perlin lattice and the index hash; the hash
    /// uses its bit pattern, so negative seeds are as good as positive ones.
    pub fn new(seed: i32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::Perlin));
        // Lattice spacing of one unit, matching the pattern-space scale.
        noise.set_frequency(Some(1.0));
        Self {
            noise,
            seed: seed as u32,
        }
    }

    fn snoise(&self, position: Vec3, time: f32) -> f32 {
        let slice = time.floor();
        let t = smoothstep(0.0, 1.0, time - slice);
        let a = position + TIME_SLICE_OFFSET * slice;
        let b = a + TIME_SLICE_OFFSET;
        let na = self.noise.get_noise_3d(a.x, a.y, a.z);
        let nb = self.noise.get_noise_3d(b.x, b.y, b.z);
        na + (nb - na) * t
    }
}

impl Default for PerlinSource {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseSource for PerlinSource {
    fn filtered_noise(&self, position: Vec3, time: f32, filter_width: f32) -> f32 {
        self.snoise(position, time) * (1.0 - smoothstep(0.2, 0.75, filter_width))
    }

    fn hash_sample(&self, index: u32) -> f32 {
        let mut h = index.wrapping_add(self.seed.wrapping_mul(0x9e37_79b9));
        h ^= h >> 16;
        h = h.wrapping_mul(0x7feb_352d);
        h ^= h >> 15;
        h = h.wrapping_mul(0x846c_a68b);
        h ^= h >> 16;
        // Top 24 bits keep the result strictly below 1.0 in f32.
        (h >> 8) as f32 / (1u32 << 24) as f32
    }

    fn unsigned_noise(&self, x: f32) -> f32 {
        (self.noise.get_noise_2d(x, 0.0) * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
