use num_complex::Complex32;

/// Algebraic pair used as the fractal iterators' state.
pub type Complex = Complex32;

/// The two nonlinear folds of box-type iteration.
pub trait Fold {
    /// Reflects each component through the unit box.
    fn box_fold(self) -> Self;

    /// Spherical inversion between the two squared radii. Points inside the
    /// inner radius get a fixed scale, points in the shell get inverted,
    /// points outside pass through.
    fn sphere_fold(self, sqr_distance: f32, sqr_min_radius: f32, sqr_radius: f32) -> Self;
}

impl Fold for Complex {
    fn box_fold(self) -> Self {
        Complex::new(
            (2.0 * self.re).clamp(-1.0, 1.0) - self.re,
            (2.0 * self.im).clamp(-1.0, 1.0) - self.im,
        )
    }

    fn sphere_fold(self, sqr_distance: f32, sqr_min_radius: f32, sqr_radius: f32) -> Self {
        if sqr_distance < sqr_min_radius {
            self * (sqr_radius / sqr_min_radius)
        } else if sqr_distance < sqr_radius {
            self * (sqr_radius / sqr_distance)
        } else {
            self
        }
    }
}
