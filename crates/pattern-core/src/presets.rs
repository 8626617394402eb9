use glam::Vec2;

use crate::billow::Falloff;
use crate::coloring::{ExteriorMethod, InteriorMethod};
use crate::pattern::{FractalColoring, FractalMode, Generator, Pattern};
use crate::{BillowParameters, Complex, FractalParameters, NoiseParameters, WaveParameters};

/// Ready-made patterns covering every generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Marble,
    Clouds,
    Ripples,
    Cells,
    SwirledCells,
    ClassicMandelbrot,
    LeafJulia,
    Mandelbox,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Marble,
        Preset::Clouds,
        Preset::Ripples,
        Preset::Cells,
        Preset::SwirledCells,
        Preset::ClassicMandelbrot,
        Preset::LeafJulia,
        Preset::Mandelbox,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Marble => "Marble",
            Preset::Clouds => "Clouds",
            Preset::Ripples => "Ripples",
            Preset::Cells => "Cells",
            Preset::SwirledCells => "Swirled Cells",
            Preset::ClassicMandelbrot => "Classic Mandelbrot",
            Preset::LeafJulia => "Leaf Julia",
            Preset::Mandelbox => "Mandelbox",
        }
    }

    pub fn pattern(self) -> Pattern {
        match self {
            Preset::Marble => Pattern::new(Generator::Turbulence(NoiseParameters {
                octaves: 6,
                ratio: 0.5,
                ..NoiseParameters::default()
            })),
            Preset::Clouds => Pattern::new(Generator::Fbm(NoiseParameters {
                octaves: 8,
                ..NoiseParameters::default()
            })),
            Preset::Ripples => Pattern::new(Generator::Waves(WaveParameters {
                num_waves: 8,
                max_depth: 4,
                ..WaveParameters::default()
            })),
            Preset::Cells => Pattern::new(Generator::Billow(BillowParameters {
                randomness: 0.5,
                falloff: Falloff::Smooth,
                ..BillowParameters::default()
            })),
            Preset::SwirledCells => Pattern::new(Generator::Billow(BillowParameters {
                falloff: Falloff::Bubble,
                spottyness: 0.4,
                ..BillowParameters::default()
            }))
            .with_implode(0.6, Vec2::new(0.5, 0.5)),
            Preset::ClassicMandelbrot => Pattern::new(Generator::Mandelbrot {
                params: FractalParameters::default(),
                mode: FractalMode::Mandelbrot,
                coloring: FractalColoring {
                    interior: InteriorMethod::Flat,
                    exterior: ExteriorMethod::SmoothIteration,
                    decomposition: 0.0,
                },
            }),
            Preset::LeafJulia => Pattern::new(Generator::Mandelbrot {
                params: FractalParameters {
                    leaf_effect: 0.5,
                    c: Complex::new(-0.8, 0.156),
                    ..FractalParameters::default()
                },
                mode: FractalMode::Julia,
                coloring: FractalColoring {
                    interior: InteriorMethod::IterationRatio,
                    exterior: ExteriorMethod::IterationRatio,
                    decomposition: 0.1,
                },
            }),
            Preset::Mandelbox => Pattern::new(Generator::Mandelbox {
                params: FractalParameters {
                    iteration_depth: 30,
                    ..FractalParameters::default()
                },
                mode: FractalMode::Mandelbrot,
                coloring: FractalColoring {
                    interior: InteriorMethod::MinimumRadius,
                    exterior: ExteriorMethod::MinimumRadius,
                    decomposition: 0.0,
                },
            }),
        }
    }
}
