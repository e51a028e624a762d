//! Strategy dispatch and the seeded layout engine

use crate::collage::canvas::CanvasSpec;
use crate::io::error::{CollageError, Result};
use crate::layout::circle::circle_layout;
use crate::layout::grid::grid_layout;
use crate::layout::masonry::masonry_layout;
use crate::layout::placement::{LayoutStrategy, Placement};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Compute one placement per item for the chosen strategy
///
/// Only masonry consumes randomness from `rng`.
///
/// # Errors
///
/// Returns [`CollageError::EmptyCollection`] when `count` is zero; callers treat
/// rendering an empty collection as a no-op instead of invoking the layout
pub fn compute_layout<R: Rng + ?Sized>(
    count: usize,
    canvas: &CanvasSpec,
    strategy: LayoutStrategy,
    rng: &mut R,
) -> Result<Vec<Placement>> {
    if count == 0 {
        return Err(CollageError::EmptyCollection);
    }

    let placements = match strategy {
        LayoutStrategy::Grid => grid_layout(count, canvas),
        LayoutStrategy::Circle => circle_layout(count, canvas),
        LayoutStrategy::Masonry => masonry_layout(count, canvas, rng),
    };

    tracing::debug!(
        %strategy,
        count,
        width = canvas.width,
        height = canvas.height,
        "computed layout"
    );
    for placement in &placements {
        tracing::trace!(
            index = placement.index,
            x = placement.target.x,
            y = placement.target.y,
            w = placement.target.width,
            h = placement.target.height,
            rotation = placement.rotation,
            "placement"
        );
    }

    Ok(placements)
}

/// Layout engine owning its random generator
///
/// Production code seeds from OS entropy so masonry varies per render; tests and
/// reproducible exports pass a fixed seed.
pub struct LayoutEngine {
    rng: StdRng,
}

impl LayoutEngine {
    /// Create a deterministic engine
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an engine seeded from system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Compute placements, advancing the internal generator for masonry
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero
    pub fn compute(
        &mut self,
        count: usize,
        canvas: &CanvasSpec,
        strategy: LayoutStrategy,
    ) -> Result<Vec<Placement>> {
        compute_layout(count, canvas, strategy, &mut self.rng)
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::from_entropy()
    }
}
