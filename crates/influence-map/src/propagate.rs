//! Generation-step propagation.
//!
//! Each step computes, for every cell:
//!
//! ```text
//! spread = max(0, edge · orthogonal neighbours, corner · diagonal neighbours)
//! next   = clamp(current + (spread - current) · momentum)
//! ```
//!
//! where `edge = exp(-decay)` and `corner = exp(-√2 · decay)`. All reads
//! come from the published generation and all writes go to the staging
//! buffer, so the update is order-independent; the buffers are then
//! swapped.

use influence_core::PropagationParams;

use crate::map::{clamp_value, InfluenceMap};
use crate::neighbourhood::gather;

impl InfluenceMap {
    /// Advance the map by one generation.
    ///
    /// `momentum` blends each cell toward its neighbourhood's strongest
    /// decayed influence: `0` leaves the map unchanged, `1` replaces every
    /// cell with that maximum. `decay` controls how fast influence falls
    /// off with neighbour distance. Out-of-bounds neighbours count as zero.
    pub fn propagate(&mut self, momentum: f32, decay: f32) {
        self.propagate_with(&PropagationParams::new(momentum, decay));
    }

    /// [`propagate`](Self::propagate) with settings taken from `params`.
    pub fn propagate_with(&mut self, params: &PropagationParams) {
        let momentum = params.momentum;
        tracing::trace!(
            momentum,
            decay = params.decay,
            generation = self.generation,
            "propagating"
        );

        let factors = params.decay_factors();
        let (width, height) = (self.width(), self.height());
        let clamp = self.values_clamped();
        let (current, next) = self.buffers.split();

        for y in 0..height {
            for x in 0..width {
                let i = y * width + x;
                let around = gather(current, width, height, x, y, 1.0, 0.0);
                let spread = factors.weighted_max(&around);
                let value = current[i];
                next[i] = clamp_value(clamp, value + (spread - value) * momentum);
            }
        }

        self.buffers.publish();
        self.generation += 1;
    }

    /// Run `steps` generations with the same settings.
    pub fn propagate_for(&mut self, params: &PropagationParams, steps: usize) {
        for _ in 0..steps {
            self.propagate_with(params);
        }
    }
}
