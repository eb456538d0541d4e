//! Distance-based decay factors for propagation.

use crate::connection::{ConnectionIndex, Connections};

/// Per-slot attenuation applied to neighbour values during propagation.
///
/// Influence falls off exponentially with distance: an orthogonal
/// neighbour (distance 1) is scaled by `exp(-decay)`, a diagonal one
/// (distance √2) by `exp(-√2 · decay)`. A decay of zero leaves every
/// neighbour at full strength.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayFactors {
    edge: f32,
    corner: f32,
}

impl DecayFactors {
    /// Precompute the two factors for `decay`.
    pub fn new(decay: f32) -> Self {
        Self {
            edge: (-ConnectionIndex::MiddleRight.distance() * decay).exp(),
            corner: (-ConnectionIndex::TopLeft.distance() * decay).exp(),
        }
    }

    /// Factor applied to the four orthogonal neighbours.
    pub fn edge(&self) -> f32 {
        self.edge
    }

    /// Factor applied to the four diagonal neighbours.
    pub fn corner(&self) -> f32 {
        self.corner
    }

    /// Factor for a given slot.
    pub fn for_slot(&self, slot: ConnectionIndex) -> f32 {
        if slot.is_diagonal() {
            self.corner
        } else {
            self.edge
        }
    }

    /// Largest decayed neighbour value, floored at zero.
    ///
    /// The accumulator starts at `0.0`, so a neighbourhood of all-negative
    /// values yields `0.0` rather than its least-negative member.
    pub fn weighted_max(&self, connections: &Connections) -> f32 {
        ConnectionIndex::ALL
            .iter()
            .fold(0.0_f32, |best, &slot| {
                best.max(connections[slot.index()] * self.for_slot(slot))
            })
    }
}
