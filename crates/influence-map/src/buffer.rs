//! Double-buffered ("ping-pong") cell storage.
//!
//! Holds two equally-sized buffers: `front` is the published generation
//! that every accessor reads, `back` is the staging target that
//! propagation writes. [`DoubleBuffer::publish`] exchanges the two by
//! swapping the owned `Vec`s, so no cell is copied.

/// Two equally-sized `f32` buffers with alternating roles.
#[derive(Clone, Debug)]
pub(crate) struct DoubleBuffer {
    front: Vec<f32>,
    back: Vec<f32>,
}

impl DoubleBuffer {
    /// Allocate both buffers with `len` cells set to `value`.
    pub(crate) fn filled(len: usize, value: f32) -> Self {
        Self {
            front: vec![value; len],
            back: vec![value; len],
        }
    }

    /// Published generation.
    pub(crate) fn front(&self) -> &[f32] {
        &self.front
    }

    /// Mutable access to the published generation for single-cell writes.
    pub(crate) fn front_mut(&mut self) -> &mut [f32] {
        &mut self.front
    }

    /// Borrow the published generation for reading and the staging buffer
    /// for writing at the same time.
    pub(crate) fn split(&mut self) -> (&[f32], &mut [f32]) {
        (&self.front, &mut self.back)
    }

    /// Make the staging buffer the published generation.
    pub(crate) fn publish(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    pub(crate) fn len(&self) -> usize {
        self.front.len()
    }
}
