//! Sample buffer storage.
//!
//! A [`SampleBuffer`] is either allocated and owned by the container, or a
//! caller-owned slice lent to it. Only owned storage is ever freed or
//! reallocated by this crate.

use std::ops::{Deref, DerefMut};

/// Raw unsigned 8-bit sample storage.
#[derive(Debug, PartialEq, Eq)]
pub enum SampleBuffer<'a> {
    /// Storage allocated and released by the container.
    Owned(Vec<u8>),
    /// Caller-owned storage; never released by the container.
    Borrowed(&'a mut [u8]),
}

impl SampleBuffer<'static> {
    /// Allocates a zero-filled buffer of `size` bytes. A size of 0 is valid.
    pub fn allocate(size: usize) -> Self {
        SampleBuffer::Owned(vec![0; size])
    }
}

impl<'a> SampleBuffer<'a> {
    /// Wraps caller-owned storage.
    pub fn borrowed(samples: &'a mut [u8]) -> Self {
        SampleBuffer::Borrowed(samples)
    }

    /// Returns true when the container is responsible for this storage.
    pub fn is_owned(&self) -> bool {
        matches!(self, SampleBuffer::Owned(_))
    }

    /// Reallocates to exactly `new_size` bytes.
    ///
    /// Resizing is destructive: the result is zero-filled and prior content is
    /// discarded. Borrowed storage is detached and replaced by a fresh owned
    /// allocation; the caller's slice is left untouched.
    pub fn resize(&mut self, new_size: usize) {
        match self {
            SampleBuffer::Owned(samples) => {
                samples.clear();
                samples.resize(new_size, 0);
            }
            SampleBuffer::Borrowed(_) => {
                *self = SampleBuffer::Owned(vec![0; new_size]);
            }
        }
    }

    /// Shortens the visible buffer to `len` bytes. No-op if already shorter.
    pub fn truncate(&mut self, len: usize) {
        match self {
            SampleBuffer::Owned(samples) => samples.truncate(len),
            SampleBuffer::Borrowed(samples) => {
                if len < samples.len() {
                    let whole = std::mem::take(samples);
                    *samples = whole.split_at_mut(len).0;
                }
            }
        }
    }

    /// Releases the buffer. Owned storage is freed; borrowed storage is only
    /// handed back to its owner.
    pub fn release(self) {
        if let SampleBuffer::Owned(samples) = self {
            drop(samples);
        }
    }

    /// Copies the content into a new owned buffer.
    pub fn to_owned_buffer(&self) -> SampleBuffer<'static> {
        SampleBuffer::Owned(self.to_vec())
    }
}

impl Deref for SampleBuffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            SampleBuffer::Owned(samples) => samples.as_slice(),
            SampleBuffer::Borrowed(samples) => &**samples,
        }
    }
}

impl DerefMut for SampleBuffer<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        match self {
            SampleBuffer::Owned(samples) => samples.as_mut_slice(),
            SampleBuffer::Borrowed(samples) => &mut **samples,
        }
    }
}

impl From<Vec<u8>> for SampleBuffer<'static> {
    fn from(samples: Vec<u8>) -> Self {
        SampleBuffer::Owned(samples)
    }
}

impl<'a> From<&'a mut [u8]> for SampleBuffer<'a> {
    fn from(samples: &'a mut [u8]) -> Self {
        SampleBuffer::Borrowed(samples)
    }
}
