//! Buffer for holding mantissa bigits.

use crate::defs::Bigit;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

const STATIC_ALLOCATION: usize = 18;

/// Buffer for holding mantissa bigits, most significant bigit first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigitBuf {
    inner: SmallVec<[Bigit; STATIC_ALLOCATION]>,
}

impl BigitBuf {
    /// New buffer of `sz` zero bigits.
    #[inline]
    pub fn new(sz: usize) -> Self {
        BigitBuf {
            inner: SmallVec::from_elem(0, sz),
        }
    }

    /// Buffer holding a copy of `s`.
    #[inline]
    pub fn from_slice(s: &[Bigit]) -> Self {
        BigitBuf {
            inner: SmallVec::from_slice(s),
        }
    }

    /// Changes the length to `sz`, dropping the least significant bigits
    /// or appending zero bigits.
    #[inline]
    pub fn resize(&mut self, sz: usize) {
        self.inner.resize(sz, 0);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<I: SliceIndex<[Bigit]>> IndexMut<I> for BigitBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Bigit]>> Index<I> for BigitBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for BigitBuf {
    type Target = [Bigit];

    #[inline]
    fn deref(&self) -> &[Bigit] {
        self.inner.deref()
    }
}

impl DerefMut for BigitBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Bigit] {
        self.inner.deref_mut()
    }
}
