use crate::StaticArray;

/// A type with `D` integer components that can be copied into a [`StaticArray`].
///
/// Implement this for vector types from other crates to pass them to [`crate::make_static_array`]
/// and the embedding functions without converting by hand.
pub trait CompatibleArray<const D: usize> {
    /// The component at `dim`. Only called with `dim < D`.
    fn component(&self, dim: usize) -> usize;
}

impl<const D: usize> CompatibleArray<D> for StaticArray<D> {
    #[inline]
    fn component(&self, dim: usize) -> usize {
        self[dim]
    }
}

impl<const D: usize> CompatibleArray<D> for [usize; D] {
    #[inline]
    fn component(&self, dim: usize) -> usize {
        self[dim]
    }
}

impl<const D: usize> CompatibleArray<D> for [u32; D] {
    #[inline]
    fn component(&self, dim: usize) -> usize {
        self[dim] as usize
    }
}

// Truncates on targets where usize is narrower than 64 bits.
impl<const D: usize> CompatibleArray<D> for [u64; D] {
    #[inline]
    fn component(&self, dim: usize) -> usize {
        self[dim] as usize
    }
}

impl<T: CompatibleArray<D> + ?Sized, const D: usize> CompatibleArray<D> for &T {
    #[inline]
    fn component(&self, dim: usize) -> usize {
        (**self).component(dim)
    }
}
