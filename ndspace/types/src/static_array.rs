use std::{
    fmt::Display,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Rem, RemAssign, Sub,
        SubAssign,
    },
};

use bytemuck::{Pod, Zeroable};

use crate::GeometryError;

/// A fixed-size vector of `D` unsigned components.
///
/// This is the representation of both positions ([`Id`]) and extents ([`Range`]) in a `D`
/// dimensional iteration space. The two aliases are interchangeable for the compiler, but they
/// mean different things: an id points at one work item, a range describes how many work items
/// there are along each dimension.
///
/// Arithmetic is elementwise. Addition, subtraction and multiplication wrap like the unsigned
/// size arithmetic they model. Division and remainder panic on a zero component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct StaticArray<const D: usize> {
    data: [usize; D],
}

/// The position of a single work item in a `D` dimensional iteration space.
pub type Id<const D: usize> = StaticArray<D>;

/// The extent of a `D` dimensional iteration space.
pub type Range<const D: usize> = StaticArray<D>;

// SAFETY: `StaticArray` is a transparent wrapper around `[usize; D]` which is `Pod`.
unsafe impl<const D: usize> Zeroable for StaticArray<D> {}
unsafe impl<const D: usize> Pod for StaticArray<D> {}

impl<const D: usize> Default for StaticArray<D> {
    fn default() -> Self {
        Self { data: [0; D] }
    }
}

impl<const D: usize> StaticArray<D> {
    /// The number of components.
    pub const DIM: usize = D;

    /// Create an array with every component set to `value`.
    pub const fn splat(value: usize) -> Self {
        Self { data: [value; D] }
    }

    pub const fn from_array(data: [usize; D]) -> Self {
        Self { data }
    }

    pub const fn into_array(self) -> [usize; D] {
        self.data
    }

    pub const fn as_array(&self) -> &[usize; D] {
        &self.data
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.data
    }

    /// Get the component at `dim`.
    ///
    /// # Panics
    /// Panics if `dim >= D`.
    #[inline]
    pub fn get(&self, dim: usize) -> usize {
        self.data[dim]
    }

    /// Get the component at `dim`, or an error if `dim` is not a valid dimension.
    pub fn try_get(&self, dim: usize) -> Result<usize, GeometryError> {
        self.data
            .get(dim)
            .copied()
            .ok_or(GeometryError::IndexOutOfBounds { index: dim, dim: D })
    }

    /// Get the component at `dim` without a bounds check.
    ///
    /// # Safety
    /// `dim` must be less than `D`.
    #[inline]
    pub unsafe fn get_unchecked(&self, dim: usize) -> usize {
        unsafe { *self.data.get_unchecked(dim) }
    }

    /// Mutable version of [`StaticArray::get_unchecked`].
    ///
    /// # Safety
    /// `dim` must be less than `D`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, dim: usize) -> &mut usize {
        unsafe { self.data.get_unchecked_mut(dim) }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.iter().copied()
    }

    /// The product of all components. For a range this is the number of work items it contains.
    #[inline]
    pub fn size(&self) -> usize {
        self.data
            .iter()
            .fold(1usize, |acc, &component| acc.wrapping_mul(component))
    }

    /// The product of all components, or `None` if it does not fit in a `usize`.
    #[inline]
    pub fn checked_size(&self) -> Option<usize> {
        if self.data.contains(&0) {
            return Some(0);
        }
        self.data
            .iter()
            .try_fold(1usize, |acc, &component| acc.checked_mul(component))
    }

    /// Apply `f` to every component.
    #[inline]
    pub fn map(self, f: impl FnMut(usize) -> usize) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    /// Combine two arrays component by component.
    #[inline]
    pub fn zip_with(self, other: Self, mut f: impl FnMut(usize, usize) -> usize) -> Self {
        Self {
            data: std::array::from_fn(|i| f(self.data[i], other.data[i])),
        }
    }

    /// Row-major linear position of `id` inside this range. The last component varies fastest.
    ///
    /// `id` is not checked against the range.
    pub fn linear_index(&self, id: Id<D>) -> usize {
        self.data
            .iter()
            .zip(id.data.iter())
            .fold(0usize, |linear, (&extent, &component)| {
                linear.wrapping_mul(extent).wrapping_add(component)
            })
    }

    /// Inverse of [`StaticArray::linear_index`].
    ///
    /// # Panics
    /// Panics if any component of this range is zero.
    pub fn from_linear_index(&self, mut linear: usize) -> Id<D> {
        let mut id = Id::<D>::default();
        for dim in (0..D).rev() {
            id.data[dim] = linear % self.data[dim];
            linear /= self.data[dim];
        }
        id
    }
}

impl StaticArray<1> {
    pub const fn new(dim0: usize) -> Self {
        Self { data: [dim0] }
    }
}

impl StaticArray<2> {
    pub const fn new(dim0: usize, dim1: usize) -> Self {
        Self { data: [dim0, dim1] }
    }
}

impl StaticArray<3> {
    pub const fn new(dim0: usize, dim1: usize, dim2: usize) -> Self {
        Self {
            data: [dim0, dim1, dim2],
        }
    }
}

impl<const D: usize> From<usize> for StaticArray<D> {
    fn from(value: usize) -> Self {
        Self::splat(value)
    }
}

impl<const D: usize> From<[usize; D]> for StaticArray<D> {
    fn from(data: [usize; D]) -> Self {
        Self { data }
    }
}

impl<const D: usize> From<StaticArray<D>> for [usize; D] {
    fn from(array: StaticArray<D>) -> Self {
        array.data
    }
}

impl From<(usize, usize)> for StaticArray<2> {
    fn from((dim0, dim1): (usize, usize)) -> Self {
        Self::new(dim0, dim1)
    }
}

impl From<(usize, usize, usize)> for StaticArray<3> {
    fn from((dim0, dim1, dim2): (usize, usize, usize)) -> Self {
        Self::new(dim0, dim1, dim2)
    }
}

impl<const D: usize> TryFrom<&[usize]> for StaticArray<D> {
    type Error = GeometryError;

    fn try_from(values: &[usize]) -> Result<Self, Self::Error> {
        let data = <[usize; D]>::try_from(values).map_err(|_| GeometryError::DimensionMismatch {
            expected: D,
            actual: values.len(),
        })?;
        Ok(Self { data })
    }
}

impl<const D: usize> Index<usize> for StaticArray<D> {
    type Output = usize;

    #[inline]
    fn index(&self, dim: usize) -> &Self::Output {
        &self.data[dim]
    }
}

impl<const D: usize> IndexMut<usize> for StaticArray<D> {
    #[inline]
    fn index_mut(&mut self, dim: usize) -> &mut Self::Output {
        &mut self.data[dim]
    }
}

impl<const D: usize> IntoIterator for StaticArray<D> {
    type Item = usize;
    type IntoIter = std::array::IntoIter<usize, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<const D: usize> Display for StaticArray<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, component) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, ")")
    }
}

macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:expr) => {
        impl<const D: usize> $trait for StaticArray<D> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_with(rhs, $op)
            }
        }

        impl<const D: usize> $assign_trait for StaticArray<D> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = self.zip_with(rhs, $op);
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign, usize::wrapping_add);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign, usize::wrapping_sub);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign, usize::wrapping_mul);
impl_elementwise_op!(Div, div, DivAssign, div_assign, |a: usize, b: usize| a / b);
impl_elementwise_op!(Rem, rem, RemAssign, rem_assign, |a: usize, b: usize| a % b);

#[cfg(feature = "serde")]
impl<const D: usize> serde::Serialize for StaticArray<D> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serde::Serialize::serialize(self.as_slice(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const D: usize> serde::Deserialize<'de> for StaticArray<D> {
    fn deserialize<Des: serde::Deserializer<'de>>(deserializer: Des) -> Result<Self, Des::Error> {
        use serde::de::Error;

        let values: Vec<usize> = serde::Deserialize::deserialize(deserializer)?;
        Self::try_from(values.as_slice())
            .map_err(|_| Des::Error::invalid_length(values.len(), &"one value per dimension"))
    }
}

#[test]
fn test_splat_size_is_power() {
    assert_eq!(StaticArray::<1>::splat(7).size(), 7);
    assert_eq!(StaticArray::<2>::splat(7).size(), 49);
    assert_eq!(StaticArray::<3>::splat(7).size(), 343);
    assert_eq!(StaticArray::<3>::from(0).size(), 0);
    assert_eq!(StaticArray::<3>::splat(7).checked_size(), Some(343));
    assert_eq!(StaticArray::<2>::new(usize::MAX, 2).checked_size(), None);
    assert_eq!(StaticArray::<3>::new(usize::MAX, 2, 0).checked_size(), Some(0));
}

#[test]
fn test_per_dimension_constructors() {
    assert_eq!(Id::<1>::new(4).into_array(), [4]);
    assert_eq!(Id::<2>::new(4, 5).into_array(), [4, 5]);
    assert_eq!(Range::<3>::new(4, 5, 6).into_array(), [4, 5, 6]);
    assert_eq!(Range::<2>::from((4, 5)), Range::<2>::new(4, 5));
    assert_eq!(Range::<3>::from((4, 5, 6)), Range::<3>::new(4, 5, 6));
}

#[test]
fn test_default_is_zero() {
    assert_eq!(Id::<3>::default(), Id::<3>::splat(0));
}

#[test]
fn test_indexing() {
    let mut id = Id::<3>::new(1, 2, 3);
    id[1] = 20;
    assert_eq!(id[0], 1);
    assert_eq!(id.get(1), 20);
    assert_eq!(unsafe { id.get_unchecked(2) }, 3);
    unsafe { *id.get_unchecked_mut(0) = 10 };
    assert_eq!(id, Id::<3>::new(10, 20, 3));
}

#[test]
fn test_try_get() {
    let id = Id::<2>::new(1, 2);
    assert_eq!(id.try_get(1), Ok(2));
    assert_eq!(
        id.try_get(2),
        Err(GeometryError::IndexOutOfBounds { index: 2, dim: 2 })
    );
}

#[test]
#[should_panic]
fn test_checked_index_out_of_range_panics() {
    let id = Id::<2>::new(1, 2);
    let _ = id[2];
}

#[test]
fn test_elementwise_ops() {
    let a = Range::<3>::new(8, 9, 10);
    let b = Range::<3>::new(2, 4, 3);
    assert_eq!(a + b, Range::<3>::new(10, 13, 13));
    assert_eq!(a - b, Range::<3>::new(6, 5, 7));
    assert_eq!(a * b, Range::<3>::new(16, 36, 30));
    assert_eq!(a / b, Range::<3>::new(4, 2, 3));
    assert_eq!(a % b, Range::<3>::new(0, 1, 1));

    let mut c = a;
    c += b;
    c -= b;
    assert_eq!(c, a);
    c *= b;
    c /= b;
    assert_eq!(c, a);
    c %= b;
    assert_eq!(c, Range::<3>::new(0, 1, 1));
}

#[test]
fn test_subtraction_wraps() {
    let a = Id::<1>::new(0);
    let b = Id::<1>::new(1);
    assert_eq!((a - b)[0], usize::MAX);
    assert_eq!((a - b) + b, a);
}

#[test]
#[should_panic]
fn test_division_by_zero_component_panics() {
    let _ = Range::<2>::new(4, 4) / Range::<2>::new(2, 0);
}

#[test]
fn test_try_from_slice() {
    let values = [3usize, 4];
    assert_eq!(Range::<2>::try_from(&values[..]), Ok(Range::<2>::new(3, 4)));
    assert_eq!(
        Range::<3>::try_from(&values[..]),
        Err(GeometryError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    );
}

#[test]
fn test_linear_index() {
    let range = Range::<3>::new(2, 3, 4);
    let id = Id::<3>::new(1, 2, 3);
    assert_eq!(range.linear_index(id), 23);
    assert_eq!(range.from_linear_index(23), id);
    for linear in 0..range.size() {
        assert_eq!(range.linear_index(range.from_linear_index(linear)), linear);
    }
}

#[test]
fn test_display() {
    assert_eq!(Id::<1>::new(4).to_string(), "(4)");
    assert_eq!(Range::<3>::new(1, 4, 5).to_string(), "(1, 4, 5)");
}

#[test]
fn test_bytes() {
    let range = Range::<2>::new(1, 2);
    let bytes: &[u8] = bytemuck::bytes_of(&range);
    assert_eq!(bytes.len(), 2 * std::mem::size_of::<usize>());
    let back: Range<2> = bytemuck::pod_read_unaligned(bytes);
    assert_eq!(back, range);
}
