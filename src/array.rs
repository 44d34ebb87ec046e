//! The owning one-dimensional container.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::{out_of_bounds, ArrayError};
use crate::traits::Sequence;
use crate::views::ArrayView;

/// A one-dimensional container that owns a contiguous buffer of elements.
///
/// `Array` is the materialization target of every lazy sequence view: any
/// `Sequence` can be copied into a fresh `Array` with
/// [`Sequence::eval`] or [`Array::from_seq`]. Unlike the lazy views it is
/// mutable and resizable, and it exposes reference access through
/// `Index`/`IndexMut` in addition to the value-returning `Sequence`
/// contract.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Array<T>
{
    data: Vec<T>,
}

impl<T> Array<T>
{
    /// Create an array from a vector (no copying).
    pub fn from_vec(data: Vec<T>) -> Self
    {
        Array { data }
    }

    /// Create an empty array.
    pub fn new() -> Self
    {
        Array { data: Vec::new() }
    }

    /// Number of elements.
    pub fn len(&self) -> usize
    {
        self.data.len()
    }

    /// Return true if the array has no elements.
    pub fn is_empty(&self) -> bool
    {
        self.data.is_empty()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[T]
    {
        &self.data
    }

    /// Return the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T]
    {
        &mut self.data
    }

    /// Move the elements out as a vector (no copying).
    pub fn into_vec(self) -> Vec<T>
    {
        self.data
    }

    /// Reference to the element at `index`, or an error when out of bounds.
    pub fn get_checked(&self, index: usize) -> Result<&T, ArrayError>
    {
        self.data
            .get(index)
            .ok_or_else(|| out_of_bounds(format!("index {} for length {}", index, self.data.len())))
    }

    /// Append an element at the end.
    pub fn push(&mut self, value: T)
    {
        self.data.push(value);
    }

    /// Resize to `new_len`, filling new positions with `value`.
    pub fn resize(&mut self, new_len: usize, value: T)
    where T: Clone
    {
        self.data.resize(new_len, value);
    }

    /// A non-owning view of the whole array.
    pub fn view(&self) -> ArrayView<'_, T>
    {
        ArrayView::full(&self.data)
    }
}

impl<T: Clone> Array<T>
{
    /// Create an array of length `n` with every element set to `elem`.
    pub fn from_elem(n: usize, elem: T) -> Self
    {
        Array { data: vec![elem; n] }
    }

    /// Materialize any sequence, lazy or not, into an owning array.
    pub fn from_seq<S>(seq: &S) -> Self
    where S: Sequence<Elem = T> + ?Sized
    {
        let mut data = Vec::with_capacity(seq.len());
        for i in 0..seq.len() {
            data.push(seq.get(i));
        }
        Array { data }
    }
}

impl<T: Clone + Zero> Array<T>
{
    /// Create an array of `n` zeros.
    pub fn zeros(n: usize) -> Self
    {
        Self::from_elem(n, T::zero())
    }
}

impl<T: Clone + One> Array<T>
{
    /// Create an array of `n` ones.
    pub fn ones(n: usize) -> Self
    {
        Self::from_elem(n, T::one())
    }
}

impl<T: Clone> Sequence for Array<T>
{
    type Elem = T;

    fn len(&self) -> usize
    {
        self.data.len()
    }

    fn get(&self, index: usize) -> T
    {
        self.data[index].clone()
    }
}

impl<T> Index<usize> for Array<T>
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T
    {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Array<T>
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T
    {
        &mut self.data[index]
    }
}

impl<T> From<Vec<T>> for Array<T>
{
    fn from(data: Vec<T>) -> Self
    {
        Array::from_vec(data)
    }
}

impl<T: Clone> From<&[T]> for Array<T>
{
    fn from(data: &[T]) -> Self
    {
        Array { data: data.to_vec() }
    }
}

impl<T> FromIterator<T> for Array<T>
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self
    {
        Array { data: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Array<T>
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I)
    {
        self.data.extend(iter);
    }
}

impl<T> IntoIterator for Array<T>
{
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T>
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.data.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_list().entries(self.data.iter()).finish()
    }
}
