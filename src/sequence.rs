use std::collections::VecDeque;

/// Index based read/write access to an ordered collection, independent of how it is stored.
///
/// The merge sort in [`crate::merge_sort`] only talks to this trait, so every implementor gets
/// the exact same sequence of reads, writes and comparisons. Only the cost of each access differs.
pub trait Sequence {
    type Item: Ord + Copy;

    /// Label used when reporting results for this container.
    fn name() -> String;

    fn from_values(values: &[Self::Item]) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> Self::Item;

    /// Panics if `index >= self.len()`.
    fn set(&mut self, index: usize, value: Self::Item);

    fn to_vec(&self) -> Vec<Self::Item> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}

impl<T: Ord + Copy> Sequence for Vec<T> {
    type Item = T;

    fn name() -> String {
        "Vec".into()
    }

    fn from_values(values: &[T]) -> Self {
        values.to_vec()
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn to_vec(&self) -> Vec<T> {
        self.clone()
    }
}

impl<T: Ord + Copy> Sequence for VecDeque<T> {
    type Item = T;

    fn name() -> String {
        "VecDeque".into()
    }

    fn from_values(values: &[T]) -> Self {
        values.iter().copied().collect()
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }
}

/// Materializes `values` into a fresh, independently owned container of type `S`.
pub fn load<S: Sequence>(values: &[S::Item]) -> S {
    S::from_values(values)
}
