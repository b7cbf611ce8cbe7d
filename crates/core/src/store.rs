//! Ordered container seam.
//!
//! The catalog never touches its backing storage directly; it goes through
//! [`OrderedStore`], so any sequence that can answer positional reads, writes,
//! inserts and removals can hold records. Creating a store is `Default`, and
//! dropping it releases the container structure together with whatever it
//! still holds.

use std::collections::VecDeque;

use crate::error::{CatalogError, CatalogResult};

/// Positional sequence of owned elements.
pub trait OrderedStore<T> {
    /// Number of elements currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&T>;

    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Replace the element at `index`, handing back the displaced one.
    fn set(&mut self, index: usize, value: T) -> CatalogResult<T>;

    /// Insert at `index` (`0..=len`), shifting later elements up.
    fn insert(&mut self, index: usize, value: T) -> CatalogResult<()>;

    /// Append after the last element.
    fn push(&mut self, value: T);

    /// Remove the element at `index`, shifting later elements down to fill the gap.
    fn remove(&mut self, index: usize) -> CatalogResult<T>;

    /// Exchange two elements in place.
    fn swap(&mut self, a: usize, b: usize) -> CatalogResult<()>;
}

impl<T> OrderedStore<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> CatalogResult<T> {
        let len = Vec::len(self);
        let slot = <[T]>::get_mut(self, index)
            .ok_or_else(|| CatalogError::out_of_bounds(index, len))?;
        Ok(std::mem::replace(slot, value))
    }

    fn insert(&mut self, index: usize, value: T) -> CatalogResult<()> {
        if index > Vec::len(self) {
            return Err(CatalogError::out_of_bounds(index, Vec::len(self)));
        }
        Vec::insert(self, index, value);
        Ok(())
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn remove(&mut self, index: usize) -> CatalogResult<T> {
        if index >= Vec::len(self) {
            return Err(CatalogError::out_of_bounds(index, Vec::len(self)));
        }
        Ok(Vec::remove(self, index))
    }

    fn swap(&mut self, a: usize, b: usize) -> CatalogResult<()> {
        let len = Vec::len(self);
        if a >= len || b >= len {
            return Err(CatalogError::out_of_bounds(a.max(b), len));
        }
        <[T]>::swap(self, a, b);
        Ok(())
    }
}

impl<T> OrderedStore<T> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> CatalogResult<T> {
        let len = VecDeque::len(self);
        let slot = VecDeque::get_mut(self, index)
            .ok_or_else(|| CatalogError::out_of_bounds(index, len))?;
        Ok(std::mem::replace(slot, value))
    }

    fn insert(&mut self, index: usize, value: T) -> CatalogResult<()> {
        if index > VecDeque::len(self) {
            return Err(CatalogError::out_of_bounds(index, VecDeque::len(self)));
        }
        VecDeque::insert(self, index, value);
        Ok(())
    }

    fn push(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn remove(&mut self, index: usize) -> CatalogResult<T> {
        let len = VecDeque::len(self);
        VecDeque::remove(self, index).ok_or_else(|| CatalogError::out_of_bounds(index, len))
    }

    fn swap(&mut self, a: usize, b: usize) -> CatalogResult<()> {
        let len = VecDeque::len(self);
        if a >= len || b >= len {
            return Err(CatalogError::out_of_bounds(a.max(b), len));
        }
        VecDeque::swap(self, a, b);
        Ok(())
    }
}
