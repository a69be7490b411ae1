use super::{Grid, GridError};
use crate::scalar::Scalar;

/// Starting capacity of a fresh registry.
pub const INITIAL_SOURCE_CAPACITY: usize = 2;

/// Ordered list of injectable values, addressed by insertion position.
///
/// Tracks its own capacity so growth is always an exact doubling (minimum
/// one slot), independent of how `Vec` would choose to grow.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceRegistry<T> {
    values: Vec<T>,
    capacity: usize,
}

impl<T: Scalar> SourceRegistry<T> {
    pub fn try_new() -> Result<Self, GridError> {
        Self::try_with_capacity(INITIAL_SOURCE_CAPACITY)
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, GridError> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(capacity)
            .map_err(|_| GridError::AllocationFailed { cells: capacity })?;
        Ok(Self { values, capacity })
    }

    pub fn try_push(&mut self, value: T) -> Result<(), GridError> {
        if self.values.len() >= self.capacity {
            let grown = if self.capacity == 0 {
                1
            } else {
                self.capacity
                    .checked_mul(2)
                    .ok_or(GridError::AllocationFailed {
                        cells: self.capacity,
                    })?
            };
            self.values
                .try_reserve_exact(grown - self.values.len())
                .map_err(|_| GridError::AllocationFailed { cells: grown })?;
            self.capacity = grown;
        }
        self.values.push(value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T: Scalar> Default for SourceRegistry<T> {
    fn default() -> Self {
        Self {
            values: Vec::with_capacity(INITIAL_SOURCE_CAPACITY),
            capacity: INITIAL_SOURCE_CAPACITY,
        }
    }
}

impl<T: Scalar> Grid<T> {
    pub fn add_source(&mut self, value: T) {
        self.try_add_source(value)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_add_source(&mut self, value: T) -> Result<(), GridError> {
        self.sources.try_push(value)
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn source_capacity(&self) -> usize {
        self.sources.capacity()
    }

    pub fn source(&self, index: usize) -> Option<T> {
        self.sources.get(index)
    }

    pub fn sources(&self) -> &[T] {
        self.sources.as_slice()
    }

    /// Drop every registered source. Capacity is kept.
    pub fn clear_sources(&mut self) {
        self.sources.clear();
    }

    /// Overwrite cell `(row, col)` with source `source_index`.
    ///
    /// Returns `false` and leaves the grid untouched when either the source
    /// index or the coordinates are out of range.
    pub fn apply_source_at(&mut self, source_index: usize, row: usize, col: usize) -> bool {
        let Some(value) = self.sources.get(source_index) else {
            return false;
        };
        let Some(i) = self.offset(row, col) else {
            return false;
        };
        self.cells[i] = value;
        true
    }
}
