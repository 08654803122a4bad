use crate::dynamic_array::DynamicArray;
use crate::errors::DynamicArrayError;

/// A forward cursor over a `DynamicArray` which allows to remove the value
/// it has yielded last.
///
/// The cursor reads the live array, not a snapshot. It holds the exclusive
/// borrow of the array, so its own `remove_current` is the only way the array
/// can change while the cursor exists.
pub struct Cursor<'a, T> {
    array: &'a mut DynamicArray<T>,
    cursor: usize,
    last_yielded: Option<usize>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(array: &'a mut DynamicArray<T>) -> Cursor<'a, T> {
        Cursor {
            array,
            cursor: 0,
            last_yielded: None,
        }
    }

    /// Returns whether `advance` would yield a value.
    pub fn has_next(&self) -> bool {
        self.cursor < self.array.len()
    }

    /// Yield the next value and move past it.
    pub fn advance(&mut self) -> Result<&T, DynamicArrayError> {
        if !self.has_next() {
            return Err(DynamicArrayError::NoSuchElement);
        }
        let index = self.cursor;
        self.last_yielded = Some(index);
        self.cursor += 1;
        self.array.get(index)
    }

    /// Remove the value yielded by the last `advance`.
    ///
    /// The following value slides into the freed position, and the cursor is
    /// moved back so that the next `advance` yields it. A second removal
    /// requires another `advance` in between.
    pub fn remove_current(&mut self) -> Result<T, DynamicArrayError> {
        let index = match self.last_yielded {
            Some(index) => index,
            None => return Err(DynamicArrayError::IllegalIteratorState),
        };
        let removed = self.array.remove_at(index)?;
        self.cursor -= 1;
        self.last_yielded = None;
        Ok(removed)
    }
}

impl<'a, T> Iterator for Cursor<'a, T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance().ok().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len() - self.cursor;
        (remaining, Some(remaining))
    }
}
