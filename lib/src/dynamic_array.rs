use std::fmt;
use std::iter;
use std::iter::FromIterator;

use crate::cursor::Cursor;
use crate::errors::DynamicArrayError;

const DEFAULT_CAPACITY: usize = 10;
const MIN_CAPACITY: usize = 1;
const GROWTH_FACTOR: usize = 2;

// The core data structure: a slot array where `[0, length)` is occupied and
// the tail up to the capacity is empty.
pub struct DynamicArray<T> {
    storage: Vec<Option<T>>,
    length: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new `DynamicArray` with the default capacity of 10.
    pub fn new() -> DynamicArray<T> {
        DynamicArray::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new `DynamicArray` with explicit control over the initial capacity.
    ///
    /// A capacity of zero is allowed, the first insertion then grows the storage to one slot.
    pub fn with_capacity(capacity: usize) -> DynamicArray<T> {
        DynamicArray {
            storage: allocate_slots(capacity),
            length: 0,
        }
    }

    /// Returns the length (i.e., number of elements stored).
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Append a value at the end, doubling the capacity if the storage is full.
    ///
    /// This is an amortized O(1) operation. Appending cannot fail, the return
    /// value is always `true`.
    pub fn append(&mut self, t: T) -> bool {
        if self.length == self.storage.len() {
            self.grow();
        }
        self.storage[self.length] = Some(t);
        self.length += 1;
        true
    }

    /// Insert a value at `index`, shifting all subsequent values one position to the right.
    ///
    /// The valid range is `0 ..= len`, inserting at `len` is equivalent to `append`.
    /// This is an O(N) operation.
    pub fn insert_at(&mut self, index: usize, t: T) -> Result<(), DynamicArrayError> {
        if index > self.length {
            return Err(self.out_of_range(index));
        }
        if index == self.length {
            self.append(t);
            return Ok(());
        }

        if self.length == self.storage.len() {
            // Moving into fresh storage allows to open the gap while copying.
            let mut storage = allocate_slots(self.grown_capacity());
            for (i, slot) in self.storage.iter_mut().enumerate() {
                let target = if i < index { i } else { i + 1 };
                storage[target] = slot.take();
            }
            self.storage = storage;
        } else {
            // The slot at `length` is empty, rotating it to the front opens the gap.
            self.storage[index ..= self.length].rotate_right(1);
        }

        self.storage[index] = Some(t);
        self.length += 1;
        Ok(())
    }

    /// Get the value at `index`.
    pub fn get(&self, index: usize) -> Result<&T, DynamicArrayError> {
        self.storage[.. self.length]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(DynamicArrayError::OutOfRange { index, len: self.length })
    }

    /// Get a mutable reference to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DynamicArrayError> {
        let len = self.length;
        self.storage[.. len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(DynamicArrayError::OutOfRange { index, len })
    }

    /// Overwrite the value at `index`, returning a reference to the new value.
    ///
    /// The previous value is dropped.
    pub fn set(&mut self, index: usize, t: T) -> Result<&T, DynamicArrayError> {
        self.check_index(index)?;
        let stored: &T = self.storage[index].insert(t);
        Ok(stored)
    }

    /// Remove the value at `index`, shifting all subsequent values one position to the left.
    ///
    /// This is an O(N) operation, removing the last value does not shift at all.
    pub fn remove_at(&mut self, index: usize) -> Result<T, DynamicArrayError> {
        let len = self.length;
        let removed = match self.storage[.. len].get_mut(index).and_then(Option::take) {
            Some(t) => t,
            None => return Err(DynamicArrayError::OutOfRange { index, len }),
        };
        if index + 1 < len {
            self.storage[index .. len].rotate_left(1);
        }
        self.length -= 1;
        Ok(removed)
    }

    /// Exchange the values at `a` and `b`. Both indices are range checked
    /// before anything is moved.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), DynamicArrayError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.storage.swap(a, b);
        Ok(())
    }

    /// Drop all values and reset the storage to a minimal capacity.
    pub fn clear(&mut self) {
        self.storage = allocate_slots(MIN_CAPACITY);
        self.length = 0;
    }

    /// Returns a cursor that can traverse the values and remove them on the way.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Iterate over references to the stored values.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.storage[.. self.length].iter().filter_map(Option::as_ref)
    }

    /// Traverse collection given a callback.
    pub fn traverse<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T),
    {
        for (i, x) in self.iter().enumerate() {
            f(i, x);
        }
    }

    /// Collect collection into a vector.
    pub fn collect(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.length);
        self.traverse(|_, x| data.push(x.clone()));
        data
    }

    /// Internal debug helper function, prints the raw slots including the empty tail.
    pub fn debug(&self)
    where
        T: fmt::Debug,
    {
        println!("{:?}", self.storage);
    }

    fn grown_capacity(&self) -> usize {
        (self.storage.len() * GROWTH_FACTOR).max(MIN_CAPACITY)
    }

    fn grow(&mut self) {
        let mut storage = allocate_slots(self.grown_capacity());
        for (target, slot) in storage.iter_mut().zip(self.storage.iter_mut()) {
            *target = slot.take();
        }
        self.storage = storage;
    }

    fn check_index(&self, index: usize) -> Result<(), DynamicArrayError> {
        if index < self.length {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> DynamicArrayError {
        DynamicArrayError::OutOfRange {
            index,
            len: self.length,
        }
    }
}

fn allocate_slots<T>(capacity: usize) -> Vec<Option<T>> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        DynamicArray::new()
    }
}

impl<T> fmt::Debug for DynamicArray<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for t in iter {
            self.append(t);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = DynamicArray::new();
        array.extend(iter);
        array
    }
}

#[cfg(feature = "indextrait")]
impl<T> std::ops::Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(t) => t,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(feature = "indextrait")]
impl<T> std::ops::IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(t) => t,
            Err(err) => panic!("{}", err),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    macro_rules! new_array {
        ($capacity:expr, $data:expr) => {{
            let mut a = DynamicArray::with_capacity($capacity);
            for x in $data.iter() {
                a.append(x.clone());
            }
            a
        }};
    }

    fn out_of_range(index: usize, len: usize) -> DynamicArrayError {
        DynamicArrayError::OutOfRange { index, len }
    }

    // ------------------------------------------------------------------------
    // Construction and growth
    // ------------------------------------------------------------------------

    #[test]
    fn test_new_is_empty() {
        let a = DynamicArray::<i32>::new();
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 10);
        assert!(a.is_empty());

        let a = DynamicArray::<i32>::default();
        assert_eq!(a.capacity(), 10);
    }

    #[test]
    fn test_append() {
        let mut a = DynamicArray::new();
        for i in 1 ..= 10 {
            assert!(a.append(i));
        }
        assert_eq!(a.len(), 10);
        assert!(!a.is_empty());
        assert_eq!(a.collect(), (1 ..= 10).collect::<Vec<_>>());
    }

    #[test]
    fn test_append_doubles_capacity() {
        let mut a = DynamicArray::with_capacity(2);
        let mut capacities = Vec::new();
        for i in 0 .. 9 {
            a.append(i);
            capacities.push(a.capacity());
        }
        assert_eq!(capacities, [2, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(a.collect(), (0 .. 9).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_capacity_grows() {
        let mut a = DynamicArray::with_capacity(0);
        assert_eq!(a.capacity(), 0);
        a.append("a");
        assert_eq!(a.capacity(), 1);
        a.append("b");
        assert_eq!(a.capacity(), 2);
        assert_eq!(a.collect(), ["a", "b"]);
    }

    #[test]
    fn test_capacity_never_shrinks_on_remove() {
        let mut a = new_array!(4, [1, 2, 3, 4, 5]);
        assert_eq!(a.capacity(), 8);
        while !a.is_empty() {
            a.remove_at(0).unwrap();
            assert_eq!(a.capacity(), 8);
        }
    }

    // ------------------------------------------------------------------------
    // Positional insert
    // ------------------------------------------------------------------------

    #[test]
    fn test_insert_at() {
        let mut a = new_array!(10, ["1", "2", "3"]);
        a.insert_at(0, "0").unwrap();
        assert_eq!(a.len(), 4);
        assert_eq!(a.get(0), Ok(&"0"));
        assert_eq!(a.get(3), Ok(&"3"));

        let mut a = new_array!(10, [1, 2, 4]);
        a.insert_at(2, 3).unwrap();
        assert_eq!(a.collect(), [1, 2, 3, 4]);

        let mut a = new_array!(10, [1, 2]);
        a.insert_at(2, 3).unwrap();
        assert_eq!(a.collect(), [1, 2, 3]);

        let mut a = DynamicArray::new();
        a.insert_at(0, 1).unwrap();
        assert_eq!(a.collect(), [1]);
    }

    #[test]
    fn test_insert_at_with_growth() {
        for index in 0 ..= 4 {
            let mut a = new_array!(4, [0, 1, 2, 3]);
            assert_eq!(a.capacity(), 4);
            a.insert_at(index, 99).unwrap();
            assert_eq!(a.capacity(), 8);

            let mut expected = vec![0, 1, 2, 3];
            expected.insert(index, 99);
            assert_eq!(a.collect(), expected);
        }
    }

    #[test]
    fn test_insert_at_shifts_right() {
        let data = [10, 11, 12, 13, 14];
        for index in 0 ..= data.len() {
            let mut a = new_array!(16, data);
            a.insert_at(index, -1).unwrap();
            assert_eq!(a.get(index), Ok(&-1));
            for j in index .. data.len() {
                assert_eq!(a.get(j + 1), Ok(&data[j]));
            }
            for j in 0 .. index {
                assert_eq!(a.get(j), Ok(&data[j]));
            }
        }
    }

    #[test]
    fn test_insert_at_out_of_range() {
        let mut a = new_array!(3, [1, 2, 3]);
        assert_eq!(a.insert_at(4, 0), Err(out_of_range(4, 3)));
        assert_eq!(a.insert_at(usize::MAX, 0), Err(out_of_range(usize::MAX, 3)));
        assert_eq!(a.collect(), [1, 2, 3]);
        assert_eq!(a.capacity(), 3);
    }

    // ------------------------------------------------------------------------
    // Get / set
    // ------------------------------------------------------------------------

    #[test]
    fn test_get() {
        let a = new_array!(10, [0, 1, 2]);
        assert_eq!(a.get(0), Ok(&0));
        assert_eq!(a.get(2), Ok(&2));
        assert_eq!(a.get(3), Err(out_of_range(3, 3)));

        // Slots beyond the length exist, but must not be reachable.
        assert_eq!(a.capacity(), 10);
        assert_eq!(a.get(9), Err(out_of_range(9, 3)));
    }

    #[test]
    fn test_get_mut() {
        let mut a = new_array!(10, [0, 1, 2]);
        *a.get_mut(1).unwrap() += 10;
        assert_eq!(a.collect(), [0, 11, 2]);
        assert_eq!(a.get_mut(3), Err(out_of_range(3, 3)));
    }

    #[test]
    fn test_set() {
        let mut a = new_array!(10, ["0", "1", "2", "3"]);
        assert_eq!(a.set(0, "777"), Ok(&"777"));
        assert_eq!(a.get(0), Ok(&"777"));
        assert_eq!(a.len(), 4);

        assert_eq!(a.set(4, "x"), Err(out_of_range(4, 4)));
        assert_eq!(a.collect(), ["777", "1", "2", "3"]);
    }

    // ------------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------------

    #[test]
    fn test_remove_at() {
        let mut a = new_array!(10, ["0", "1", "2"]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.remove_at(0), Ok("0"));
        assert_eq!(a.len(), 2);
        assert_eq!(a.remove_at(a.len() - 1), Ok("2"));
        assert_eq!(a.collect(), ["1"]);
        assert_eq!(a.remove_at(0), Ok("1"));
        assert!(a.is_empty());
    }

    #[test]
    fn test_remove_at_shifts_left() {
        let data = [10, 11, 12, 13, 14];
        for index in 0 .. data.len() {
            let mut a = new_array!(5, data);
            assert_eq!(a.remove_at(index), Ok(data[index]));
            assert_eq!(a.len(), data.len() - 1);
            if index < a.len() {
                assert_eq!(a.get(index), Ok(&data[index + 1]));
            }
            let mut expected = data.to_vec();
            expected.remove(index);
            assert_eq!(a.collect(), expected);
        }
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut a = new_array!(10, [1, 2]);
        assert_eq!(a.remove_at(2), Err(out_of_range(2, 2)));
        assert_eq!(a.collect(), [1, 2]);

        let mut a = DynamicArray::<i32>::new();
        assert_eq!(a.remove_at(0), Err(out_of_range(0, 0)));
    }

    #[test]
    fn test_remove_and_append_reuses_slot() {
        let mut a = new_array!(3, [1, 2, 3]);
        a.remove_at(1).unwrap();
        a.append(4);
        assert_eq!(a.capacity(), 3);
        assert_eq!(a.collect(), [1, 3, 4]);
    }

    #[test]
    fn test_clear() {
        let mut a = new_array!(10, [0, 1, 2]);
        assert_eq!(a.len(), 3);
        a.clear();
        assert_eq!(a.len(), 0);
        assert!(a.is_empty());
        assert_eq!(a.get(0), Err(out_of_range(0, 0)));

        a.append(5);
        a.append(6);
        assert_eq!(a.collect(), [5, 6]);

        let mut a = DynamicArray::<i32>::new();
        a.clear();
        assert!(a.is_empty());
    }

    #[test]
    fn test_swap() {
        let mut a = new_array!(10, [1, 2, 3]);
        a.swap(0, 2).unwrap();
        assert_eq!(a.collect(), [3, 2, 1]);
        a.swap(1, 1).unwrap();
        assert_eq!(a.collect(), [3, 2, 1]);
        assert_eq!(a.swap(0, 3), Err(out_of_range(3, 3)));
        assert_eq!(a.swap(5, 0), Err(out_of_range(5, 3)));
        assert_eq!(a.collect(), [3, 2, 1]);
    }

    // ------------------------------------------------------------------------
    // Misc functionality
    // ------------------------------------------------------------------------

    #[test]
    fn test_iter_and_traverse() {
        let a = new_array!(2, [3, 1, 2]);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [3, 1, 2]);

        let mut visited = Vec::new();
        a.traverse(|i, x| visited.push((i, *x)));
        assert_eq!(visited, [(0, 3), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_from_iter_and_extend() {
        let mut a: DynamicArray<_> = (0 .. 15).collect();
        assert_eq!(a.len(), 15);
        assert_eq!(a.capacity(), 20);
        a.extend(vec![15, 16]);
        assert_eq!(a.collect(), (0 .. 17).collect::<Vec<_>>());
    }

    #[test]
    fn test_statistics_and_debugging() {
        let a = new_array!(4, [1, 2, 3]);
        a.debug();
        assert_eq!(format!("{:?}", a), "[1, 2, 3]");
    }

    #[test]
    fn test_drops_owned_values() {
        use std::rc::Rc;

        let value = Rc::new(());
        let mut a = DynamicArray::with_capacity(1);
        for _ in 0 .. 5 {
            a.append(Rc::clone(&value));
        }
        assert_eq!(Rc::strong_count(&value), 6);
        a.set(0, Rc::clone(&value)).unwrap();
        assert_eq!(Rc::strong_count(&value), 6);
        drop(a.remove_at(0).unwrap());
        assert_eq!(Rc::strong_count(&value), 5);
        a.clear();
        assert_eq!(Rc::strong_count(&value), 1);
    }

    #[cfg(feature = "indextrait")]
    #[test]
    fn test_index_trait() {
        let mut a = new_array!(4, [1, 2, 3]);
        assert_eq!(a[1], 2);
        a[1] = 20;
        assert_eq!(a.collect(), [1, 20, 3]);
    }

    #[cfg(feature = "indextrait")]
    #[test]
    #[should_panic(expected = "index 3 is out of range for length 3")]
    fn test_index_trait_out_of_range() {
        let a = new_array!(4, [1, 2, 3]);
        let _value = a[3];
    }

    // ------------------------------------------------------------------------
    // Brute force against Vec
    // ------------------------------------------------------------------------

    #[test]
    fn test_random_operations_against_vec() {
        let mut rng: StdRng = SeedableRng::seed_from_u64(0);
        for cap in 0 .. 8 {
            let mut a = DynamicArray::with_capacity(cap);
            let mut v = Vec::new();
            for i in 0 .. 500 {
                let len = v.len();
                match rng.gen_range(0, 5) {
                    0 => {
                        a.append(i);
                        v.push(i);
                    }
                    1 => {
                        let index = rng.gen_range(0, len + 2);
                        if index <= len {
                            a.insert_at(index, i).unwrap();
                            v.insert(index, i);
                        } else {
                            assert_eq!(a.insert_at(index, i), Err(out_of_range(index, len)));
                        }
                    }
                    2 => {
                        let index = rng.gen_range(0, len + 1);
                        if index < len {
                            assert_eq!(a.remove_at(index), Ok(v.remove(index)));
                        } else {
                            assert_eq!(a.remove_at(index), Err(out_of_range(index, len)));
                        }
                    }
                    3 => {
                        let index = rng.gen_range(0, len + 1);
                        if index < len {
                            assert_eq!(a.set(index, i), Ok(&i));
                            v[index] = i;
                        } else {
                            assert_eq!(a.set(index, i), Err(out_of_range(index, len)));
                        }
                    }
                    _ => {
                        if rng.gen_range(0, 50) == 0 {
                            a.clear();
                            v.clear();
                        }
                    }
                }
                assert_eq!(a.len(), v.len());
                assert!(a.len() <= a.capacity());
                assert_eq!(a.collect(), v);
            }
        }
    }
}
