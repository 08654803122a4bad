use crate::dynamic_array::DynamicArray;
use crate::errors::DynamicArrayError;

/// Sorts the inclusive range `[first, last]` of `array` in ascending order.
///
/// This is a recursive quicksort which always picks the last element of the
/// active range as pivot. It works purely via the range checked `get` and
/// `swap` of the container. The sort is in-place and not stable. It has an
/// average complexity of O(N log N), but degrades to O(N^2) on input that is
/// already sorted in either direction. The call-stack depth is bounded by
/// O(log N) in every case.
///
/// Calls with `first >= last` are a no-op, which includes any call on an empty
/// array. Otherwise `last` must be a valid index, and the call fails with
/// `OutOfRange` before any element is moved.
pub fn quick_sort<T>(array: &mut DynamicArray<T>, first: usize, last: usize) -> Result<(), DynamicArrayError>
where
    T: Ord,
{
    if first >= last {
        return Ok(());
    }
    if last >= array.len() {
        return Err(DynamicArrayError::OutOfRange {
            index: last,
            len: array.len(),
        });
    }
    sort_range(array, first, last)
}

/// Sorts the entire array.
pub fn sort<T>(array: &mut DynamicArray<T>) -> Result<(), DynamicArrayError>
where
    T: Ord,
{
    match array.len().checked_sub(1) {
        Some(last) => quick_sort(array, 0, last),
        None => Ok(()),
    }
}

// Recurses into the smaller side of the split and continues with the larger
// side in place, so at most O(log N) frames are ever live.
fn sort_range<T>(array: &mut DynamicArray<T>, mut first: usize, mut last: usize) -> Result<(), DynamicArrayError>
where
    T: Ord,
{
    while first < last {
        let split = partition(array, first, last)?;
        if split - first < last - split {
            // Here `split < last`, the left side may be empty.
            if split > first {
                sort_range(array, first, split - 1)?;
            }
            first = split + 1;
        } else {
            // Here `split > first`, the right side may be empty.
            sort_range(array, split + 1, last)?;
            last = split - 1;
        }
    }
    Ok(())
}

// Moves everything smaller than the pivot (the value at `last`) to the front of
// the range, followed by the pivot itself. Returns the final pivot position.
fn partition<T>(array: &mut DynamicArray<T>, first: usize, last: usize) -> Result<usize, DynamicArrayError>
where
    T: Ord,
{
    // `store` is one past the wall, i.e., the slot receiving the next smaller value.
    let mut store = first;
    for current in first .. last {
        if array.get(current)? < array.get(last)? {
            array.swap(store, current)?;
            store += 1;
        }
    }
    array.swap(store, last)?;
    Ok(store)
}
