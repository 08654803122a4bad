//!
//! This crate provides [`DynamicArray`](./struct.DynamicArray.html), a resizable array with positional
//! insertion and removal, an in-place quicksort, and a [`Cursor`](./struct.Cursor.html) that can remove
//! values while traversing.
//!
//! # Example
//!
//! ```
//! use dynamic_array::{quick_sort, DynamicArray};
//!
//! let mut array = DynamicArray::new();
//!
//! array.append(3);
//! array.append(1);
//! array.insert_at(1, 2).unwrap();
//!
//! let last = array.len() - 1;
//! quick_sort(&mut array, 0, last).unwrap();
//! assert_eq!(array.collect(), vec![1, 2, 3]);
//!
//! let mut cursor = array.cursor();
//! cursor.advance().unwrap();
//! cursor.remove_current().unwrap();
//!
//! assert_eq!(array.collect(), vec![2, 3]);
//! ```
//!

mod cursor;
mod dynamic_array;
mod errors;
mod sort;

pub use crate::cursor::Cursor;
pub use crate::dynamic_array::DynamicArray;
pub use crate::errors::DynamicArrayError;
pub use crate::sort::{quick_sort, sort};
