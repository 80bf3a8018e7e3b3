//! Quicksorts. `sequential` and `unbounded` bucket around the middle element into new vectors,
//! `selective` partitions in place around the last element.

pub mod selective;
pub mod sequential;
pub mod unbounded;
