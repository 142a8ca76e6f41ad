//! Auxiliary collections used by the graph algorithms.
//!
//! Currently this is the binary-heap priority queue backing Dijkstra's algorithm.

pub mod binary_heap;

pub use binary_heap::PriorityQueue;
