//! Internal access helpers shared by graph algorithms.

pub(crate) mod visited;
