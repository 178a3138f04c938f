//! Helpers shared by more than one day: the three-opcode handheld CPU, the
//! knot hash, and inclusive integer spans. Everything else lives with the
//! single day that needs it.

pub mod cpu;
pub mod knot;
pub mod span;

use fnv::FnvBuildHasher;

pub type HashMap<K, V> = std::collections::HashMap<K, V, FnvBuildHasher>;
pub type HashSet<T> = std::collections::HashSet<T, FnvBuildHasher>;
