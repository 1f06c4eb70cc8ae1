//! Containers used by the problem store.
mod keyed_vec;

use fnv::FnvBuildHasher;
pub(crate) use keyed_vec::*;

/// [`std::collections::HashMap`] that defaults to a deterministic hasher.
#[allow(clippy::disallowed_types, reason = "this is how we define our HashMap")]
pub(crate) type HashMap<K, V, Hasher = FnvBuildHasher> = std::collections::HashMap<K, V, Hasher>;
