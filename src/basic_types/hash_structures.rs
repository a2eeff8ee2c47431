use fnv::FnvBuildHasher;

/// [`std::collections::HashMap`] that defaults to a deterministic hasher.
pub type HashMap<K, V, Hasher = FnvBuildHasher> = std::collections::HashMap<K, V, Hasher>;
