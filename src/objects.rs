//! In-place merging of mapping-shaped objects.

use std::collections::HashMap;
use std::hash::Hash;

/// Merge every source into `target`, in place, left to right.
///
/// Each source's keys overwrite earlier ones and the target; across all
/// sources the last writer wins.
pub fn extend<K, V>(target: &mut HashMap<K, V>, sources: &[HashMap<K, V>])
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    for source in sources {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// Fill in missing keys of `target` from the sources, in place.
///
/// A key is only written when absent from `target` at the time it is
/// processed, so the earliest source supplying a missing key wins and
/// nothing already present is ever overwritten.
pub fn defaults<K, V>(target: &mut HashMap<K, V>, sources: &[HashMap<K, V>])
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    for source in sources {
        for (key, value) in source {
            target
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }
}
