//! Order-preserving deduplication
//!
//! Shared by the Data and DataRecipients lanes.

use std::collections::HashSet;
use std::hash::Hash;

/// Keep the first item for every key, in scan order.
///
/// Folds into the unique items plus the set of keys seen so far. Running it
/// again on its own output returns the output unchanged.
pub fn dedup_by_key<T, K, I, F>(items: I, mut key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let (unique, _seen) = items.into_iter().fold(
        (Vec::new(), HashSet::new()),
        |(mut unique, mut seen), item| {
            if seen.insert(key(&item)) {
                unique.push(item);
            }
            (unique, seen)
        },
    );
    unique
}
