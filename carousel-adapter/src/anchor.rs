use core::fmt;

use carousel::Carousel;

/// Identifies the focused item so focus survives data changes.
///
/// Typical use cases:
/// - items inserted or removed around the focused one
/// - reorder/replace where the same item should stay centred
#[derive(Clone, PartialEq, Eq)]
pub struct FocusAnchor<K> {
    pub key: K,
}

impl<K: fmt::Debug> fmt::Debug for FocusAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusAnchor").field("key", &self.key).finish()
    }
}

/// Captures an anchor for the focused item.
///
/// Returns `None` if the carousel is empty or `key_for` has no key for the index.
pub fn capture_focus_anchor<K>(
    c: &Carousel,
    key_for: impl FnOnce(usize) -> Option<K>,
) -> Option<FocusAnchor<K>> {
    if c.count() == 0 {
        return None;
    }
    key_for(c.rest_index()).map(|key| FocusAnchor { key })
}

/// Focuses the anchored item again after a data change.
///
/// The adapter must provide a `key_to_index` mapping for the *current* dataset. Returns
/// `true` when the anchor was found and applied; otherwise the index is left as clamped by
/// `Carousel::set_count`.
pub fn apply_focus_anchor<K>(
    c: &mut Carousel,
    anchor: &FocusAnchor<K>,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> bool {
    let Some(index) = key_to_index(&anchor.key) else {
        return false;
    };
    if index >= c.count() {
        return false;
    }
    c.set_current_index(index);
    true
}
