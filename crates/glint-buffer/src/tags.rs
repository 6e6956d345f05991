//! Tag store: named sets of character ranges.
//!
//! ## Learning: Keeping Invariants Local
//!
//! Each tag owns a `Vec<Range<usize>>` that is always sorted, non-empty per
//! range and non-overlapping. Every mutation (`add`, `remove`, and the edit
//! hooks) restores that invariant before returning, so readers never have to
//! normalize. Applying a tag twice to the same span is a no-op, like in
//! real text widgets.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::TagStyle;

/// Tag ranges and styles, addressed by character index.
#[derive(Debug, Clone, Default)]
pub struct TagStore {
    ranges: BTreeMap<String, Vec<Range<usize>>>,
    styles: BTreeMap<String, TagStyle>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `range` to `tag`, merging with overlapping or touching ranges.
    pub fn add(&mut self, tag: &str, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let ranges = self.ranges.entry(tag.to_string()).or_default();

        let mut merged = range;
        let mut out = Vec::with_capacity(ranges.len() + 1);
        let mut placed = false;
        for r in ranges.drain(..) {
            if r.end < merged.start {
                out.push(r);
            } else if r.start > merged.end {
                if !placed {
                    out.push(merged.clone());
                    placed = true;
                }
                out.push(r);
            } else {
                merged = merged.start.min(r.start)..merged.end.max(r.end);
            }
        }
        if !placed {
            out.push(merged);
        }
        *ranges = out;
    }

    /// Removes `range` from `tag`, splitting ranges that straddle it.
    pub fn remove(&mut self, tag: &str, range: Range<usize>) {
        let Some(ranges) = self.ranges.get_mut(tag) else {
            return;
        };
        if range.is_empty() {
            return;
        }

        let mut out = Vec::with_capacity(ranges.len() + 1);
        for r in ranges.drain(..) {
            if r.end <= range.start || r.start >= range.end {
                out.push(r);
                continue;
            }
            if r.start < range.start {
                out.push(r.start..range.start);
            }
            if r.end > range.end {
                out.push(range.end..r.end);
            }
        }
        *ranges = out;
        if ranges.is_empty() {
            self.ranges.remove(tag);
        }
    }

    /// Returns the ranges of `tag` in document order.
    pub fn ranges(&self, tag: &str) -> &[Range<usize>] {
        self.ranges.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `tag` covers all of `range`.
    pub fn covers(&self, tag: &str, range: Range<usize>) -> bool {
        self.ranges(tag)
            .iter()
            .any(|r| r.start <= range.start && range.end <= r.end)
    }

    /// Names of tags that currently cover at least one character.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.ranges.keys().map(String::as_str)
    }

    pub fn set_style(&mut self, tag: &str, style: TagStyle) {
        self.styles.insert(tag.to_string(), style);
    }

    pub fn style(&self, tag: &str) -> Option<&TagStyle> {
        self.styles.get(tag)
    }

    // ==================== Edit Tracking ====================

    /// Shifts ranges after an insertion of `len` characters at `at`.
    ///
    /// Text inserted strictly inside a range extends it.
    pub fn on_insert(&mut self, at: usize, len: usize) {
        if len == 0 {
            return;
        }
        for ranges in self.ranges.values_mut() {
            for r in ranges.iter_mut() {
                if r.start >= at {
                    r.start += len;
                    r.end += len;
                } else if r.end > at {
                    r.end += len;
                }
            }
        }
    }

    /// Shifts and shrinks ranges after `deleted` was removed.
    pub fn on_delete(&mut self, deleted: Range<usize>) {
        if deleted.is_empty() {
            return;
        }
        let len = deleted.len();
        let map = |x: usize| {
            if x <= deleted.start {
                x
            } else if x >= deleted.end {
                x - len
            } else {
                deleted.start
            }
        };

        for ranges in self.ranges.values_mut() {
            let mut out: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
            for r in ranges.drain(..) {
                let mapped = map(r.start)..map(r.end);
                if mapped.is_empty() {
                    continue;
                }
                // Deletion can make neighbours touch.
                match out.last_mut() {
                    Some(last) if last.end >= mapped.start => last.end = last.end.max(mapped.end),
                    _ => out.push(mapped),
                }
            }
            *ranges = out;
        }
        self.ranges.retain(|_, ranges| !ranges.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_merges() {
        let mut store = TagStore::new();
        store.add("keyword", 0..3);
        store.add("keyword", 10..12);
        store.add("keyword", 2..5);
        store.add("keyword", 5..6);
        assert_eq!(store.ranges("keyword"), &[0..6, 10..12]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = TagStore::new();
        store.add("string", 4..9);
        store.add("string", 4..9);
        assert_eq!(store.ranges("string"), &[4..9]);
        assert!(store.covers("string", 5..7));
        assert!(!store.covers("string", 3..7));
    }

    #[test]
    fn test_remove_splits() {
        let mut store = TagStore::new();
        store.add("comment", 0..10);
        store.remove("comment", 3..5);
        assert_eq!(store.ranges("comment"), &[0..3, 5..10]);

        store.remove("comment", 0..100);
        assert!(store.ranges("comment").is_empty());
        assert_eq!(store.tag_names().count(), 0);
    }

    #[test]
    fn test_edits_shift_ranges() {
        let mut store = TagStore::new();
        store.add("keyword", 4..7);
        store.on_insert(0, 2);
        assert_eq!(store.ranges("keyword"), &[6..9]);

        store.on_insert(7, 1);
        assert_eq!(store.ranges("keyword"), &[6..10]);

        store.on_delete(0..6);
        assert_eq!(store.ranges("keyword"), &[0..4]);

        store.on_delete(0..4);
        assert!(store.ranges("keyword").is_empty());
    }

    proptest! {
        #[test]
        fn test_ranges_stay_normalized(ops in prop::collection::vec((0usize..50, 0usize..50, any::<bool>()), 0..40)) {
            let mut store = TagStore::new();
            for (a, b, add) in ops {
                let range = a.min(b)..a.max(b);
                if add {
                    store.add("t", range);
                } else {
                    store.remove("t", range);
                }
            }
            let ranges = store.ranges("t");
            for r in ranges {
                prop_assert!(r.start < r.end);
            }
            for pair in ranges.windows(2) {
                prop_assert!(pair[0].end < pair[1].start);
            }
        }
    }
}
