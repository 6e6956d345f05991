//! Tag batching.
//!
//! ## Learning: RAII Guards
//!
//! Every highlighting pass must end with all pending ranges applied, even
//! when the structured pass bails out halfway and the fallback takes over.
//! Instead of remembering to call `flush_all()` on every exit path, emission
//! goes through an [`Emitter`] that borrows the batch and the widget; its
//! `Drop` impl flushes. Leaving scope (normally, by `?`, or by an early
//! `return`) is enough.

use std::collections::{BTreeMap, BTreeSet};

use glint_buffer::{Position, TextWidget};
use tracing::{trace, warn};

/// Pending ranges per tag before they are handed to the widget.
pub const DEFAULT_BATCH_THRESHOLD: usize = 50;

/// Receives `(tag, start, end)` highlight requests.
pub trait TagSink {
    fn emit(&mut self, tag: &'static str, start: Position, end: Position);
}

/// Collects requests in memory, used by tests and the CLI dump.
impl TagSink for Vec<(&'static str, Position, Position)> {
    fn emit(&mut self, tag: &'static str, start: Position, end: Position) {
        if start < end {
            self.push((tag, start, end));
        }
    }
}

/// Pending tag ranges, flushed per tag at a threshold.
///
/// Tags flush in lexical order and ranges in insertion order, so a pass
/// always reaches the widget in the same sequence.
#[derive(Debug)]
pub struct TagBatch {
    pending: BTreeMap<&'static str, Vec<(Position, Position)>>,
    threshold: usize,
}

impl TagBatch {
    pub fn new(threshold: usize) -> Self {
        Self {
            pending: BTreeMap::new(),
            threshold: threshold.max(1),
        }
    }

    /// Queues a range, flushing `tag` once it reaches the threshold.
    pub fn add<W: TextWidget + ?Sized>(
        &mut self,
        widget: &mut W,
        tag: &'static str,
        start: Position,
        end: Position,
    ) {
        let ranges = self.pending.entry(tag).or_default();
        ranges.push((start, end));
        if ranges.len() >= self.threshold {
            self.flush(widget, tag);
        }
    }

    /// Applies and clears the pending ranges of one tag.
    pub fn flush<W: TextWidget + ?Sized>(&mut self, widget: &mut W, tag: &'static str) {
        let Some(ranges) = self.pending.get_mut(tag) else {
            return;
        };
        for (start, end) in ranges.drain(..) {
            if let Err(e) = widget.apply_tag(tag, start, end) {
                warn!(tag, %start, %end, error = %e, "Widget rejected tag range");
            }
        }
    }

    /// Applies every pending range.
    pub fn flush_all<W: TextWidget + ?Sized>(&mut self, widget: &mut W) {
        let tags: Vec<&'static str> = self.pending.keys().copied().collect();
        for tag in tags {
            self.flush(widget, tag);
        }
        self.pending.clear();
    }

    /// Number of ranges not yet applied.
    pub fn pending_count(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for TagBatch {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_THRESHOLD)
    }
}

/// Emission guard for one pass. Flushes the batch when dropped.
pub struct Emitter<'a, W: TextWidget + ?Sized> {
    batch: &'a mut TagBatch,
    widget: &'a mut W,
    used: BTreeSet<&'static str>,
    emitted: usize,
}

impl<'a, W: TextWidget + ?Sized> Emitter<'a, W> {
    pub fn new(batch: &'a mut TagBatch, widget: &'a mut W) -> Self {
        Self {
            batch,
            widget,
            used: BTreeSet::new(),
            emitted: 0,
        }
    }

    /// Number of requests accepted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Flushes and returns the set of tags that were emitted.
    pub fn finish(mut self) -> BTreeSet<&'static str> {
        self.batch.flush_all(&mut *self.widget);
        std::mem::take(&mut self.used)
    }
}

impl<W: TextWidget + ?Sized> TagSink for Emitter<'_, W> {
    fn emit(&mut self, tag: &'static str, start: Position, end: Position) {
        // Empty ranges include the 1.0/1.0 sentinel for unlocated items.
        if start >= end {
            trace!(tag, %start, %end, "Skipping empty range");
            return;
        }
        self.used.insert(tag);
        self.emitted += 1;
        self.batch.add(&mut *self.widget, tag, start, end);
    }
}

impl<W: TextWidget + ?Sized> Drop for Emitter<'_, W> {
    fn drop(&mut self) {
        self.batch.flush_all(&mut *self.widget);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_buffer::TextBuffer;

    fn pos(line: usize, column: usize) -> Position {
        Position::new(line, column)
    }

    #[test]
    fn test_threshold_flush() {
        let mut widget = TextBuffer::from("a".repeat(10));
        let mut batch = TagBatch::new(3);

        batch.add(&mut widget, "keyword", pos(1, 0), pos(1, 1));
        batch.add(&mut widget, "keyword", pos(1, 2), pos(1, 3));
        assert_eq!(batch.pending_count(), 2);
        assert!(widget.tag_ranges("keyword").is_empty());

        batch.add(&mut widget, "keyword", pos(1, 4), pos(1, 5));
        assert_eq!(batch.pending_count(), 0);
        assert_eq!(widget.tag_ranges("keyword").len(), 3);
    }

    #[test]
    fn test_flush_all_continues_after_rejection() {
        let mut widget = TextBuffer::from("abc");
        let mut batch = TagBatch::default();

        batch.add(&mut widget, "bad", pos(5, 0), pos(5, 1));
        batch.add(&mut widget, "good", pos(1, 0), pos(1, 2));
        batch.flush_all(&mut widget);

        assert_eq!(batch.pending_count(), 0);
        assert_eq!(widget.tagged_text("good"), vec!["ab"]);
        assert!(widget.tag_ranges("bad").is_empty());
    }

    #[test]
    fn test_emitter_flushes_on_drop() {
        let mut widget = TextBuffer::from("import os");
        let mut batch = TagBatch::default();
        {
            let mut emitter = Emitter::new(&mut batch, &mut widget);
            emitter.emit("keyword", pos(1, 0), pos(1, 6));
            emitter.emit("namespace", pos(1, 7), pos(1, 9));
            emitter.emit("variable", Position::ORIGIN, Position::ORIGIN);
            assert_eq!(emitter.emitted(), 2);
        }
        assert_eq!(batch.pending_count(), 0);
        assert_eq!(widget.tagged_text("keyword"), vec!["import"]);
        assert_eq!(widget.tagged_text("namespace"), vec!["os"]);
        assert!(widget.tag_ranges("variable").is_empty());
    }

    #[test]
    fn test_finish_reports_used_tags() {
        let mut widget = TextBuffer::from("x = 1");
        let mut batch = TagBatch::default();
        let mut emitter = Emitter::new(&mut batch, &mut widget);
        emitter.emit("variable", pos(1, 0), pos(1, 1));
        emitter.emit("number", pos(1, 4), pos(1, 5));
        let used = emitter.finish();

        assert_eq!(used.into_iter().collect::<Vec<_>>(), vec!["number", "variable"]);
        assert_eq!(batch.pending_count(), 0);
    }
}
