//! Named style tags over buffer ranges
//!
//! A tag is a name plus a set of disjoint `[start, end)` ranges, the same
//! model a toolkit text widget uses. Ranges of one name are kept sorted
//! and merged; ranges follow the text when the buffer is edited.

use std::collections::BTreeMap;

use crate::buffer::Position;

/// Name of the reserved selection tag
pub const SELECTION_TAG: &str = "sel";

/// A named style region returned by tag queries
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleTag {
    /// Tag name (stringified token kind, or `sel`)
    pub name: String,
    /// Inclusive start
    pub start: Position,
    /// Exclusive end
    pub end: Position,
}

/// Half-open range covered by a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TagRange {
    pub start: Position,
    pub end: Position,
}

impl TagRange {
    fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// All tags of one buffer
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    ranges: BTreeMap<String, Vec<TagRange>>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag `[start, end)` with `name`; empty ranges are ignored
    ///
    /// Only the ranges the new one overlaps or touches are merged into it.
    pub fn add(&mut self, name: &str, start: Position, end: Position) {
        if start >= end {
            return;
        }
        if !self.ranges.contains_key(name) {
            self.ranges.insert(name.to_string(), Vec::new());
        }
        let Some(ranges) = self.ranges.get_mut(name) else {
            return;
        };
        let lo = ranges.partition_point(|r| r.end < start);
        let hi = ranges.partition_point(|r| r.start <= end);
        let mut merged = TagRange { start, end };
        if lo < hi {
            merged.start = merged.start.min(ranges[lo].start);
            merged.end = merged.end.max(ranges[hi - 1].end);
        }
        ranges.splice(lo..hi, std::iter::once(merged));
    }

    /// Remove `name` from `[start, end)`, splitting ranges that straddle it
    pub fn remove(&mut self, name: &str, start: Position, end: Position) {
        let Some(ranges) = self.ranges.get_mut(name) else {
            return;
        };
        cut(ranges, start, end);
        if ranges.is_empty() {
            self.ranges.remove(name);
        }
    }

    /// Remove every tag except `reserved` from `[start, end)`
    pub fn remove_all_except(&mut self, reserved: &str, start: Position, end: Position) {
        for (name, ranges) in self.ranges.iter_mut() {
            if name != reserved {
                cut(ranges, start, end);
            }
        }
        self.ranges.retain(|_, ranges| !ranges.is_empty());
    }

    /// Drop every tag except `reserved`
    pub fn clear_except(&mut self, reserved: &str) {
        self.ranges.retain(|name, _| name == reserved);
    }

    /// Drop every range of one tag
    pub fn clear(&mut self, name: &str) {
        self.ranges.remove(name);
    }

    /// Names of all tags with at least one range
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ranges.keys().map(String::as_str)
    }

    /// Ranges of one tag, sorted
    pub fn ranges(&self, name: &str) -> &[TagRange] {
        self.ranges.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of the tags covering the character at `pos`
    pub fn names_at(&self, pos: Position) -> Vec<&str> {
        self.ranges
            .iter()
            .filter(|(_, ranges)| {
                let i = ranges.partition_point(|r| r.end <= pos);
                ranges.get(i).map_or(false, |r| r.start <= pos)
            })
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Every tag intersecting `[start, end)`, clipped to it and sorted by start
    pub fn tags_in(&self, start: Position, end: Position) -> Vec<StyleTag> {
        let mut tags: Vec<StyleTag> = self
            .ranges
            .iter()
            .flat_map(|(name, ranges)| {
                let first = ranges.partition_point(|r| r.end <= start);
                ranges[first..]
                    .iter()
                    .take_while(move |r| r.start < end)
                    .map(move |r| StyleTag {
                        name: name.clone(),
                        start: r.start.max(start),
                        end: r.end.min(end),
                    })
            })
            .collect();
        tags.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.name.cmp(&b.name)));
        tags
    }

    /// Total number of ranges across all tags
    pub fn range_count(&self) -> usize {
        self.ranges.values().map(Vec::len).sum()
    }

    /// Move ranges after text `[at, end)` was inserted
    ///
    /// A range starting exactly at `at` moves right; a range ending exactly
    /// at `at` does not grow.
    pub fn shift_for_insert(&mut self, at: Position, end: Position) {
        for ranges in self.ranges.values_mut() {
            for range in ranges.iter_mut() {
                range.start = range.start.shifted_for_insert(at, end);
                if range.end > at {
                    range.end = range.end.shifted_for_insert(at, end);
                }
            }
        }
    }

    /// Collapse and move ranges after text `[start, end)` was deleted
    pub fn shift_for_delete(&mut self, start: Position, end: Position) {
        for ranges in self.ranges.values_mut() {
            for range in ranges.iter_mut() {
                range.start = range.start.shifted_for_delete(start, end);
                range.end = range.end.shifted_for_delete(start, end);
            }
            normalize(ranges);
        }
        self.ranges.retain(|_, ranges| !ranges.is_empty());
    }
}

/// Remove `[start, end)` from sorted, disjoint ranges
fn cut(ranges: &mut Vec<TagRange>, start: Position, end: Position) {
    if start >= end {
        return;
    }
    let lo = ranges.partition_point(|r| r.end <= start);
    let hi = ranges.partition_point(|r| r.start < end);
    if lo >= hi {
        return;
    }
    let (first, last) = (ranges[lo], ranges[hi - 1]);
    let mut pieces = Vec::with_capacity(2);
    if first.start < start {
        pieces.push(TagRange {
            start: first.start,
            end: start,
        });
    }
    if end < last.end {
        pieces.push(TagRange {
            start: end,
            end: last.end,
        });
    }
    ranges.splice(lo..hi, pieces);
}

/// Sort, drop empty ranges, and merge overlapping or touching ones
fn normalize(ranges: &mut Vec<TagRange>) {
    ranges.retain(|r| !r.is_empty());
    ranges.sort();
    let mut merged: Vec<TagRange> = Vec::with_capacity(ranges.len());
    for range in ranges.drain(..) {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    *ranges = merged;
}
