//! Scroll restoration policy
//!
//! Exactly one behavior fires per navigation, in priority order:
//! 1. restore the position saved for the target (history navigation)
//! 2. scroll smoothly to the element named by the fragment
//! 3. scroll smoothly to the top of the page

use std::collections::HashMap;

/// Window scroll offset in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

impl ScrollPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the page should end up after a navigation
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollTarget {
    Restore(ScrollPosition),
    Element { id: String, smooth: bool },
    Top { smooth: bool },
}

/// Pick the scroll target for a navigation
pub fn resolve_scroll(saved: Option<ScrollPosition>, hash: Option<&str>) -> ScrollTarget {
    if let Some(position) = saved {
        return ScrollTarget::Restore(position);
    }

    match hash.map(|h| h.trim_start_matches('#')) {
        Some(id) if !id.is_empty() => ScrollTarget::Element {
            id: id.to_string(),
            smooth: true,
        },
        _ => ScrollTarget::Top { smooth: true },
    }
}

/// Scroll positions remembered per path
#[derive(Clone, Debug, Default)]
pub struct ScrollHistory {
    positions: HashMap<String, ScrollPosition>,
}

impl ScrollHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember where the user was on `path` before leaving it
    pub fn save(&mut self, path: impl Into<String>, position: ScrollPosition) {
        self.positions.insert(path.into(), position);
    }

    pub fn get(&self, path: &str) -> Option<ScrollPosition> {
        self.positions.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
