//! Mouse hit-testing.
//!
//! Every clickable element registers a rectangle when the view model is built.
//! Elements nested inside another (a tag inside a card, a menu option over the
//! card list) register after their container. [`HitMap::hit`] returns only the
//! last registered region under the cursor, so a click reaches exactly one
//! target and never bubbles to the enclosing container.

use crate::domain::SortMethod;

/// What a click activates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    SearchBar,
    SortDropdown,
    SortOption(SortMethod),
    /// A category tag, in the tag bar or on a card.
    Category(String),
    /// A card, by index into the derived company list.
    Card(usize),
}

/// A clickable rectangle. Rows and columns are 1-indexed and inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
    pub target: ClickTarget,
}

impl HitRegion {
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top && row <= self.bottom && col >= self.left && col <= self.right
    }
}

/// Ordered collection of clickable regions for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<HitRegion>,
}

impl HitMap {
    /// Registers a region spanning `rows` by `cols`. Empty spans are ignored.
    pub fn push(
        &mut self,
        rows: std::ops::RangeInclusive<usize>,
        cols: std::ops::RangeInclusive<usize>,
        target: ClickTarget,
    ) {
        if rows.is_empty() || cols.is_empty() {
            return;
        }
        self.regions.push(HitRegion {
            top: *rows.start(),
            bottom: *rows.end(),
            left: *cols.start(),
            right: *cols.end(),
            target,
        });
    }

    /// Returns the innermost target at a cell.
    ///
    /// ```rust
    /// use warranty_ratings::ui::hitmap::{ClickTarget, HitMap};
    ///
    /// let mut map = HitMap::default();
    /// map.push(9..=11, 1..=80, ClickTarget::Card(0));
    /// map.push(10..=10, 14..=23, ClickTarget::Category("Outdoors".into()));
    ///
    /// assert_eq!(map.hit(10, 15), Some(&ClickTarget::Category("Outdoors".into())));
    /// assert_eq!(map.hit(10, 40), Some(&ClickTarget::Card(0)));
    /// assert_eq!(map.hit(2, 1), None);
    /// ```
    #[must_use]
    pub fn hit(&self, row: usize, col: usize) -> Option<&ClickTarget> {
        self.regions
            .iter()
            .rev()
            .find(|region| region.contains(row, col))
            .map(|region| &region.target)
    }

    #[must_use]
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }
}
