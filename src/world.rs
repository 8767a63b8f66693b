use std::collections::HashSet;

use crate::Pos2;

/// The complete set of currently live cells.
///
/// The grid is unbounded; only live cells are materialized. Equality is by
/// membership, so two worlds built in different insertion orders compare
/// equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    cells: HashSet<Pos2>,
}

impl World {
    #[inline]
    pub fn contains(&self, pos: &Pos2) -> bool {
        self.cells.contains(pos)
    }

    #[inline]
    pub fn insert(&mut self, pos: Pos2) -> bool {
        self.cells.insert(pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Pos2> {
        self.cells.iter()
    }

    /// The bounding box of the live cells as `(min, max)` corners, both
    /// inclusive. `None` when the world is empty, since no extremum exists.
    pub fn bounds(&self) -> Option<(Pos2, Pos2)> {
        let mut iter = self.cells.iter();
        let &first = iter.next()?;

        let (mut min, mut max) = (first, first);
        for &pos in iter {
            min.x = min.x.min(pos.x);
            min.y = min.y.min(pos.y);
            max.x = max.x.max(pos.x);
            max.y = max.y.max(pos.y);
        }

        Some((min, max))
    }
}

impl FromIterator<Pos2> for World {
    fn from_iter<I: IntoIterator<Item = Pos2>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
