//! Fixed-capacity letter sets
//!
//! A `LetterSet` is a 26-bit bitmask over the uppercase ASCII alphabet.
//! The solver tracks tested/known/excluded letters with these instead of
//! heap-allocated sets, so per-turn bookkeeping never allocates.

/// Set of uppercase ASCII letters backed by a `u32` bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    const MASK: u32 = (1 << 26) - 1;

    /// Build a set from an iterator of uppercase ASCII letters
    pub fn from_letters(letters: impl IntoIterator<Item = u8>) -> Self {
        let mut set = Self::EMPTY;
        for letter in letters {
            set.insert(letter);
        }
        set
    }

    /// Add a letter to the set
    ///
    /// Non-uppercase-ASCII bytes are ignored.
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_uppercase() {
            self.0 |= 1 << (letter - b'A');
        }
    }

    /// Check whether the set contains a letter
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_uppercase() && self.0 & (1 << (letter - b'A')) != 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in `self` but not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0 & Self::MASK)
    }

    /// Letters in both sets
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in either set
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether the sets share any letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}
