//! Tile module - the content of a single grid cell
//!
//! A tile is either empty (value 0) or holds a power of two >= 2.

use crate::rng::RandomSource;
use crate::types::TILE_WIDTH;

/// A single grid cell's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    value: u32,
}

impl Tile {
    /// The empty tile
    pub const EMPTY: Tile = Tile { value: 0 };

    /// Largest value a tile can hold; it can no longer merge.
    pub const MAX_VALUE: u32 = 1 << 31;

    /// Build a tile from a raw value.
    ///
    /// Returns `None` unless the value is 0 or a power of two >= 2.
    pub fn from_value(value: u32) -> Option<Self> {
        if value == 0 || (value >= 2 && value.is_power_of_two()) {
            Some(Self { value })
        } else {
            None
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// log2 of the value (0 for an empty tile)
    pub fn exponent(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.value.trailing_zeros()
        }
    }

    /// Give the tile a fresh value: 2 or 4 with equal probability.
    ///
    /// Overwrites whatever was there; callers only spawn onto empty tiles.
    pub fn spawn_value<R: RandomSource>(&mut self, rng: &mut R) {
        self.value = if rng.coin_flip() { 4 } else { 2 };
    }

    /// Whether `other` can merge into this tile: same non-empty value, and
    /// the doubled value still fits.
    pub fn can_merge_with(&self, other: &Tile) -> bool {
        !self.is_empty() && self.value == other.value && self.value < Self::MAX_VALUE
    }

    /// Merge step: the tile absorbs an equal neighbor
    pub fn double(&mut self) {
        debug_assert!(self.value < Self::MAX_VALUE, "tile {} cannot double", self.value);
        self.value *= 2;
    }

    pub fn clear(&mut self) {
        self.value = 0;
    }

    /// Fixed-width text for the tile.
    ///
    /// The number is centered in `TILE_WIDTH` columns with the extra space on
    /// the right when padding is odd. Empty tiles are all spaces.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return " ".repeat(TILE_WIDTH);
        }
        let s = self.value.to_string();
        let spaces = TILE_WIDTH.saturating_sub(s.len());
        let left = spaces / 2;
        let mut out = String::with_capacity(TILE_WIDTH.max(s.len()));
        out.push_str(&" ".repeat(left));
        out.push_str(&s);
        out.push_str(&" ".repeat(spaces - left));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_new_tile_is_empty() {
        let tile = Tile::default();
        assert!(tile.is_empty());
        assert_eq!(tile, Tile::EMPTY);
        assert_eq!(tile.exponent(), 0);
    }

    #[test]
    fn test_from_value_enforces_power_of_two() {
        assert_eq!(Tile::from_value(0), Some(Tile::EMPTY));
        assert_eq!(Tile::from_value(2).map(|t| t.value()), Some(2));
        assert_eq!(Tile::from_value(2048).map(|t| t.exponent()), Some(11));
        assert_eq!(Tile::from_value(1), None);
        assert_eq!(Tile::from_value(3), None);
        assert_eq!(Tile::from_value(12), None);
    }

    #[test]
    fn test_spawn_value_yields_two_or_four() {
        let mut rng = SimpleRng::new(42);
        let mut saw = (false, false);
        for _ in 0..100 {
            let mut tile = Tile::EMPTY;
            tile.spawn_value(&mut rng);
            match tile.value() {
                2 => saw.0 = true,
                4 => saw.1 = true,
                v => panic!("unexpected spawn value {}", v),
            }
        }
        assert_eq!(saw, (true, true));
    }

    #[test]
    fn test_max_value_tile_cannot_merge() {
        let max = Tile::from_value(Tile::MAX_VALUE).unwrap();
        assert!(!max.can_merge_with(&max));

        let below = Tile::from_value(Tile::MAX_VALUE / 2).unwrap();
        assert!(below.can_merge_with(&below));

        let mut merged = below;
        merged.double();
        assert_eq!(merged.value(), Tile::MAX_VALUE);
        assert!(merged.value().is_power_of_two());
    }

    #[test]
    fn test_can_merge_with_needs_equal_non_empty() {
        let two = Tile::from_value(2).unwrap();
        let four = Tile::from_value(4).unwrap();
        assert!(two.can_merge_with(&two));
        assert!(!two.can_merge_with(&four));
        assert!(!Tile::EMPTY.can_merge_with(&Tile::EMPTY));
    }

    #[test]
    #[should_panic(expected = "cannot double")]
    #[cfg(debug_assertions)]
    fn test_doubling_max_value_panics_in_debug() {
        let mut max = Tile::from_value(Tile::MAX_VALUE).unwrap();
        max.double();
    }

    #[test]
    fn test_double_and_clear() {
        let mut tile = Tile::from_value(8).unwrap();
        tile.double();
        assert_eq!(tile.value(), 16);
        tile.clear();
        assert!(tile.is_empty());
    }

    #[test]
    fn test_render_centers_with_left_bias() {
        assert_eq!(Tile::EMPTY.render(), "      ");
        assert_eq!(Tile::from_value(2).unwrap().render(), "  2   ");
        assert_eq!(Tile::from_value(16).unwrap().render(), "  16  ");
        assert_eq!(Tile::from_value(128).unwrap().render(), " 128  ");
        assert_eq!(Tile::from_value(2048).unwrap().render(), " 2048 ");
        assert_eq!(Tile::from_value(65536).unwrap().render(), "65536 ");
    }

    #[test]
    fn test_render_never_truncates_wide_values() {
        let wide = Tile::from_value(1 << 20).unwrap();
        assert_eq!(wide.render(), "1048576");
    }
}
