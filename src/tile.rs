use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The face value of a [`Tile`].
pub type Points = i32;

/// The letter shown on an unassigned wildcard [`Tile`].
pub const WILDCARD_LETTER: char = '?';

/// The number of distinct letters in the [English distribution](letter_distribution),
/// including the wildcard. 26 letters and 1 wildcard.
pub const LETTERS_LEN: usize = 27;

/// Describes an immutable tile with a letter and a point value in a game. A tile worth
/// `0` points is a wildcard.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tile {
    /// The letter shown on the tile. Upper case for letters, [WILDCARD_LETTER] for an
    /// unassigned wildcard.
    pub letter: char,
    /// The face value of the tile.
    pub points: Points,
}

impl Tile {
    /// # Returns
    ///
    /// A [`Tile`] with `letter` normalized to upper case.
    #[inline]
    pub fn new(letter: char, points: Points) -> Tile {
        Tile {
            letter: letter.to_ascii_uppercase(),
            points,
        }
    }

    /// # Returns
    ///
    /// An unassigned wildcard [`Tile`].
    #[inline]
    pub fn wildcard() -> Tile {
        Tile::new(WILDCARD_LETTER, 0)
    }

    /// # Returns
    ///
    /// Whether the tile is worth nothing and may stand for any letter.
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.points == 0
    }

    /// # Returns
    ///
    /// A copy of this wildcard standing for `letter`. Tiles with points are returned unchanged.
    #[inline]
    pub fn assign(&self, letter: char) -> Tile {
        if self.is_wildcard() {
            Tile::new(letter, 0)
        } else {
            *self
        }
    }
}

/// # Returns
///
/// The English letter distribution as `(tile, count)` pairs in alphabetical order with
/// the wildcard last. 100 tiles in total.
#[inline]
pub fn letter_distribution() -> [(Tile, usize); LETTERS_LEN] {
    [
        (Tile::new('A', 1), 9),
        (Tile::new('B', 3), 2),
        (Tile::new('C', 3), 2),
        (Tile::new('D', 2), 4),
        (Tile::new('E', 1), 12),
        (Tile::new('F', 4), 2),
        (Tile::new('G', 2), 3),
        (Tile::new('H', 4), 2),
        (Tile::new('I', 1), 9),
        (Tile::new('J', 8), 1),
        (Tile::new('K', 5), 1),
        (Tile::new('L', 1), 4),
        (Tile::new('M', 3), 2),
        (Tile::new('N', 1), 6),
        (Tile::new('O', 1), 8),
        (Tile::new('P', 3), 2),
        (Tile::new('Q', 10), 1),
        (Tile::new('R', 1), 6),
        (Tile::new('S', 1), 4),
        (Tile::new('T', 1), 6),
        (Tile::new('U', 1), 4),
        (Tile::new('V', 4), 2),
        (Tile::new('W', 4), 2),
        (Tile::new('X', 8), 1),
        (Tile::new('Y', 4), 2),
        (Tile::new('Z', 10), 1),
        (Tile::wildcard(), 2),
    ]
}

/// # Returns
///
/// The face value of `letter` in the [English distribution](letter_distribution), or
/// [None] when `letter` is not part of it.
pub fn letter_points(letter: char) -> Option<Points> {
    let letter = letter.to_ascii_uppercase();
    letter_distribution()
        .into_iter()
        .find(|(tile, _)| tile.letter == letter)
        .map(|(tile, _)| tile.points)
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        let index = rng.gen_range(0..LETTERS_LEN);
        letter_distribution()[index].0
    }
}
