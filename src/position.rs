use crate::{Points, Tile};
use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The multipliers and connectivity of a [`PositionType`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Multipliers {
    /// Multiplies the face points of a newly placed [tile](Tile).
    pub letter: Points,
    /// Multiplies the score of a word containing a newly placed [tile](Tile).
    pub word: Points,
    /// Whether a placement touching this position counts as connected even on an empty board.
    pub counts_as_connected: bool,
}

/// Describes the kind of a [`Position`] on the board. A closed set of variants each with
/// a fixed row in the [multiplier table](PositionType::multipliers).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, FromPrimitive)]
pub enum PositionType {
    /// `0`. No modifiers.
    #[default]
    Normal = 0,
    /// `1`. The first play must touch it. Doubles the word score.
    Start = 1,
    /// `2`. Doubles the letter score.
    DoubleLetter = 2,
    /// `3`. Triples the letter score.
    TripleLetter = 3,
    /// `4`. Doubles the word score.
    DoubleWord = 4,
    /// `5`. Triples the word score.
    TripleWord = 5,
}

impl PositionType {
    /// The number of [`PositionType`] variants. 6 position types.
    pub const POSITION_TYPES_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`PositionType`] variants in order.
    #[inline]
    pub fn position_types() -> [PositionType; PositionType::POSITION_TYPES_LEN] {
        [
            PositionType::Normal,
            PositionType::Start,
            PositionType::DoubleLetter,
            PositionType::TripleLetter,
            PositionType::DoubleWord,
            PositionType::TripleWord,
        ]
    }

    /// # Returns
    ///
    /// The character describing the position type in a [layout](crate::Board::from_layout).
    #[inline]
    pub fn symbol(&self) -> char {
        match self {
            PositionType::Normal => '.',
            PositionType::Start => '*',
            PositionType::DoubleLetter => 'd',
            PositionType::TripleLetter => 't',
            PositionType::DoubleWord => 'D',
            PositionType::TripleWord => 'T',
        }
    }

    /// # Returns
    ///
    /// The position type described by `symbol`, or [None] when no position type uses it.
    pub fn from_symbol(symbol: char) -> Option<PositionType> {
        PositionType::position_types()
            .into_iter()
            .find(|position_type| position_type.symbol() == symbol)
    }

    /// # Returns
    ///
    /// The letter multiplier, word multiplier, and connectivity of the position type.
    #[inline]
    pub fn multipliers(&self) -> Multipliers {
        let (letter, word, counts_as_connected) = match self {
            PositionType::Normal => (1, 1, false),
            PositionType::Start => (1, 2, true),
            PositionType::DoubleLetter => (2, 1, false),
            PositionType::TripleLetter => (3, 1, false),
            PositionType::DoubleWord => (1, 2, false),
            PositionType::TripleWord => (1, 3, false),
        };
        Multipliers {
            letter,
            word,
            counts_as_connected,
        }
    }

    /// Whether a placement touching this position is connected.
    #[inline]
    pub fn counts_as_connected(&self) -> bool {
        self.multipliers().counts_as_connected
    }

    /// # Returns
    ///
    /// The score of a newly placed [tile](Tile) worth `points` on this position.
    #[inline]
    pub fn modify_tile_score(&self, points: Points) -> Points {
        points * self.multipliers().letter
    }

    /// # Returns
    ///
    /// The score of a word worth `score` that has a newly placed [tile](Tile) on this position.
    #[inline]
    pub fn modify_word_score(&self, score: Points) -> Points {
        score * self.multipliers().word
    }
}

impl Distribution<PositionType> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PositionType {
        let index = rng.gen_range(0..PositionType::POSITION_TYPES_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since position types cover all indexes \
                in range 0..PositionType::POSITION_TYPES_LEN (0..{:?}).",
                index,
                PositionType::POSITION_TYPES_LEN
            );
        })
    }
}

/// A square on the board with a [type](PositionType) and an optional occupying [tile](Tile).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Position {
    /// The multipliers of the square.
    pub position_type: PositionType,
    /// The [tile](Tile) placed on the square, if any.
    pub tile: Option<Tile>,
}

impl Position {
    /// # Returns
    ///
    /// An empty position of `position_type`.
    #[inline]
    pub fn new(position_type: PositionType) -> Position {
        Position {
            position_type,
            tile: None,
        }
    }

    /// Whether a [tile](Tile) has been placed here.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.tile.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn position_types() {
        assert_eq!(
            PositionType::POSITION_TYPES_LEN,
            PositionType::position_types().len()
        );
        assert_eq!(
            0,
            PositionType::position_types()
                .into_iter()
                .duplicates()
                .count()
        );
    }

    #[test]
    fn position_type_as_usize() {
        for (index, position_type) in PositionType::position_types().into_iter().enumerate() {
            assert_eq!(index, position_type as usize);
        }
    }

    #[test]
    fn symbols() {
        for position_type in PositionType::position_types() {
            assert_eq!(
                Some(position_type),
                PositionType::from_symbol(position_type.symbol())
            );
        }
        assert_eq!(Some(PositionType::Start), PositionType::from_symbol('*'));
        assert_eq!(None, PositionType::from_symbol('x'));
    }

    #[test]
    fn only_start_counts_as_connected() {
        for position_type in PositionType::position_types() {
            assert_eq!(
                position_type == PositionType::Start,
                position_type.counts_as_connected()
            );
        }
    }

    #[test]
    fn modify_tile_score() {
        assert_eq!(4, PositionType::Normal.modify_tile_score(4));
        assert_eq!(8, PositionType::DoubleLetter.modify_tile_score(4));
        assert_eq!(12, PositionType::TripleLetter.modify_tile_score(4));
        assert_eq!(4, PositionType::TripleWord.modify_tile_score(4));
    }

    #[test]
    fn modify_word_score() {
        assert_eq!(10, PositionType::Start.modify_word_score(5));
        assert_eq!(10, PositionType::DoubleWord.modify_word_score(5));
        assert_eq!(15, PositionType::TripleWord.modify_word_score(5));
        assert_eq!(5, PositionType::TripleLetter.modify_word_score(5));
    }

    #[test]
    fn sample_covers_every_type() {
        let mut rng = rand::thread_rng();
        let sampled = (0..1_000)
            .map(|_| rng.gen::<PositionType>())
            .unique()
            .count();
        assert_eq!(PositionType::POSITION_TYPES_LEN, sampled);
    }

    #[test]
    fn new_is_empty() {
        let position = Position::new(PositionType::TripleWord);
        assert!(!position.is_occupied());
        assert_eq!(Position::default(), Position::new(PositionType::Normal));
    }
}
