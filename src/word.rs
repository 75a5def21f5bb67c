use crate::{
    Axis, Board, Coordinate, Placement, PositionType, Range, Tiles, FULL_RACK_BONUS,
    MAX_RACK_TILES,
};
use smallvec::SmallVec;

/// A contiguous line of [tiles](crate::Tile) resolved into its text and score.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Word {
    /// The letters of the word in reading order.
    pub text: String,
    /// The score of the word after letter and word multipliers.
    pub score: i32,
    /// The [coordinates](Coordinate) spanned by the word.
    pub range: Range,
}

/// The words formed by a legal play and the total score they earn.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ScoredPlay {
    /// The sum of the scores of `words`, plus the [full rack bonus](FULL_RACK_BONUS)
    /// when earned.
    pub score: i32,
    /// Every word of two or more letters touching a newly placed [tile](crate::Tile).
    pub words: Vec<Word>,
}

/// Describes the words rejected when [scoring](score_placement) a play.
#[derive(Debug, Clone, Eq, PartialEq, Hash, derive_more::Display, derive_more::Error)]
#[display("invalid words: {:?}", words)]
pub struct WordError {
    /// Every rejected word, including single letters which are not part of any longer word.
    pub words: Vec<Word>,
}

/// Finds every word formed by `placements` on `board`, scores each word, and checks each
/// word with `is_word_valid`. The board is not changed.
///
/// # Word Discovery
///
/// For each axis and each placement not yet absorbed along that axis, a span is grown
/// in both directions while the next position is on the board and either occupied or
/// being placed on. Spans of one letter are not words. A placement outside of every
/// longer span is a single letter, which is always rejected.
///
/// # Points Calculation
///
/// [Tiles](crate::Tile) already on the board count their face points. Newly placed
/// [tiles](crate::Tile) count their face points after the
/// [letter multiplier](PositionType::modify_tile_score) of their position. Then the
/// [word multiplier](PositionType::modify_word_score) of each newly placed
/// position is applied in turn, so two double word positions quadruple a word.
///
/// When at least [a full rack](MAX_RACK_TILES) of [tiles](crate::Tile) is placed,
/// [FULL_RACK_BONUS] is added to the total.
///
/// # Errors
///
/// [WordError] with every word rejected by `is_word_valid` and every single letter.
pub fn score_placement(
    placements: &Tiles,
    board: &Board,
    is_word_valid: &dyn Fn(&str) -> bool,
) -> Result<ScoredPlay, WordError> {
    let placed_index = |coordinate: Coordinate| {
        placements
            .iter()
            .position(|placement| placement.coordinate == coordinate)
    };
    let is_filled = |coordinate: Coordinate| {
        board.is_occupied(coordinate) || placed_index(coordinate).is_some()
    };

    let mut absorbed: SmallVec<[bool; MAX_RACK_TILES]> =
        SmallVec::from_elem(false, placements.len());
    let mut words = Vec::new();
    for axis in Axis::axes() {
        let mut consumed: SmallVec<[bool; MAX_RACK_TILES]> =
            SmallVec::from_elem(false, placements.len());
        for (index, placement) in placements.iter().enumerate() {
            if consumed[index] {
                continue;
            }
            consumed[index] = true;

            let mut range = Range::new(placement.coordinate);
            for direction in [-1, 1] {
                let mut next = axis.step(placement.coordinate, direction);
                while board.get(next).is_some() && is_filled(next) {
                    range.include(next);
                    if let Some(other) = placed_index(next) {
                        consumed[other] = true;
                    }
                    next = axis.step(next, direction);
                }
            }

            if range.len() < 2 {
                continue;
            }
            for (other, candidate) in placements.iter().enumerate() {
                absorbed[other] = absorbed[other] || range.includes(candidate.coordinate);
            }
            words.push(build_word(range, placements, board));
        }
    }

    let single_letters = placements
        .iter()
        .zip(absorbed)
        .filter(|&(_, absorbed)| !absorbed)
        .map(|(placement, _)| build_word(Range::new(placement.coordinate), placements, board));
    let invalid_words: Vec<Word> = words
        .iter()
        .filter(|word| !is_word_valid(word.text.as_str()))
        .cloned()
        .chain(single_letters)
        .collect();
    if !invalid_words.is_empty() {
        return Err(WordError {
            words: invalid_words,
        });
    }

    let mut score: i32 = words.iter().map(|word| word.score).sum();
    if placements.len() >= MAX_RACK_TILES {
        score += FULL_RACK_BONUS;
    }

    Ok(ScoredPlay { score, words })
}

/// Reads the letters along `range`, taking each letter from the board when the position
/// is occupied and from `placements` otherwise, and scores them.
fn build_word(range: Range, placements: &[Placement], board: &Board) -> Word {
    let mut text = String::with_capacity(range.len());
    let mut score = 0;
    let mut word_multipliers: SmallVec<[PositionType; MAX_RACK_TILES]> = SmallVec::new();

    for coordinate in range.coordinates() {
        let Some(position) = board.get(coordinate) else {
            continue;
        };

        if let Some(tile) = position.tile {
            text.push(tile.letter);
            score += tile.points;
        } else if let Some(placement) = placements
            .iter()
            .find(|placement| placement.coordinate == coordinate)
        {
            let position_type = position.position_type;
            text.push(placement.tile.letter);
            score += position_type.modify_tile_score(placement.tile.points);
            word_multipliers.push(position_type);
        }
    }

    for position_type in word_multipliers {
        score = position_type.modify_word_score(score);
    }

    Word { text, score, range }
}
