use crate::{
    letter_points, Axis, Bag, Board, Coordinate, Game, Placement, Rack, Rules, Seat, Tile, Tiles,
};
use rand::Rng;

impl Game {
    /// Generates an empty [Game] with `seats` empty seats.
    ///
    /// # Returns
    ///
    /// A [Game] struct with the properties set to the following:
    /// * `rules`: The default rules.
    /// * `phase`: [Phase::Setup](crate::Phase::Setup).
    /// * `seats`: `seats` seats with no score and an empty rack.
    /// * `bag`: An empty bag.
    /// * `board`: An empty standard board.
    /// * `current_seat`: `0`.
    /// * `history`: An empty history.
    pub(crate) fn empty_game(seats: usize) -> Game {
        let mut game = Game::new(Board::standard(), Bag::new(), Rules::default());
        game.seats.extend((0..seats).map(|_| Seat::default()));
        game
    }

    /// A standard [Game] with `seats` seats which has been [started](Game::start).
    pub(crate) fn started<R: Rng + ?Sized>(seats: usize, rng: &mut R) -> Game {
        let mut game = Game::standard(Rules::default());
        for _ in 0..seats {
            game.add_player().unwrap();
        }
        game.start(rng).unwrap();
        game
    }
}

/// A rack holding one [tile](Tile) for each letter of `letters`, worth its usual points.
pub(crate) fn rack(letters: &str) -> Rack {
    letters
        .chars()
        .map(|letter| Tile::new(letter, letter_points(letter).unwrap_or(0)))
        .collect()
}

/// Placements spelling `letters` from `start` along `axis`.
pub(crate) fn placements(letters: &str, start: Coordinate, axis: Axis) -> Tiles {
    rack(letters)
        .into_iter()
        .enumerate()
        .map(|(offset, tile)| Placement::new(tile, axis.step(start, offset as isize)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{History, Phase};

    #[test]
    fn empty_game() {
        let game = Game::empty_game(3);

        assert_eq!(Phase::Setup, game.phase);
        assert_eq!(3, game.seats.len());
        assert!(game.bag.is_empty());
        assert_eq!(Board::standard(), game.board);
        assert_eq!(0, game.current_seat);
        assert_eq!(History::new(), game.history);
    }

    #[test]
    fn test_placements() {
        let tiles = placements("DOG", (7, 5), Axis::Vertical);

        assert_eq!(Placement::new(Tile::new('D', 2), (7, 5)), tiles[0]);
        assert_eq!(Placement::new(Tile::new('O', 1), (8, 5)), tiles[1]);
        assert_eq!(Placement::new(Tile::new('G', 2), (9, 5)), tiles[2]);
    }
}
