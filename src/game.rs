use crate::{
    rack_points, Bag, Board, History, HistoryEntry, HistoryType, Phase, PlacementError, Rack,
    RackError, Rules, WordError, PLAY_OUT_MULTIPLIER, SEAT_CAPACITY,
};
pub use challenge::*;
pub use exchange::*;
pub use play::*;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, instrument};
pub use view::*;

mod challenge;
mod exchange;
mod play;
#[cfg(test)]
mod test_setup;
mod view;

/// The score and [rack](Rack) of one player.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Seat {
    /// The running score.
    pub score: i32,
    /// The [tiles](crate::Tile) held.
    pub rack: Rack,
}

/// A vector of [seats](Seat), indexed by seat index.
///
/// # See Also
///
/// * [SEAT_CAPACITY]
pub type Seats = SmallVec<[Seat; SEAT_CAPACITY]>;

/// Describes the reasons why an action on a [Game] could not be executed. The game is
/// left unchanged whenever an action fails.
#[derive(Debug, Clone, Eq, PartialEq, Hash, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Attempting an action outside of the phase it requires.
    #[display("expected phase {:?} but the game is in phase {:?}", expected, actual)]
    WrongPhase {
        /// The phase the action requires.
        expected: Phase,
        /// The phase of the game.
        actual: Phase,
    },
    /// Attempting to start without any seats.
    #[display("at least one seat is required to start")]
    NotEnoughPlayers,
    /// Attempting to play or exchange [tiles](crate::Tile) not in the current seat's rack.
    #[display("{_0}")]
    InsufficientTiles(RackError),
    /// Attempting an illegal placement.
    #[display("{_0}")]
    InvalidPlacement(PlacementError),
    /// Attempting a play which forms words rejected by the dictionary.
    #[display("{_0}")]
    InvalidWord(WordError),
    /// Attempting an illegal exchange.
    #[display("{_0}")]
    InvalidExchange(exchange::ExchangeError),
    /// Attempting an illegal challenge.
    #[display("{_0}")]
    InvalidChallenge(challenge::ChallengeError),
}

/// Owns the authoritative game state and resolves every action against the [rules](Rules).
///
/// A game starts in [Phase::Setup] with no seats. Seats are
/// [added](Game::add_player) and [removed](Game::remove_player) until the game is
/// [started](Game::start), which moves it to [Phase::Main]. Each turn the current seat
/// [plays](Game::play), [passes](Game::pass), or [exchanges](Game::exchange_tiles),
/// appending one [entry](HistoryEntry) to the [history](History), after which the
/// [phase controller](Rules::phase_controller) decides whether the game has reached
/// [Phase::End]. Any seat may [challenge](Game::challenge) the most recent play.
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    phase: Phase,
    seats: Seats,
    bag: Bag,
    board: Board,
    current_seat: usize,
    history: History,
    rack_penalties: SeatValues<i32>,
}

impl Game {
    /// # Arguments
    ///
    /// * `board`: The empty board to play on.
    /// * `bag`: The [tiles](crate::Tile) to draw from. Shuffled when the game starts.
    /// * `rules`: The strategies consulted for every action.
    ///
    /// # Returns
    ///
    /// A [Game] in [Phase::Setup] with no seats.
    pub fn new(board: Board, bag: Bag, rules: Rules) -> Game {
        Game {
            rules,
            phase: Phase::Setup,
            seats: Seats::new(),
            bag,
            board,
            current_seat: 0,
            history: History::new(),
            rack_penalties: SeatValues::new(),
        }
    }

    /// # Returns
    ///
    /// A [Game] on the [standard board](Board::standard) with the
    /// [standard bag](Bag::standard).
    pub fn standard(rules: Rules) -> Game {
        Game::new(Board::standard(), Bag::standard(), rules)
    }

    /// The strategies consulted for every action.
    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Every seat, indexed by seat index.
    #[inline]
    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    /// The [tiles](crate::Tile) left to draw.
    #[inline]
    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    /// The board with every committed play.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The index of the seat whose turn it is.
    #[inline]
    pub fn current_seat(&self) -> usize {
        self.current_seat
    }

    /// Every turn and challenge so far.
    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Adds an empty seat.
    ///
    /// # Returns
    ///
    /// The index of the new seat.
    ///
    /// # Errors
    ///
    /// [GameError::WrongPhase] outside of [Phase::Setup].
    #[instrument(skip(self), err(level = "debug"))]
    pub fn add_player(&mut self) -> Result<usize, GameError> {
        self.check_phase(Phase::Setup)?;

        self.seats.push(Seat::default());
        debug!(seat = self.seats.len() - 1, "Added seat");
        Ok(self.seats.len() - 1)
    }

    /// Removes the seat at `index`, shifting later seats down. Does nothing when there is no
    /// seat at `index`.
    ///
    /// # Errors
    ///
    /// [GameError::WrongPhase] outside of [Phase::Setup].
    #[instrument(skip(self), err(level = "debug"))]
    pub fn remove_player(&mut self, index: usize) -> Result<(), GameError> {
        self.check_phase(Phase::Setup)?;

        if index < self.seats.len() {
            self.seats.remove(index);
            debug!(seat = index, "Removed seat");
        }
        Ok(())
    }

    /// Shuffles the bag, picks a random seat to go first, fills every rack, and moves the
    /// game to [Phase::Main].
    ///
    /// # Errors
    ///
    /// * [GameError::WrongPhase] outside of [Phase::Setup].
    /// * [GameError::NotEnoughPlayers] when there are no seats.
    #[instrument(skip(self, rng), err(level = "debug"))]
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.check_phase(Phase::Setup)?;
        if self.seats.is_empty() {
            return Err(GameError::NotEnoughPlayers);
        }

        self.bag.shuffle(rng);
        self.current_seat = rng.gen_range(0..self.seats.len());
        for seat in &mut self.seats {
            self.bag.fill(&mut seat.rack);
        }

        self.phase = Phase::Main;
        debug!(seat = self.current_seat, seats = self.seats.len(), "Started game");
        Ok(())
    }

    /// Ends the current seat's turn without scoring.
    ///
    /// # Errors
    ///
    /// [GameError::WrongPhase] outside of [Phase::Main].
    #[instrument(skip(self), err(level = "debug"))]
    pub fn pass(&mut self) -> Result<(), GameError> {
        self.check_phase(Phase::Main)?;

        self.end_turn(HistoryEntry::default());
        Ok(())
    }

    /// # Returns
    ///
    /// The indexes of every seat with the highest score once the game is in [Phase::End],
    /// or nothing before then.
    pub fn winners(&self) -> Vec<usize> {
        if self.phase != Phase::End {
            return Vec::new();
        }

        let Some(high_score) = self.seats.iter().map(|seat| seat.score).max() else {
            return Vec::new();
        };
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.score == high_score)
            .map(|(index, _)| index)
            .collect()
    }

    /// # Errors
    ///
    /// [GameError::WrongPhase] when the game is not in `expected`.
    fn check_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }

        Ok(())
    }

    /// Finishes the current seat's turn:
    /// 1. adds the score of `entry` to the current seat,
    /// 2. refills its rack, recording the drawn [tiles](crate::Tile) in `entry`,
    /// 3. appends `entry` as a play, exchange, or pass depending on which
    ///    [tiles](crate::Tile) it records,
    /// 4. advances to the next seat,
    /// 5. asks the [phase controller](Rules::phase_controller) for the next phase and
    ///    settles the final scores when the game ends.
    fn end_turn(&mut self, mut entry: HistoryEntry) {
        let seat_index = self.current_seat;
        let seat = &mut self.seats[seat_index];
        seat.score += entry.score;
        let drawn = self.bag.fill(&mut seat.rack);
        entry.tiles_drawn.extend(drawn);

        entry.history_type = if !entry.tiles_played.is_empty() {
            HistoryType::Play
        } else if !entry.tiles_spent.is_empty() {
            HistoryType::ExchangeTiles
        } else {
            HistoryType::Pass
        };
        entry.seat_index = seat_index;
        debug!(
            seat = seat_index,
            score = entry.score,
            history_type = ?entry.history_type,
            "Ended turn"
        );
        self.history.push(entry);

        self.current_seat = (seat_index + 1) % self.seats.len();
        self.phase = (self.rules.phase_controller)(&self.seats[seat_index].rack, &self.history);
        if self.phase == Phase::End {
            self.settle_scores(seat_index);
        }
    }

    /// Applies the final score adjustments once. When the seat at `seat_index` played out
    /// its rack, it earns [PLAY_OUT_MULTIPLIER] times the points left in every other rack,
    /// which is also added to its last [entry](HistoryEntry). Otherwise, every seat loses
    /// the points left in its own rack, and the penalties are kept so that a
    /// [challenge](Game::challenge) against the last play can give them back.
    fn settle_scores(&mut self, seat_index: usize) {
        self.rack_penalties.clear();
        let played_out = self.seats[seat_index].rack.is_empty()
            && self
                .history
                .last()
                .is_some_and(|entry| entry.history_type == HistoryType::Play);

        if played_out {
            let remaining: i32 = self
                .seats
                .iter()
                .enumerate()
                .filter(|&(index, _)| index != seat_index)
                .map(|(_, seat)| rack_points(&seat.rack))
                .sum();
            let bonus = PLAY_OUT_MULTIPLIER * remaining;
            self.seats[seat_index].score += bonus;
            self.history.add_to_last_score(bonus);
            debug!(seat = seat_index, bonus, "Seat played out");
        } else {
            self.rack_penalties = self
                .seats
                .iter()
                .map(|seat| rack_points(&seat.rack))
                .collect();
            for (seat, penalty) in self.seats.iter_mut().zip(&self.rack_penalties) {
                seat.score -= penalty;
            }
            debug!(penalties = ?self.rack_penalties, "Game ended without a play out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tile, SCORELESS_TURN_LIMIT};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use smallvec::smallvec;

    #[test]
    fn new_game_is_in_setup() {
        let game = Game::standard(Rules::default());

        assert_eq!(Phase::Setup, game.phase());
        assert!(game.seats().is_empty());
        assert_eq!(100, game.bag().len());
        assert!(game.board().is_empty());
        assert!(game.history().is_empty());
    }

    #[test]
    fn add_and_remove_players() {
        let mut game = Game::standard(Rules::default());

        assert_eq!(Ok(0), game.add_player());
        assert_eq!(Ok(1), game.add_player());
        assert_eq!(Ok(2), game.add_player());
        game.seats[2].score = 7;

        assert_eq!(Ok(()), game.remove_player(1));
        assert_eq!(2, game.seats().len());
        assert_eq!(7, game.seats()[1].score);
    }

    #[test]
    fn remove_unknown_player() {
        let mut game = Game::standard(Rules::default());
        game.add_player().unwrap();

        assert_eq!(Ok(()), game.remove_player(5));
        assert_eq!(1, game.seats().len());
    }

    #[test]
    fn add_player_after_start() {
        let mut game = Game::started(2, &mut ChaCha8Rng::seed_from_u64(1));

        assert_eq!(
            Err(GameError::WrongPhase {
                expected: Phase::Setup,
                actual: Phase::Main
            }),
            game.add_player()
        );
        assert_eq!(
            Err(GameError::WrongPhase {
                expected: Phase::Setup,
                actual: Phase::Main
            }),
            game.remove_player(0)
        );
        assert_eq!(2, game.seats().len());
    }

    #[test]
    fn start_without_players() {
        let mut game = Game::standard(Rules::default());

        assert_eq!(
            Err(GameError::NotEnoughPlayers),
            game.start(&mut ChaCha8Rng::seed_from_u64(1))
        );
        assert_eq!(Phase::Setup, game.phase());
        assert_eq!(Bag::standard(), *game.bag());
    }

    #[test]
    fn start_fills_racks() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let game = Game::started(3, &mut rng);

        assert_eq!(Phase::Main, game.phase());
        assert!(game.current_seat() < 3);
        assert_eq!(100 - 3 * 7, game.bag().len());
        for seat in game.seats() {
            assert_eq!(7, seat.rack.len());
            assert_eq!(0, seat.score);
        }
    }

    #[test]
    fn start_is_deterministic() {
        let first = Game::started(4, &mut ChaCha8Rng::seed_from_u64(42));
        let second = Game::started(4, &mut ChaCha8Rng::seed_from_u64(42));

        assert_eq!(first.current_seat(), second.current_seat());
        assert_eq!(first.seats(), second.seats());
        assert_eq!(first.bag(), second.bag());
    }

    #[test]
    fn start_twice() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut game = Game::started(1, &mut rng);

        assert_eq!(
            Err(GameError::WrongPhase {
                expected: Phase::Setup,
                actual: Phase::Main
            }),
            game.start(&mut rng)
        );
    }

    #[test]
    fn pass_before_start() {
        let mut game = Game::standard(Rules::default());
        game.add_player().unwrap();

        assert_eq!(
            Err(GameError::WrongPhase {
                expected: Phase::Main,
                actual: Phase::Setup
            }),
            game.pass()
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn pass_advances_seat() {
        let mut game = Game::started(3, &mut ChaCha8Rng::seed_from_u64(11));
        let current_seat = game.current_seat();

        game.pass().unwrap();

        assert_eq!((current_seat + 1) % 3, game.current_seat());
        let entry = game.history().last().unwrap();
        assert_eq!(HistoryType::Pass, entry.history_type);
        assert_eq!(current_seat, entry.seat_index);
        assert_eq!(0, entry.score);
        assert!(entry.tiles_drawn.is_empty());
    }

    #[test]
    fn five_passes_continue() {
        let mut game = Game::started(2, &mut ChaCha8Rng::seed_from_u64(5));

        for _ in 0..SCORELESS_TURN_LIMIT - 1 {
            game.pass().unwrap();
        }

        assert_eq!(Phase::Main, game.phase());
    }

    #[test]
    fn six_passes_end_with_rack_penalties() {
        let mut game = Game::empty_game(2);
        game.phase = Phase::Main;
        game.seats[0].rack = smallvec![Tile::new('Q', 10), Tile::new('A', 1)];
        game.seats[1].rack = smallvec![Tile::wildcard(), Tile::new('K', 5)];

        for _ in 0..SCORELESS_TURN_LIMIT {
            game.pass().unwrap();
        }

        assert_eq!(Phase::End, game.phase());
        assert_eq!(-11, game.seats()[0].score);
        assert_eq!(-5, game.seats()[1].score);
        assert_eq!(vec![1], game.winners());
        assert_eq!(
            Err(GameError::WrongPhase {
                expected: Phase::Main,
                actual: Phase::End
            }),
            game.pass()
        );
    }

    #[test]
    fn winners_before_end() {
        let game = Game::started(2, &mut ChaCha8Rng::seed_from_u64(2));
        assert!(game.winners().is_empty());
    }

    #[test]
    fn winners_tied() {
        let mut game = Game::empty_game(3);
        game.phase = Phase::End;
        game.seats[0].score = 30;
        game.seats[1].score = 12;
        game.seats[2].score = 30;

        assert_eq!(vec![0, 2], game.winners());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            "expected phase Main but the game is in phase Setup",
            GameError::WrongPhase {
                expected: Phase::Main,
                actual: Phase::Setup
            }
            .to_string()
        );
        assert_eq!(
            "at least one seat is required to start",
            GameError::NotEnoughPlayers.to_string()
        );
    }
}
