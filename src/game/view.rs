use crate::{Board, Game, History, Phase, Rack, SEAT_CAPACITY};
use smallvec::SmallVec;

/// A vector of one number for each seat.
pub type SeatValues<T> = SmallVec<[T; SEAT_CAPACITY]>;

/// Immutably borrows the public properties of a [`Game`].
#[derive(Debug)]
pub struct GameView<'a> {
    /// The current phase.
    pub phase: Phase,
    /// The number of [tiles](crate::Tile) left to draw.
    pub bag_len: usize,
    /// The board with every committed play.
    pub board: &'a Board,
    /// The score of each seat.
    pub scores: SeatValues<i32>,
    /// The number of [tiles](crate::Tile) in each seat's rack.
    pub rack_lens: SeatValues<usize>,
    /// The index of the seat whose turn it is.
    pub current_seat: usize,
    /// Every turn and challenge so far.
    pub history: &'a History,
}

impl Game {
    /// # Returns
    ///
    /// A new [`GameView`] struct, which immutably borrows properties from [`Game`], but
    /// with the bag replaced by its length and each rack replaced by its length.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            phase: self.phase,
            bag_len: self.bag.len(),
            board: &self.board,
            scores: self.seats.iter().map(|seat| seat.score).collect(),
            rack_lens: self.seats.iter().map(|seat| seat.rack.len()).collect(),
            current_seat: self.current_seat,
            history: &self.history,
        }
    }

    /// # Returns
    ///
    /// The [tiles](crate::Tile) held by the requested seat or `None` if out of bounds.
    pub fn get_rack(&self, index: usize) -> Option<&Rack> {
        self.seats.get(index).map(|seat| &seat.rack)
    }
}
