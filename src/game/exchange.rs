use crate::{remove_tiles, Game, GameError, HistoryEntry, Phase, Tile, EXCHANGE_BAG_MINIMUM};
use rand::Rng;
use tracing::{debug, instrument};

/// Describes the reasons why [`Game::exchange_tiles`] could not be executed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, derive_more::Display, derive_more::Error)]
pub enum ExchangeError {
    /// Attempting to exchange no tiles.
    #[display("no tiles were exchanged")]
    NoTilesExchanged,
    /// Attempting to exchange while the bag holds fewer than [EXCHANGE_BAG_MINIMUM] tiles.
    #[display(
        "the bag holds {} tiles but at least {} are required",
        bag_len,
        EXCHANGE_BAG_MINIMUM
    )]
    InsufficientTilesInBag {
        /// The number of tiles in the bag.
        bag_len: usize,
    },
}

impl Game {
    /// Checks whether `tiles` can be exchanged. Otherwise, removes `tiles` from the current
    /// seat's rack, draws as many replacements from the bag, returns `tiles` to the bag,
    /// shuffles the bag, and ends the turn without scoring.
    ///
    /// # Arguments
    ///
    /// * `tiles`: The [tiles](Tile) in the current seat's rack to swap.
    /// * `rng`: Shuffles the bag.
    ///
    /// # Errors
    ///
    /// * [GameError::WrongPhase] outside of [Phase::Main].
    /// * [GameError::InvalidExchange] with [ExchangeError::NoTilesExchanged] when `tiles`
    /// is empty.
    /// * [GameError::InvalidExchange] with [ExchangeError::InsufficientTilesInBag] when the
    /// bag holds fewer than [EXCHANGE_BAG_MINIMUM] tiles.
    /// * [GameError::InsufficientTiles] when the rack does not hold `tiles`.
    #[instrument(skip(self, rng), err(level = "debug"))]
    pub fn exchange_tiles<R: Rng + ?Sized>(
        &mut self,
        tiles: &[Tile],
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.check_phase(Phase::Main)?;
        if tiles.is_empty() {
            return Err(GameError::InvalidExchange(ExchangeError::NoTilesExchanged));
        }
        if self.bag.len() < EXCHANGE_BAG_MINIMUM {
            return Err(GameError::InvalidExchange(
                ExchangeError::InsufficientTilesInBag {
                    bag_len: self.bag.len(),
                },
            ));
        }
        let rack = &mut self.seats[self.current_seat].rack;
        (self.rules.rack_validator)(rack, tiles).map_err(GameError::InsufficientTiles)?;

        let tiles_spent = remove_tiles(rack, tiles);
        let tiles_drawn: Vec<Tile> = (0..tiles_spent.len())
            .filter_map(|_| self.bag.draw())
            .collect();
        rack.extend(tiles_drawn.iter().copied());
        self.bag.put_back(tiles_spent.iter().copied());
        self.bag.shuffle(rng);
        debug!(
            seat = self.current_seat,
            tiles = tiles_spent.len(),
            "Accepted exchange"
        );

        self.end_turn(HistoryEntry {
            tiles_spent,
            tiles_drawn,
            ..HistoryEntry::default()
        });
        Ok(())
    }
}
