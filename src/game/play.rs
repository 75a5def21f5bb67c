use crate::{remove_tiles, Game, GameError, HistoryEntry, Phase, ScoredPlay, Tile, Tiles};
use tracing::{debug, instrument};

impl Game {
    /// Checks whether `placements` is a legal play for the current seat. Otherwise, removes
    /// the placed [tiles](Tile) from the current seat's rack, puts them on the board, adds
    /// the score earned, refills the rack, and ends the turn.
    ///
    /// Checks run in order: the [rack validator](crate::Rules::rack_validator), the
    /// [placement validator](crate::Rules::placement_validator), then the
    /// [word scorer](crate::Rules::word_scorer). The scorer consults the
    /// [dictionary](crate::Rules::dictionary) only when
    /// [validate_words_on_play](crate::Rules::validate_words_on_play) is set.
    ///
    /// # Arguments
    ///
    /// * `placements`: The [tiles](Tile) to lay down. Wildcards carry the letter they
    /// stand for.
    ///
    /// # Returns
    ///
    /// The words formed and the score earned, before any play out bonus.
    ///
    /// # Errors
    ///
    /// * [GameError::WrongPhase] outside of [Phase::Main].
    /// * [GameError::InsufficientTiles] when the rack does not hold the placed [tiles](Tile).
    /// * [GameError::InvalidPlacement] when the placement is illegal.
    /// * [GameError::InvalidWord] when some word formed is rejected.
    #[instrument(skip(self), err(level = "debug"))]
    pub fn play(&mut self, placements: &Tiles) -> Result<ScoredPlay, GameError> {
        self.check_phase(Phase::Main)?;

        let requested: Vec<Tile> = placements.iter().map(|placement| placement.tile).collect();
        (self.rules.rack_validator)(&self.seats[self.current_seat].rack, &requested)
            .map_err(GameError::InsufficientTiles)?;
        (self.rules.placement_validator)(placements, &self.board)
            .map_err(GameError::InvalidPlacement)?;
        let scored = if self.rules.validate_words_on_play {
            (self.rules.word_scorer)(placements, &self.board, &|word: &str| {
                self.rules.is_word_valid(word)
            })
        } else {
            (self.rules.word_scorer)(placements, &self.board, &|_: &str| true)
        }
        .map_err(GameError::InvalidWord)?;

        let tiles_spent = remove_tiles(&mut self.seats[self.current_seat].rack, &requested);
        for placement in placements {
            self.board.place(placement.coordinate, placement.tile);
        }
        debug!(
            seat = self.current_seat,
            score = scored.score,
            words = scored.words.len(),
            "Accepted play"
        );

        self.end_turn(HistoryEntry {
            score: scored.score,
            tiles_spent,
            tiles_played: placements.to_vec(),
            words_formed: scored.words.clone(),
            ..HistoryEntry::default()
        });
        Ok(scored)
    }
}
