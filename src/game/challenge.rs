use crate::{
    remove_tiles, Game, GameError, HistoryEntry, HistoryType, Phase, CHALLENGE_PENALTY,
};
use rand::Rng;
use tracing::{debug, instrument};

/// Describes the reasons why [`Game::challenge`] could not be executed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, derive_more::Display, derive_more::Error)]
pub enum ChallengeError {
    /// Attempting to challenge when the last entry is not a play.
    #[display("the last turn was not a play")]
    NoPlayToChallenge,
    /// Attempting to challenge a play which has already been challenged.
    #[display("the last play has already been challenged")]
    PlayAlreadyChallenged,
    /// Attempting to challenge from a seat which does not exist.
    #[display("seat {} does not exist", challenger)]
    InvalidChallenger {
        /// The index of the requested challenger.
        challenger: usize,
    },
}

/// # Returns
///
/// Whether some word formed by the play recorded in `entry` is rejected by `is_word_valid`.
/// The default [challenge validator](crate::Rules::challenge_validator).
pub fn validate_challenge(entry: &HistoryEntry, is_word_valid: &dyn Fn(&str) -> bool) -> bool {
    entry
        .words_formed
        .iter()
        .any(|word| !is_word_valid(word.text.as_str()))
}

impl Game {
    /// Challenges the most recent play on behalf of the seat at `challenger`. The words the
    /// play formed are checked against the [dictionary](crate::Rules::dictionary) by the
    /// [challenge validator](crate::Rules::challenge_validator), whatever
    /// [validate_words_on_play](crate::Rules::validate_words_on_play) is set to.
    ///
    /// When the challenge succeeds, the play is reverted: the tiles it drew leave the
    /// challenged seat's rack and go back to the bag, which is shuffled, the tiles it spent
    /// return to the rack, its score is taken back, and its tiles are lifted off the board.
    /// When the play ended the game, the rack penalties every seat was charged are given
    /// back. The game returns to [Phase::Main] and play continues with the current seat.
    ///
    /// When the challenge fails, the challenger loses [CHALLENGE_PENALTY] points.
    ///
    /// # Returns
    ///
    /// Whether the challenge succeeded.
    ///
    /// # Errors
    ///
    /// * [GameError::WrongPhase] outside of [Phase::Main] and [Phase::End].
    /// * [GameError::InvalidChallenge] with [ChallengeError::PlayAlreadyChallenged] when the
    /// last entry is a challenge.
    /// * [GameError::InvalidChallenge] with [ChallengeError::NoPlayToChallenge] when the last
    /// entry is not a play.
    /// * [GameError::InvalidChallenge] with [ChallengeError::InvalidChallenger] when there is
    /// no seat at `challenger`.
    #[instrument(skip(self, rng), err(level = "debug"))]
    pub fn challenge<R: Rng + ?Sized>(
        &mut self,
        challenger: usize,
        rng: &mut R,
    ) -> Result<bool, GameError> {
        if self.phase != Phase::End {
            self.check_phase(Phase::Main)?;
        }
        let entry = self.check_challenge(challenger)?;

        let is_word_valid = |word: &str| self.rules.is_word_valid(word);
        if (self.rules.challenge_validator)(entry, &is_word_valid) {
            let entry = entry.clone();
            self.revert_play(&entry, rng);
            Ok(true)
        } else {
            self.seats[challenger].score -= CHALLENGE_PENALTY;
            self.history.push(HistoryEntry {
                history_type: HistoryType::ChallengeFail,
                seat_index: challenger,
                score: -CHALLENGE_PENALTY,
                ..HistoryEntry::default()
            });
            debug!(seat = challenger, "Challenge failed");
            Ok(false)
        }
    }

    /// # Returns
    ///
    /// The play [entry](HistoryEntry) being challenged.
    ///
    /// # Errors
    ///
    /// [GameError::InvalidChallenge] when the last entry cannot be challenged by the seat at
    /// `challenger`.
    fn check_challenge(&self, challenger: usize) -> Result<&HistoryEntry, GameError> {
        let entry = match self.history.last() {
            Some(entry)
                if matches!(
                    entry.history_type,
                    HistoryType::ChallengeFail | HistoryType::ChallengeSuccess
                ) =>
            {
                return Err(GameError::InvalidChallenge(
                    ChallengeError::PlayAlreadyChallenged,
                ));
            }
            Some(entry) if entry.history_type == HistoryType::Play => entry,
            _ => {
                return Err(GameError::InvalidChallenge(
                    ChallengeError::NoPlayToChallenge,
                ))
            }
        };
        if challenger >= self.seats.len() {
            return Err(GameError::InvalidChallenge(
                ChallengeError::InvalidChallenger { challenger },
            ));
        }

        Ok(entry)
    }

    /// Reverses the board, rack, bag, and score effects of the play recorded in `entry`
    /// and appends a [HistoryType::ChallengeSuccess] entry. When the play ended the game,
    /// the rack penalties charged at the end are given back.
    fn revert_play<R: Rng + ?Sized>(&mut self, entry: &HistoryEntry, rng: &mut R) {
        let seat = &mut self.seats[entry.seat_index];
        let returned = remove_tiles(&mut seat.rack, &entry.tiles_drawn);
        seat.rack.extend(entry.tiles_spent.iter().copied());
        seat.score -= entry.score;
        for placement in &entry.tiles_played {
            self.board.remove(placement.coordinate);
        }
        self.bag.put_back(returned);
        self.bag.shuffle(rng);
        if self.phase == Phase::End {
            for (seat, penalty) in self.seats.iter_mut().zip(self.rack_penalties.drain(..)) {
                seat.score += penalty;
            }
        }

        self.history.push(HistoryEntry {
            history_type: HistoryType::ChallengeSuccess,
            seat_index: entry.seat_index,
            score: -entry.score,
            tiles_played: entry.tiles_played.clone(),
            words_formed: entry.words_formed.clone(),
            ..HistoryEntry::default()
        });
        self.phase = Phase::Main;
        debug!(
            seat = entry.seat_index,
            score = entry.score,
            "Challenge succeeded"
        );
    }
}
