use crate::{
    next_phase, score_placement, validate_challenge, validate_placement, validate_rack, Board,
    History, HistoryEntry, Phase, PlacementError, Rack, RackError, ScoredPlay, Tile, Tiles,
    WordError,
};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Decides whether a word is valid. Must be pure.
pub type Dictionary = Arc<dyn Fn(&str) -> bool + Send + Sync>;
/// Checks whether [placements](Tiles) are a legal play on the [board](Board).
pub type PlacementValidator = fn(&Tiles, &Board) -> Result<(), PlacementError>;
/// Checks whether a [rack](Rack) holds the requested [tiles](Tile).
pub type RackValidator = fn(&Rack, &[Tile]) -> Result<(), RackError>;
/// Finds and scores the words formed by [placements](Tiles) on the [board](Board).
pub type WordScorer = fn(&Tiles, &Board, &dyn Fn(&str) -> bool) -> Result<ScoredPlay, WordError>;
/// Decides the [phase](Phase) after a turn from the acting seat's [rack](Rack) and the
/// [history](History).
pub type PhaseController = fn(&Rack, &History) -> Phase;
/// Decides whether a challenge against a play [entry](HistoryEntry) succeeds.
pub type ChallengeValidator = fn(&HistoryEntry, &dyn Fn(&str) -> bool) -> bool;

/// A case insensitive set of valid words.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// # Returns
    ///
    /// An empty word list.
    #[inline]
    pub fn new() -> WordList {
        WordList::default()
    }

    /// Adds `word` to the list.
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_uppercase());
    }

    /// Whether `word` is in the list, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// The number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// # Returns
    ///
    /// A [Dictionary] accepting exactly the words in the list.
    pub fn into_dictionary(self) -> Dictionary {
        Arc::new(move |word: &str| self.contains(word))
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> WordList {
        let mut word_list = WordList::new();
        for word in iter {
            word_list.insert(word.as_ref());
        }
        word_list
    }
}

/// # Returns
///
/// Whether `word` has at least two letters. The default [Dictionary].
pub fn accept_any_word(word: &str) -> bool {
    word.chars().count() > 1
}

/// The immutable set of strategies the [game](crate::Game) consults. Every strategy has a
/// default from [Rules::default], and each `with_` method returns a modified copy.
#[derive(Clone)]
pub struct Rules {
    /// Decides whether a word is valid.
    pub dictionary: Dictionary,
    /// Checks placement geometry. Defaults to [validate_placement].
    pub placement_validator: PlacementValidator,
    /// Checks rack contents. Defaults to [validate_rack].
    pub rack_validator: RackValidator,
    /// Finds and scores words. Defaults to [score_placement].
    pub word_scorer: WordScorer,
    /// Decides the phase after each turn. Defaults to [next_phase].
    pub phase_controller: PhaseController,
    /// Decides challenges. Defaults to [validate_challenge].
    pub challenge_validator: ChallengeValidator,
    /// Whether the dictionary is consulted when playing. When `false`, words are only checked
    /// by challenges.
    pub validate_words_on_play: bool,
}

impl Rules {
    /// # Returns
    ///
    /// A copy with `dictionary` replaced.
    pub fn with_dictionary(
        self,
        dictionary: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Rules {
        Rules {
            dictionary: Arc::new(dictionary),
            ..self
        }
    }

    /// # Returns
    ///
    /// A copy with the dictionary replaced by `word_list`.
    pub fn with_word_list(self, word_list: WordList) -> Rules {
        Rules {
            dictionary: word_list.into_dictionary(),
            ..self
        }
    }

    /// # Returns
    ///
    /// A copy with `placement_validator` replaced.
    pub fn with_placement_validator(self, placement_validator: PlacementValidator) -> Rules {
        Rules {
            placement_validator,
            ..self
        }
    }

    /// # Returns
    ///
    /// A copy with `rack_validator` replaced.
    pub fn with_rack_validator(self, rack_validator: RackValidator) -> Rules {
        Rules {
            rack_validator,
            ..self
        }
    }

    /// # Returns
    ///
    /// A copy with `word_scorer` replaced.
    pub fn with_word_scorer(self, word_scorer: WordScorer) -> Rules {
        Rules {
            word_scorer,
            ..self
        }
    }

    /// # Returns
    ///
    /// A copy with `phase_controller` replaced.
    pub fn with_phase_controller(self, phase_controller: PhaseController) -> Rules {
        Rules {
            phase_controller,
            ..self
        }
    }

    /// # Returns
    ///
    /// A copy with `challenge_validator` replaced.
    pub fn with_challenge_validator(self, challenge_validator: ChallengeValidator) -> Rules {
        Rules {
            challenge_validator,
            ..self
        }
    }

    /// # Returns
    ///
    /// A copy which consults the dictionary when playing if `validate_words_on_play` is `true`,
    /// or only when challenging otherwise.
    pub fn with_validate_words_on_play(self, validate_words_on_play: bool) -> Rules {
        Rules {
            validate_words_on_play,
            ..self
        }
    }

    /// Whether `word` is accepted by the dictionary.
    #[inline]
    pub fn is_word_valid(&self, word: &str) -> bool {
        (self.dictionary)(word)
    }
}

impl Default for Rules {
    fn default() -> Rules {
        Rules {
            dictionary: Arc::new(accept_any_word),
            placement_validator: validate_placement,
            rack_validator: validate_rack,
            word_scorer: score_placement,
            phase_controller: next_phase,
            challenge_validator: validate_challenge,
            validate_words_on_play: true,
        }
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("validate_words_on_play", &self.validate_words_on_play)
            .finish_non_exhaustive()
    }
}
