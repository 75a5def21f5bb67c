use crate::{Placement, Tile, Word};

/// Describes what happened on one turn or challenge.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum HistoryType {
    /// Some [tiles](Tile) were placed on the board.
    Play,
    /// Nothing happened.
    Pass,
    /// Some [tiles](Tile) were swapped with the bag.
    ExchangeTiles,
    /// A challenge against the last play was rejected.
    ChallengeFail,
    /// A challenge against the last play succeeded and the play was reverted.
    ChallengeSuccess,
    /// Not a known entry.
    #[default]
    Unknown,
}

/// An immutable record of one turn or challenge.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct HistoryEntry {
    /// What happened.
    pub history_type: HistoryType,
    /// The index of the seat the entry is about.
    pub seat_index: usize,
    /// The change in the seat's score.
    pub score: i32,
    /// The [tiles](Tile) taken out of the seat's rack, as they were held.
    pub tiles_spent: Vec<Tile>,
    /// The [placements](Placement) put on the board.
    pub tiles_played: Vec<Placement>,
    /// The [tiles](Tile) drawn from the bag into the seat's rack.
    pub tiles_drawn: Vec<Tile>,
    /// The words formed by the [placements](Placement).
    pub words_formed: Vec<Word>,
}

/// An append-only sequence of [entries](HistoryEntry). Only the last entry can be read
/// for rules decisions, and only its score can be patched once, when the game ends.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// # Returns
    ///
    /// An empty history.
    #[inline]
    pub fn new() -> History {
        History::default()
    }

    /// The number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry, if any.
    #[inline]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Every entry, oldest first.
    #[inline]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Every entry, newest first.
    #[inline]
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Adds the play out bonus to the last entry when the game ends.
    pub(crate) fn add_to_last_score(&mut self, bonus: i32) {
        if let Some(entry) = self.entries.last_mut() {
            entry.score += bonus;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_last() {
        let mut history = History::new();
        assert!(history.last().is_none());

        history.push(HistoryEntry {
            history_type: HistoryType::Pass,
            ..HistoryEntry::default()
        });
        history.push(HistoryEntry {
            history_type: HistoryType::Play,
            seat_index: 1,
            score: 12,
            ..HistoryEntry::default()
        });

        assert_eq!(2, history.len());
        assert_eq!(HistoryType::Play, history.last().unwrap().history_type);
        assert_eq!(
            vec![HistoryType::Play, HistoryType::Pass],
            history
                .iter_rev()
                .map(|entry| entry.history_type)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn add_to_last_score_only_touches_last() {
        let mut history = History::new();
        history.push(HistoryEntry {
            score: 3,
            ..HistoryEntry::default()
        });
        history.push(HistoryEntry {
            score: 10,
            ..HistoryEntry::default()
        });

        history.add_to_last_score(8);

        assert_eq!(3, history.entries()[0].score);
        assert_eq!(18, history.entries()[1].score);
    }

    #[test]
    fn add_to_last_score_empty() {
        let mut history = History::new();
        history.add_to_last_score(8);
        assert!(history.is_empty());
    }
}
