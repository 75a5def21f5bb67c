use crate::{History, HistoryType, Rack, SCORELESS_TURN_LIMIT};

/// Describes the phase of the game.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Seats are being added or removed. No tiles have been drawn.
    #[default]
    Setup,
    /// Seats take turns playing, passing, exchanging, and challenging.
    Main,
    /// The game is over. Only a challenge against the last play is allowed.
    End,
    /// Not a known phase.
    Unknown,
}

/// Decides the phase after a turn. The game ends when the seat that acted has played out
/// its rack or when [SCORELESS_TURN_LIMIT] consecutive turns have scored nothing.
///
/// # Arguments
///
/// * `rack`: The rack of the seat that just acted.
/// * `history`: Every turn so far, including the one just taken.
pub fn next_phase(rack: &Rack, history: &History) -> Phase {
    if rack.is_empty() || scoreless_turns(history) >= SCORELESS_TURN_LIMIT {
        Phase::End
    } else {
        Phase::Main
    }
}

/// Counts consecutive turns without a positive score, newest first. A
/// [successful challenge](HistoryType::ChallengeSuccess) is skipped together with the
/// reverted play before it, without being counted. Counting stops at the first turn with
/// a positive score or at [SCORELESS_TURN_LIMIT].
pub fn scoreless_turns(history: &History) -> usize {
    let mut scoreless = 0;
    let mut entries = history.iter_rev();
    while let Some(entry) = entries.next() {
        if entry.history_type == HistoryType::ChallengeSuccess {
            entries.next();
            continue;
        }
        if entry.score > 0 {
            break;
        }

        scoreless += 1;
        if scoreless >= SCORELESS_TURN_LIMIT {
            break;
        }
    }

    scoreless
}
