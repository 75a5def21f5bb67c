//! Concrete structs to represent and protect the state of a tile-based word game with methods
//! to validate, score, and resolve each action of the game.
//!
//! ## Summary
//!
//! Implemented through `3` phases of the game: `Setup`, `Main`, and `End`. Seats are added
//! during `Setup`. The game [starts](Game::start) by shuffling the bag, filling every rack,
//! and picking a random seat to go first. During `Main`, each seat takes turns to
//! [play](Game::play), [pass](Game::pass), or [exchange](Game::exchange_tiles)
//! [tiles](Tile), and any seat may [challenge](Game::challenge) the most recent play.
//! Seats earn points by laying down [tiles](Tile) in a line which forms words with the
//! [tiles](Tile) already on the board. The game ends when some seat plays out its rack or
//! after [SCORELESS_TURN_LIMIT] turns in a row score nothing. The seat with the most points
//! wins.
//!
//! ## What are the phases of the game?
//!
//! * `Setup`: Seats are [added](Game::add_player) and [removed](Game::remove_player).
//! No [tiles](Tile) have been drawn.
//! * `Main`: The turns of the game. Each turn appends exactly one [entry](HistoryEntry) to
//! the [history](History) and asks the [phase controller](Rules::phase_controller) for the
//! next phase.
//! * `End`: The game is over. Only a [challenge](Game::challenge) against the last play is
//! allowed, and a successful one returns the game to `Main`.
//!
//! Represented by [Phase].
//!
//! ## How is a play resolved?
//!
//! 1. The [rack validator](Rules::rack_validator) checks that the current seat holds every
//! placed [tile](Tile). Wildcards match any wildcard, whatever letter they stand for.
//! 2. The [placement validator](Rules::placement_validator) checks that the
//! [placements](Tiles) lie in one line, inside the board, on empty positions, without gaps,
//! and touch either the start position or a [tile](Tile) already on the board.
//! 3. The [word scorer](Rules::word_scorer) finds every word the play forms and scores it.
//! 4. The placed [tiles](Tile) move from the rack to the board, the rack is refilled from
//! the bag, and the turn passes to the next seat.
//!
//! Nothing changes unless every check passes.
//!
//! ## How are points calculated?
//!
//! The score of a word is the sum of its letters. [Tiles](Tile) already on the board count
//! their face points. Newly placed [tiles](Tile) are multiplied by the
//! [letter multiplier](PositionType::modify_tile_score) of their position, and then the
//! word is multiplied by the [word multiplier](PositionType::modify_word_score) of each
//! newly placed position in turn. Placing [a full rack](MAX_RACK_TILES) earns an extra
//! [full rack bonus](FULL_RACK_BONUS).
//!
//! When a seat plays out its rack, it earns [PLAY_OUT_MULTIPLIER] times the points left in
//! every other rack. Otherwise, when the game ends, every seat loses the points left in its
//! own rack.
//!
//! ## How are challenges resolved?
//!
//! The words of the last play are checked against the [dictionary](Rules::dictionary). When
//! some word is rejected, the play is reverted from the [history](History): its
//! [tiles](Tile) leave the board, the [tiles](Tile) it drew return to the bag, and its score
//! is taken back. Otherwise, the challenger loses [CHALLENGE_PENALTY] points.
//!
//! ## How is the game configured?
//!
//! Every rule is a strategy on the immutable [Rules] struct with a default. The dictionary
//! can be checked on every play or only when challenged. See [Rules::default].
//!
//! ## How is the game viewed?
//!
//! [Game::view] returns an immutable representation of the state of the game visible to all
//! seats. [Game::get_rack] shares the private [tiles](Tile) of each individual seat.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds helper methods to build games, racks, and boards for
//! common scenarios, and random data generators for [tiles](Tile), racks, and boards.

// Document!
#![warn(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    missing_debug_implementations,
    unsafe_code
)]
#![warn(unused, unreachable_pub)]

pub use bag::*;
pub use board::*;
pub use consts::*;
pub use coordinate::*;
pub use game::*;
pub use history::*;
pub use phase::*;
pub use placement::*;
pub use position::*;
pub use rack::*;
#[cfg(test)]
pub use random::*;
pub use rules::*;
pub use runtime::*;
pub use tile::*;
pub use word::*;

mod bag;
mod board;
mod consts;
mod coordinate;
mod game;
mod history;
mod phase;
mod placement;
mod position;
mod rack;
#[cfg(test)]
mod random;
mod rules;
mod runtime;
mod tile;
mod word;
