use konst::primitive::parse_usize;
use konst::{option, result};

/// The maximum number of [tiles](crate::Tile) a seat may hold in its rack. `7` tiles.
///
/// # See Also
///
/// * [Game::start](crate::Game::start)
/// * [FULL_RACK_BONUS]
pub const MAX_RACK_TILES: usize = 7;
/// The amount of extra points given when a [play](crate::Tiles) places at least
/// [a full rack](MAX_RACK_TILES) of [tiles](crate::Tile). `50` additional points.
///
/// # See Also
///
/// * [score_placement](crate::score_placement)
pub const FULL_RACK_BONUS: i32 = 50;
/// The amount of points taken from a seat whose [challenge](crate::Game::challenge) fails.
/// `5` points.
pub const CHALLENGE_PENALTY: i32 = 5;
/// The number of consecutive scoreless turns which ends the game. `6` turns.
///
/// # See Also
///
/// * [next_phase](crate::next_phase)
pub const SCORELESS_TURN_LIMIT: usize = 6;
/// The minimum number of [tiles](crate::Tile) the bag must hold before
/// [tiles may be exchanged](crate::Game::exchange_tiles). `7` tiles.
pub const EXCHANGE_BAG_MINIMUM: usize = 7;
/// The seat that plays out earns this many times the face points left in
/// every other rack. `2` times.
pub const PLAY_OUT_MULTIPLIER: i32 = 2;
/// The number of rows and columns of the [standard board](crate::Board::standard). `15`.
pub const BOARD_SIZE: usize = 15;
/// All small, dynamically allocated structs which store seat data will be stored on the stack
/// until the number of seats becomes greater than `SEAT_CAPACITY`. When there are more than
/// `SEAT_CAPACITY` seats, seat data will be heap allocated. If the environment variable
/// named `SEAT_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `4`.
///
/// # See Also
///
/// * [Game](crate::Game)
/// * [Seats](crate::Seats)
pub const SEAT_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("SEAT_CAPACITY"), |str| result::ok!(parse_usize(
        str
    ))),
    4
);
/// All small, dynamically allocated properties which store rack data will be stored
/// on the stack until the number of [tiles](crate::Tile) in a rack becomes greater
/// than `RACK_CAPACITY`. If the environment variable named `RACK_CAPACITY` is present at
/// compile time and is able to be parsed into a `usize`, set to the value of the
/// environment variable. Otherwise, it is set to [MAX_RACK_TILES].
///
/// # See Also
///
/// * [Rack](crate::Rack)
/// * [Tiles](crate::Tiles)
pub const RACK_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("RACK_CAPACITY"), |str| result::ok!(parse_usize(
        str
    ))),
    MAX_RACK_TILES
);
const _: () = assert!(SEAT_CAPACITY > 0);
const _: () = assert!(RACK_CAPACITY > 0);
