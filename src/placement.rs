use crate::{Board, Coordinate, Range, Tile, RACK_CAPACITY};
use smallvec::SmallVec;

/// One [tile](Tile) being laid down at a [coordinate](Coordinate) this turn. Wildcards
/// carry the letter they stand for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    /// The [tile](Tile) being placed.
    pub tile: Tile,
    /// Where the [tile](Tile) is placed.
    pub coordinate: Coordinate,
}

impl Placement {
    /// # Returns
    ///
    /// A [`Placement`] of `tile` at `coordinate`.
    #[inline]
    pub fn new(tile: Tile, coordinate: Coordinate) -> Placement {
        Placement { tile, coordinate }
    }
}

/// The [placements](Placement) of one proposed play.
///
/// # See Also
///
/// * [validate_placement]
/// * [score_placement](crate::score_placement)
/// * [Game::play](crate::Game::play)
pub type Tiles = SmallVec<[Placement; RACK_CAPACITY]>;

/// Describes the reason why [placements](Placement) are not a legal play on the board.
#[derive(Debug, Clone, Eq, PartialEq, Hash, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// Attempting to place no [tiles](Tile).
    #[display("no tiles placed")]
    NoTilesPlaced,
    /// Attempting to place [tiles](Tile) outside of a single row or column.
    #[display("placement is not in a single row or column")]
    NotLinear,
    /// Attempting to place [tiles](Tile) off the board.
    #[display("{:?} is outside the board", coordinate)]
    OutOfBounds {
        /// The first [coordinate](Coordinate) found outside the board.
        coordinate: Coordinate,
    },
    /// Attempting to place a [tile](Tile) where one has already been placed.
    #[display("{:?} is already occupied", coordinate)]
    PositionOccupied {
        /// The first occupied [coordinate](Coordinate) found.
        coordinate: Coordinate,
    },
    /// Attempting to place [tiles](Tile) in a line with an empty gap.
    #[display("gap at {:?}", coordinate)]
    NotContiguous {
        /// The first empty [coordinate](Coordinate) found between placed [tiles](Tile).
        coordinate: Coordinate,
    },
    /// Attempting to place several [tiles](Tile) at the same [coordinate](Coordinate).
    #[display("several tiles placed at the same position")]
    Overlap,
    /// Attempting to place [tiles](Tile) that touch neither the start position nor
    /// any [tile](Tile) on the board.
    #[display("placement is not connected to the board")]
    NotConnected,
}

/// Checks whether `placements` are a legal play on `board`. Reasons are checked in order
/// and the first found is returned. The board is not changed.
///
/// Every [coordinate](Coordinate) of the bounding [range](Range) of the placements is walked
/// in order, so gaps are found as empty positions which are not being placed on.
///
/// # Errors
///
/// * [PlacementError::NoTilesPlaced] Attempting to place no [tiles](Tile).
/// * [PlacementError::NotLinear] Attempting to place [tiles](Tile) outside of a single
/// row or column.
/// * [PlacementError::OutOfBounds] Attempting to place [tiles](Tile) off the board.
/// * [PlacementError::PositionOccupied] Attempting to place a [tile](Tile) where one has
/// already been placed.
/// * [PlacementError::NotContiguous] Attempting to place [tiles](Tile) in a line with
/// an empty gap.
/// * [PlacementError::Overlap] Attempting to place several [tiles](Tile) at the same
/// [coordinate](Coordinate).
/// * [PlacementError::NotConnected] Attempting to place [tiles](Tile) that touch neither
/// the start position nor any [tile](Tile) on the board.
pub fn validate_placement(placements: &Tiles, board: &Board) -> Result<(), PlacementError> {
    let coordinates = placements.iter().map(|placement| placement.coordinate);
    let Some(range) = Range::from_coordinates(coordinates) else {
        return Err(PlacementError::NoTilesPlaced);
    };

    if !range.is_linear() {
        return Err(PlacementError::NotLinear);
    }

    let mut consumed = 0;
    let mut connected = false;
    for coordinate in range.coordinates() {
        let Some(position) = board.get(coordinate) else {
            return Err(PlacementError::OutOfBounds { coordinate });
        };

        let is_placed = placements
            .iter()
            .any(|placement| placement.coordinate == coordinate);
        if is_placed {
            if position.is_occupied() {
                return Err(PlacementError::PositionOccupied { coordinate });
            }
            consumed += 1;
        } else if !position.is_occupied() {
            return Err(PlacementError::NotContiguous { coordinate });
        }

        connected = connected || board.is_connected(coordinate);
    }

    // duplicate coordinates collapse into one step of the walk
    if consumed != placements.len() {
        return Err(PlacementError::Overlap);
    }

    if !connected {
        return Err(PlacementError::NotConnected);
    }

    Ok(())
}
