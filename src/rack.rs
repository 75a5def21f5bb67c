use crate::{Points, Tile, RACK_CAPACITY};
use smallvec::SmallVec;

/// A vector of [tiles](Tile) held by one seat.
///
/// # See Also
///
/// * [MAX_RACK_TILES](crate::MAX_RACK_TILES)
/// * [Seat](crate::Seat)
pub type Rack = SmallVec<[Tile; RACK_CAPACITY]>;

/// Describes the [tiles](Tile) requested from a rack which it does not hold.
#[derive(Debug, Clone, Eq, PartialEq, Hash, derive_more::Display, derive_more::Error)]
#[display("rack is missing tiles {:?}", missing)]
pub struct RackError {
    /// The requested [tiles](Tile) left over after matching every rack [tile](Tile).
    pub missing: Vec<Tile>,
}

/// Whether `rack_tile` can be spent as `requested`. Wildcards match any other wildcard
/// regardless of letter, so a wildcard standing for some letter matches the blank wildcard
/// in the rack. Other [tiles](Tile) must be equal.
#[inline]
pub fn tiles_match(rack_tile: &Tile, requested: &Tile) -> bool {
    if rack_tile.is_wildcard() && requested.is_wildcard() {
        return true;
    }
    rack_tile == requested
}

/// Checks that every requested [tile](Tile) can be matched to a distinct [tile](Tile) in `rack`
/// with [tiles_match].
///
/// # Errors
///
/// [RackError] with every requested [tile](Tile) left unmatched.
pub fn validate_rack(rack: &Rack, requested: &[Tile]) -> Result<(), RackError> {
    let mut remaining = rack.clone();
    let mut missing = Vec::new();
    for tile in requested {
        match remaining
            .iter()
            .position(|rack_tile| tiles_match(rack_tile, tile))
        {
            Some(index) => {
                remaining.remove(index);
            }
            None => missing.push(*tile),
        }
    }

    if !missing.is_empty() {
        return Err(RackError { missing });
    }

    Ok(())
}

/// Removes one matching [tile](Tile) from `rack` for each requested [tile](Tile). Requested
/// [tiles](Tile) without a match are skipped, so [validate_rack] should be called first.
///
/// # Returns
///
/// The [tiles](Tile) taken out of the rack as they were held, so wildcards come back blank.
pub fn remove_tiles(rack: &mut Rack, requested: &[Tile]) -> Vec<Tile> {
    requested
        .iter()
        .filter_map(|tile| {
            rack.iter()
                .position(|rack_tile| tiles_match(rack_tile, tile))
                .map(|index| rack.remove(index))
        })
        .collect()
}

/// The sum of face points of every [tile](Tile) in `rack`.
#[inline]
pub fn rack_points(rack: &Rack) -> Points {
    rack.iter().map(|tile| tile.points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_rack;
    use smallvec::smallvec;

    fn rack() -> Rack {
        smallvec![
            Tile::new('C', 3),
            Tile::new('A', 1),
            Tile::wildcard(),
            Tile::new('A', 1),
        ]
    }

    #[test]
    fn wildcards_match_by_points() {
        assert!(tiles_match(&Tile::wildcard(), &Tile::new('E', 0)));
        assert!(tiles_match(&Tile::new('E', 0), &Tile::wildcard()));
        assert!(!tiles_match(&Tile::wildcard(), &Tile::new('E', 1)));
        assert!(!tiles_match(&Tile::new('E', 1), &Tile::new('A', 1)));
        assert!(tiles_match(&Tile::new('E', 1), &Tile::new('E', 1)));
    }

    #[test]
    fn validate_exact_multiset() {
        let rack = rack();

        assert_eq!(
            Ok(()),
            validate_rack(&rack, &[Tile::new('A', 1), Tile::new('A', 1), Tile::new('T', 0)])
        );
    }

    #[test]
    fn validate_missing_duplicates() {
        let rack = rack();

        assert_eq!(
            Err(RackError {
                missing: vec![Tile::new('C', 3), Tile::new('Z', 10)]
            }),
            validate_rack(
                &rack,
                &[
                    Tile::new('C', 3),
                    Tile::new('C', 3),
                    Tile::new('Z', 10),
                    Tile::new('A', 1)
                ]
            )
        );
    }

    #[test]
    fn validate_random_rack_against_itself() {
        let rack = random_rack(&mut rand::thread_rng());
        assert_eq!(Ok(()), validate_rack(&rack, &rack));
    }

    #[test]
    fn remove_returns_rack_tiles() {
        let mut rack = rack();

        let removed = remove_tiles(&mut rack, &[Tile::new('T', 0), Tile::new('A', 1)]);

        assert_eq!(vec![Tile::wildcard(), Tile::new('A', 1)], removed);
        let expected: Rack = smallvec![Tile::new('C', 3), Tile::new('A', 1)];
        assert_eq!(expected, rack);
    }

    #[test]
    fn test_rack_points() {
        assert_eq!(5, rack_points(&rack()));
        assert_eq!(0, rack_points(&Rack::new()));
    }
}
