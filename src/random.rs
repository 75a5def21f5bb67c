use crate::{Board, PositionType, Rack, Tile, MAX_RACK_TILES};
use itertools::Itertools;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// A random lettered [tile](Tile) worth its usual points. Never a wildcard.
pub fn random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    loop {
        let tile: Tile = rng.gen();
        if !tile.is_wildcard() {
            return tile;
        }
    }
}

/// A rack holding a random, small, non-zero number of [tiles](Tile), which may include
/// wildcards.
pub fn random_rack<R: Rng + ?Sized>(rng: &mut R) -> Rack {
    let rack_len = rng.gen_range(1..=MAX_RACK_TILES);
    (0..rack_len).map(|_| rng.gen::<Tile>()).collect()
}

/// It places one [tile](Tile) for every column in a random, small, non-zero horizontal range
/// at a random row away from the edges of the board.
///
/// # Returns
///
/// The number of additional [tiles](Tile) on the board.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> usize {
    let possible_rows = Uniform::from(3..=11);
    let row: isize = possible_rows.sample(rng);
    let start: isize = rng.gen_range(0..5);
    let board_len: usize = rng.gen_range(2..=7);

    (start..start + board_len as isize)
        .filter(|&column| board.place((row, column), random_tile(rng)))
        .count()
}

/// An empty `rows` by `columns` board where every position has a random
/// [type](PositionType). The board may have no start position or several.
pub fn random_layout_board<R: Rng + ?Sized>(rng: &mut R, rows: usize, columns: usize) -> Board {
    let layout = (0..rows)
        .map(|_| {
            (0..columns)
                .map(|_| rng.gen::<PositionType>().symbol())
                .collect::<String>()
        })
        .join("\n");

    Board::from_layout(&layout).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_tile_is_lettered() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            assert!(!random_tile(&mut rng).is_wildcard());
        }
    }

    #[test]
    fn random_rack_len() {
        let rack = random_rack(&mut rand::thread_rng());

        assert!(!rack.is_empty());
        assert!(rack.len() <= MAX_RACK_TILES);
    }

    #[test]
    fn random_board_empty() {
        let mut board = Board::standard();

        let board_len = random_board(&mut rand::thread_rng(), &mut board);

        assert!(board_len > 1);
        let tiles = board.tiles().map(|(coordinate, _)| coordinate).collect_vec();
        assert_eq!(board_len, tiles.len());
        assert!(tiles.iter().map(|&(row, _)| row).all_equal());
        for ((_, column), (_, next_column)) in tiles.iter().tuple_windows() {
            assert_eq!(column + 1, *next_column);
        }
    }

    #[test]
    fn random_layout_board_size() {
        let board = random_layout_board(&mut rand::thread_rng(), 4, 6);

        assert_eq!(4, board.rows());
        assert_eq!(6, board.columns());
        assert!(board.is_empty());
    }

    #[test]
    fn random_layout_board_covers_every_type() {
        let board = random_layout_board(&mut rand::thread_rng(), 30, 30);

        let position_types = (0..30)
            .cartesian_product(0..30)
            .map(|coordinate| board.get(coordinate).unwrap().position_type)
            .unique()
            .count();
        assert_eq!(PositionType::POSITION_TYPES_LEN, position_types);
    }
}
