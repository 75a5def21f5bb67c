use crate::{adjacent_coordinates, Coordinate, Position, PositionType, Tile};
use itertools::Itertools;

/// The premium square layout of the standard board, one row per line.
///
/// * `.`: [PositionType::Normal]
/// * `*`: [PositionType::Start]
/// * `d`: [PositionType::DoubleLetter]
/// * `t`: [PositionType::TripleLetter]
/// * `D`: [PositionType::DoubleWord]
/// * `T`: [PositionType::TripleWord]
pub const STANDARD_LAYOUT: &str = "\
T..d...T...d..T
.D...t...t...D.
..D...d.d...D..
d..D...d...D..d
....D.....D....
.t...t...t...t.
..d...d.d...d..
T..d...*...d..T
..d...d.d...d..
.t...t...t...t.
....D.....D....
d..D...d...D..d
..D...d.d...D..
.D...t...t...D.
T..d...T...d..T";

/// Describes the reason why a layout could not be parsed into a [`Board`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// The layout contains no rows or no columns.
    #[display("layout is empty")]
    Empty,
    /// Some row does not have as many columns as the first row.
    #[display("row {} has {} columns, expected {}", row, columns, expected)]
    Ragged {
        /// The index of the offending row.
        row: usize,
        /// The number of columns in the offending row.
        columns: usize,
        /// The number of columns in the first row.
        expected: usize,
    },
    /// Some character does not describe a [position type](PositionType).
    #[display("unknown position type {:?} at {:?}", symbol, coordinate)]
    UnknownSymbol {
        /// The unrecognized character.
        symbol: char,
        /// Where the character was found.
        coordinate: Coordinate,
    },
}

/// A grid of [positions](Position) with a fixed size. Lookups outside the grid return [None].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    rows: usize,
    columns: usize,
    positions: Vec<Position>,
}

impl Board {
    /// # Returns
    ///
    /// A `rows` by `columns` board of [normal](PositionType::Normal) positions.
    pub fn new(rows: usize, columns: usize) -> Board {
        Board {
            rows,
            columns,
            positions: vec![Position::default(); rows * columns],
        }
    }

    /// # Returns
    ///
    /// The empty [standard](STANDARD_LAYOUT) `15` by `15` board.
    pub fn standard() -> Board {
        Board::from_layout(STANDARD_LAYOUT)
            .unwrap_or_else(|error| unreachable!("standard layout should parse: {}", error))
    }

    /// Parses a layout with one line per row and one character per
    /// [position type](PositionType), as in [STANDARD_LAYOUT]. Surrounding whitespace of
    /// each line is ignored.
    ///
    /// # Errors
    ///
    /// * [LayoutError::Empty] The layout has no rows or no columns.
    /// * [LayoutError::Ragged] Some row is not as long as the first row.
    /// * [LayoutError::UnknownSymbol] Some character is not a position type.
    pub fn from_layout(layout: &str) -> Result<Board, LayoutError> {
        let lines = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect_vec();
        let rows = lines.len();
        let columns = lines.first().map_or(0, |line| line.chars().count());
        if rows == 0 || columns == 0 {
            return Err(LayoutError::Empty);
        }

        let mut positions = Vec::with_capacity(rows * columns);
        for (row, line) in lines.into_iter().enumerate() {
            let row_columns = line.chars().count();
            if row_columns != columns {
                return Err(LayoutError::Ragged {
                    row,
                    columns: row_columns,
                    expected: columns,
                });
            }

            for (column, symbol) in line.chars().enumerate() {
                let position_type =
                    PositionType::from_symbol(symbol).ok_or(LayoutError::UnknownSymbol {
                        symbol,
                        coordinate: (row as isize, column as isize),
                    })?;
                positions.push(Position::new(position_type));
            }
        }

        Ok(Board {
            rows,
            columns,
            positions,
        })
    }

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, (row, column): Coordinate) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|&row| row < self.rows)?;
        let column = usize::try_from(column)
            .ok()
            .filter(|&column| column < self.columns)?;
        Some(row * self.columns + column)
    }

    /// # Returns
    ///
    /// The [position](Position) at `coordinate`, or [None] outside the grid.
    #[inline]
    pub fn get(&self, coordinate: Coordinate) -> Option<&Position> {
        self.index(coordinate).map(|index| &self.positions[index])
    }

    /// # Returns
    ///
    /// The [tile](Tile) at `coordinate`, or [None] when empty or outside the grid.
    #[inline]
    pub fn tile(&self, coordinate: Coordinate) -> Option<Tile> {
        self.get(coordinate).and_then(|position| position.tile)
    }

    /// Whether a [tile](Tile) has been placed at `coordinate`.
    #[inline]
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.tile(coordinate).is_some()
    }

    /// # Returns
    ///
    /// The neighboring [positions](Position) in north, south, east, west order, with [None]
    /// for neighbors outside the grid.
    pub fn neighbors(&self, coordinate: Coordinate) -> [Option<&Position>; 4] {
        adjacent_coordinates(coordinate).map(|adjacent| self.get(adjacent))
    }

    /// # Returns
    ///
    /// Whether a placement at `coordinate` would be connected, either because its
    /// [position type](PositionType::counts_as_connected) says so or because some
    /// neighbor is occupied.
    pub fn is_connected(&self, coordinate: Coordinate) -> bool {
        let Some(position) = self.get(coordinate) else {
            return false;
        };

        position.position_type.counts_as_connected()
            || self
                .neighbors(coordinate)
                .into_iter()
                .flatten()
                .any(Position::is_occupied)
    }

    /// Places `tile` at `coordinate`, replacing any previous [tile](Tile).
    ///
    /// # Returns
    ///
    /// Whether `coordinate` is inside the grid.
    pub fn place(&mut self, coordinate: Coordinate, tile: Tile) -> bool {
        let Some(index) = self.index(coordinate) else {
            return false;
        };
        self.positions[index].tile = Some(tile);
        true
    }

    /// Removes the [tile](Tile) at `coordinate`.
    ///
    /// # Returns
    ///
    /// The removed [tile](Tile), if any.
    pub fn remove(&mut self, coordinate: Coordinate) -> Option<Tile> {
        let index = self.index(coordinate)?;
        self.positions[index].tile.take()
    }

    /// # Returns
    ///
    /// Every occupied [coordinate](Coordinate) with its [tile](Tile) in row then column order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coordinate, Tile)> + '_ {
        self.positions.iter().enumerate().filter_map(|(index, position)| {
            position.tile.map(|tile| {
                let coordinate = (
                    (index / self.columns) as isize,
                    (index % self.columns) as isize,
                );
                (coordinate, tile)
            })
        })
    }

    /// Whether no [tile](Tile) has been placed.
    pub fn is_empty(&self) -> bool {
        !self.positions.iter().any(Position::is_occupied)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::standard()
    }
}
