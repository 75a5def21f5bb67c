use std::cmp;

/// A tuple with two integer components for the row and column of a position on the board.
/// Zero-indexed with the origin at the top left.
///
/// # See Also
///
/// * [Placement](crate::Placement)
/// * [Range]
/// * [Board](crate::Board)
pub type Coordinate = (isize, isize);

/// An axis-aligned bounding box of [coordinates](Coordinate) described by its minimum
/// and maximum corners.
///
/// # See Also
///
/// * [validate_placement](crate::validate_placement)
/// * [Word](crate::Word)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Range {
    /// The top left corner.
    pub min: Coordinate,
    /// The bottom right corner.
    pub max: Coordinate,
}

impl Range {
    /// # Returns
    ///
    /// A [Range] covering exactly one [coordinate](Coordinate).
    #[inline]
    pub fn new(coordinate: Coordinate) -> Range {
        Range {
            min: coordinate,
            max: coordinate,
        }
    }

    /// Finds the minimum and maximum components from [coordinates](Coordinate) for each component.
    /// If `coordinates` is empty, [None] is returned.
    ///
    /// # Arguments
    ///
    /// * `coordinates`: An [iterator](Iterator) of [coordinates](Coordinate).
    pub fn from_coordinates(mut coordinates: impl Iterator<Item = Coordinate>) -> Option<Range> {
        let mut range = Range::new(coordinates.next()?);
        for coordinate in coordinates {
            range.include(coordinate);
        }

        Some(range)
    }

    /// Grows the bounds so that `coordinate` is [included](Range::includes).
    pub fn include(&mut self, (row, column): Coordinate) {
        self.min = (cmp::min(self.min.0, row), cmp::min(self.min.1, column));
        self.max = (cmp::max(self.max.0, row), cmp::max(self.max.1, column));
    }

    /// # Returns
    ///
    /// Whether `coordinate` lies inside the bounds, edges included.
    #[inline]
    pub fn includes(&self, (row, column): Coordinate) -> bool {
        (self.min.0..=self.max.0).contains(&row) && (self.min.1..=self.max.1).contains(&column)
    }

    /// # Returns
    ///
    /// Whether the minimum and maximum share a row or a column.
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.min.0 == self.max.0 || self.min.1 == self.max.1
    }

    /// # Returns
    ///
    /// The number of [coordinates](Coordinate) inside the bounds.
    pub fn len(&self) -> usize {
        let rows = self.max.0.abs_diff(self.min.0) + 1;
        let columns = self.max.1.abs_diff(self.min.1) + 1;
        rows * columns
    }

    /// # Returns
    ///
    /// Always `false`, since a [Range] covers at least one [coordinate](Coordinate).
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// # Returns
    ///
    /// Every [coordinate](Coordinate) inside the bounds in row then column order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let Range { min, max } = *self;
        (min.0..=max.0).flat_map(move |row| (min.1..=max.1).map(move |column| (row, column)))
    }
}

/// The direction of a line of [coordinates](Coordinate) on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Along a row, left to right.
    Horizontal,
    /// Along a column, top to bottom.
    Vertical,
}

impl Axis {
    /// # Returns
    ///
    /// Both [axes](Axis) in the order words are discovered.
    #[inline]
    pub fn axes() -> [Axis; 2] {
        [Axis::Horizontal, Axis::Vertical]
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) `offset` steps away from `coordinate` along the axis.
    #[inline]
    pub fn step(&self, (row, column): Coordinate, offset: isize) -> Coordinate {
        match self {
            Axis::Horizontal => (row, column + offset),
            Axis::Vertical => (row + offset, column),
        }
    }
}

/// Finds the adjacent [coordinates](Coordinate) from the argument [coordinate](Coordinate)
/// where adjacent is 4 directional and not diagonal.
///
/// # Returns
///
/// An array of 4 [coordinates](Coordinate) in north, south, east, west order.
pub fn adjacent_coordinates((row, column): Coordinate) -> [Coordinate; 4] {
    [
        (row - 1, column),
        (row + 1, column),
        (row, column + 1),
        (row, column - 1),
    ]
}
