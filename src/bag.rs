use crate::{letter_distribution, Points, Rack, Tile, MAX_RACK_TILES};
use rand::seq::SliceRandom;
use rand::Rng;

/// This is a bag of all the [tiles](Tile) that haven't been drawn yet. Tiles are drawn
/// from the end.
///
/// # See Also
///
/// * [Game](crate::Game)
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Bag {
    tiles: Vec<Tile>,
}

impl Bag {
    /// # Returns
    ///
    /// An empty bag.
    #[inline]
    pub fn new() -> Bag {
        Bag::default()
    }

    /// # Returns
    ///
    /// An unshuffled bag of the 100 [tiles](Tile) in the
    /// [English distribution](letter_distribution).
    pub fn standard() -> Bag {
        letter_distribution()
            .into_iter()
            .flat_map(|(tile, count)| vec![tile; count])
            .collect()
    }

    /// The number of [tiles](Tile) in the bag.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the bag holds no [tiles](Tile).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The [tiles](Tile) in the bag in draw order, last drawn first.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The sum of face points of every [tile](Tile) in the bag.
    pub fn points(&self) -> Points {
        self.tiles.iter().map(|tile| tile.points).sum()
    }

    /// Removes one [tile](Tile) from the bag, or returns [None] when the bag is empty.
    #[inline]
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Draws [tiles](Tile) one by one into `rack` until it holds
    /// [a full rack](MAX_RACK_TILES) or the bag is empty.
    ///
    /// # Returns
    ///
    /// The [tiles](Tile) that were drawn, in draw order.
    pub fn fill(&mut self, rack: &mut Rack) -> Vec<Tile> {
        let mut drawn = Vec::with_capacity(MAX_RACK_TILES.saturating_sub(rack.len()));
        while rack.len() < MAX_RACK_TILES {
            let Some(tile) = self.draw() else {
                break;
            };
            rack.push(tile);
            drawn.push(tile);
        }

        drawn
    }

    /// Returns [tiles](Tile) to the bag without shuffling.
    pub fn put_back(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }

    /// Shuffles the bag in place with a Fisher-Yates shuffle driven by `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
    }
}

impl FromIterator<Tile> for Bag {
    fn from_iter<T: IntoIterator<Item = Tile>>(iter: T) -> Bag {
        Bag {
            tiles: iter.into_iter().collect(),
        }
    }
}
