use crate::direction::Direction;

/// Présence d'un mur sur chacun des 4 côtés d'une cellule.
///
/// Sert aussi de réponse du capteur : `true` = mur détecté.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Walls {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Walls {
    pub fn get(&self, side: Direction) -> bool {
        match side {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, side: Direction, present: bool) {
        match side {
            Direction::North => self.north = present,
            Direction::East => self.east = present,
            Direction::South => self.south = present,
            Direction::West => self.west = present,
        }
    }

    /// Côtés fermés, dans l'ordre N, E, S, W.
    pub fn sides(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|&side| self.get(side))
    }
}
