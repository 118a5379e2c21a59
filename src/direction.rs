/// Orientation absolue de la souris dans la grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Rotation relative de 90°.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Direction {
    /// Ordre dans lequel la recherche essaie les voisins.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Tourne à gauche (par ex. North -> West)
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Tourne à droite (par ex. North -> East)
    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Fait demi tour (par ex. North -> South )
    pub fn turn_back(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn rotate(self, turn: Turn) -> Self {
        match turn {
            Turn::Left => self.turn_left(),
            Turn::Right => self.turn_right(),
        }
    }

    /// Cellule située devant (x, y) dans cette direction.
    /// Ne vérifie ni les bornes ni les murs : c'est le rôle de l'appelant.
    pub fn forward_cell(self, x: i32, y: i32) -> (i32, i32) {
        let (dx, dy) = match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        };
        (x + dx, y + dy)
    }

    /// Suite minimale de rotations pour passer de `self` à `target`.
    /// Le demi-tour se fait par la droite.
    pub fn turns_to(self, target: Direction) -> Vec<Turn> {
        let quarter_turns = (target.index() + 4 - self.index()) % 4;
        match quarter_turns {
            0 => vec![],
            1 => vec![Turn::Right],
            2 => vec![Turn::Right, Turn::Right],
            _ => vec![Turn::Left],
        }
    }

    /// Lettre utilisée par le protocole du simulateur ("n", "e", "s", "w").
    pub fn letter(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::East => "e",
            Direction::South => "s",
            Direction::West => "w",
        }
    }

    pub fn from_letter(side: &str) -> Option<Self> {
        match side {
            "n" => Some(Direction::North),
            "e" => Some(Direction::East),
            "s" => Some(Direction::South),
            "w" => Some(Direction::West),
            _ => None,
        }
    }

    // rang dans le sens horaire depuis le nord
    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}
