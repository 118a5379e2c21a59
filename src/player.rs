use crate::direction::Direction;

/// Étape du chemin d'exploration : la cellule quittée et la direction prise pour la quitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waypoint {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

/// Représente l'état de la souris (sa position et son orientation).
#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
    /// Pile de retour arrière : chemin simple du départ jusqu'à la cellule courante
    pub path: Vec<Waypoint>,
}

impl Default for Player {
    /// Le simulateur démarre toujours en (0,0), orienté North.
    fn default() -> Self {
        Self::new(0, 0, Direction::North)
    }
}

impl Player {
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self {
            x,
            y,
            direction,
            path: Vec::new(),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.turn_right();
    }

    /// Avance d'une case dans la direction courante.
    pub fn step_forward(&mut self) {
        (self.x, self.y) = self.direction.forward_cell(self.x, self.y);
    }

    /// Enregistre la cellule courante avant de la quitter.
    pub fn push_waypoint(&mut self) {
        self.path.push(Waypoint {
            x: self.x,
            y: self.y,
            direction: self.direction,
        });
    }

    /// Positions du chemin parcouru, cellule courante incluse.
    pub fn trail(&self) -> Vec<(i32, i32)> {
        self.path
            .iter()
            .map(|waypoint| (waypoint.x, waypoint.y))
            .chain(std::iter::once(self.position()))
            .collect()
    }
}
