use crate::walls::Walls;

/// État d'une cellule de la carte (visitée ou pas).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    NotVisited,
    Visited,
}

/// Représente une cellule du labyrinthe.
///
/// Une cellule possède une configuration de murs et un état indiquant si elle a été visitée.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    /// Les murs délimitant la cellule.
    pub walls: Walls,
    /// L'état de la cellule.
    pub state: CellState,
}

impl Cell {
    /// Crée une cellule sans mur, non visitée.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visited(&self) -> bool {
        self.state == CellState::Visited
    }
}
