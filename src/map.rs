use log::trace;

use crate::cell::{Cell, CellState};
use crate::direction::Direction;
use crate::error::{MouseError, Result};

/// Largeur du labyrinthe du simulateur.
pub const MAZE_WIDTH: i32 = 16;
/// Hauteur du labyrinthe du simulateur.
pub const MAZE_HEIGHT: i32 = 16;
/// Plus grand côté accepté en ligne de commande.
pub const MAX_MAZE_SIDE: i32 = 256;

/// Carte du labyrinthe connue de la souris.
///
/// Les cellules sont stockées ligne par ligne dans un seul vecteur, indexées par (x, y)
/// avec (0, 0) en bas à gauche. Les murs du pourtour sont posés à la construction,
/// les autres sont découverts au fil de l'exploration et ne disparaissent jamais.
#[derive(Debug, Clone)]
pub struct MazeMap {
    width: i32,
    height: i32,
    grid: Vec<Cell>,
}

impl Default for MazeMap {
    fn default() -> Self {
        Self::new(MAZE_WIDTH, MAZE_HEIGHT)
    }
}

impl MazeMap {
    /// Crée une carte `width` x `height` entourée de murs.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "maze must have at least one cell");
        let mut grid = vec![Cell::new(); (width * height) as usize];
        for y in 0..height {
            for x in 0..width {
                let walls = &mut grid[(y * width + x) as usize].walls;
                walls.north = y == height - 1;
                walls.east = x == width - 1;
                walls.south = y == 0;
                walls.west = x == 0;
            }
        }
        Self {
            width,
            height,
            grid,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if self.in_bounds(x, y) {
            Ok((y * self.width + x) as usize)
        } else {
            Err(MouseError::OutOfBounds { x, y })
        }
    }

    /// Récupère une cellule en lecture seule.
    pub fn cell(&self, x: i32, y: i32) -> Result<&Cell> {
        let index = self.index(x, y)?;
        Ok(&self.grid[index])
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Result<&mut Cell> {
        let index = self.index(x, y)?;
        Ok(&mut self.grid[index])
    }

    pub fn wall_at(&self, x: i32, y: i32, side: Direction) -> Result<bool> {
        Ok(self.cell(x, y)?.walls.get(side))
    }

    /// Pose un mur sur le côté `side` de (x, y) et sur le côté opposé de la cellule voisine.
    ///
    /// Un mur connu ne peut pas être retiré : demander `present = false` sur un mur
    /// déjà posé est une incohérence et fait paniquer.
    pub fn set_wall(&mut self, x: i32, y: i32, side: Direction, present: bool) -> Result<()> {
        let cell = self.cell_mut(x, y)?;
        if !present {
            assert!(
                !cell.walls.get(side),
                "wall {side:?} of ({x}, {y}) is known and cannot be removed"
            );
            return Ok(());
        }
        cell.walls.set(side, true);

        if let Some((nx, ny)) = self.neighbor(x, y, side) {
            self.cell_mut(nx, ny)?.walls.set(side.turn_back(), true);
        }
        trace!("wall {:?} set on ({}, {})", side, x, y);
        Ok(())
    }

    pub fn mark_visited(&mut self, x: i32, y: i32) -> Result<()> {
        self.cell_mut(x, y)?.state = CellState::Visited;
        Ok(())
    }

    pub fn is_visited(&self, x: i32, y: i32) -> Result<bool> {
        Ok(self.cell(x, y)?.is_visited())
    }

    /// Cellule adjacente dans la direction `side`, si elle est dans la grille.
    pub fn neighbor(&self, x: i32, y: i32, side: Direction) -> Option<(i32, i32)> {
        let (nx, ny) = side.forward_cell(x, y);
        self.in_bounds(nx, ny).then_some((nx, ny))
    }

    /// Vrai si aucun mur connu ne sépare (x, y) de son voisin `side` et que ce voisin existe.
    pub fn is_open(&self, x: i32, y: i32, side: Direction) -> Result<bool> {
        Ok(!self.wall_at(x, y, side)? && self.neighbor(x, y, side).is_some())
    }

    /// Tous les murs connus, cellule par cellule. Un mur partagé apparaît une fois par cellule.
    pub fn walls(&self) -> impl Iterator<Item = (i32, i32, Direction)> + '_ {
        self.grid.iter().enumerate().flat_map(move |(index, cell)| {
            let x = index as i32 % self.width;
            let y = index as i32 / self.width;
            cell.walls.sides().map(move |side| (x, y, side))
        })
    }
}
