//! Exploration du labyrinthe en profondeur.
//!
//! La souris avance toujours vers le premier voisin libre et non visité, dans l'ordre
//! North, East, South, West. Dans une impasse, elle dépile sa pile de retour et revient
//! physiquement sur ses pas jusqu'à la dernière cellule offrant une alternative.

use log::{debug, info, trace};

use crate::api::MouseApi;
use crate::direction::{Direction, Turn};
use crate::error::{MouseError, Result};
use crate::map::MazeMap;
use crate::player::{Player, Waypoint};

/// Résultat d'une étape de recherche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// La souris est sur la cellule cible.
    Arrived,
    /// La souris est entrée dans une nouvelle cellule.
    Advanced(Direction),
    /// Impasse : la souris est revenue sur la cellule dépilée.
    Backtracked(Waypoint),
    /// Plus rien à explorer, la cible est inaccessible.
    Exhausted,
}

pub struct Mouse<A: MouseApi> {
    api: A,
    map: MazeMap,
    player: Player,
    target: (i32, i32),
}

impl<A: MouseApi> Mouse<A> {
    /// Souris au départ (0,0) d'un labyrinthe 16x16.
    pub fn new(api: A, target: (i32, i32)) -> Result<Self> {
        Self::with_map(api, MazeMap::default(), target)
    }

    pub fn with_map(api: A, mut map: MazeMap, target: (i32, i32)) -> Result<Self> {
        if !map.in_bounds(target.0, target.1) {
            return Err(MouseError::OutOfBounds {
                x: target.0,
                y: target.1,
            });
        }
        let player = Player::default();
        map.mark_visited(player.x, player.y)?;
        Ok(Self {
            api,
            map,
            player,
            target,
        })
    }

    pub fn map(&self) -> &MazeMap {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn target(&self) -> (i32, i32) {
        self.target
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Cherche un chemin jusqu'à la cible.
    ///
    /// Retourne `Ok(true)` une fois la cible atteinte, `Ok(false)` si toutes les cellules
    /// accessibles ont été visitées sans la trouver. Une erreur du simulateur arrête tout.
    pub fn search_maze(&mut self) -> Result<bool> {
        let mut steps = 0usize;
        loop {
            match self.step()? {
                Step::Arrived => {
                    info!(
                        "target {:?} reached after {} steps, path length {}",
                        self.target,
                        steps,
                        self.player.path.len()
                    );
                    return Ok(true);
                }
                Step::Exhausted => {
                    info!("no path to {:?} after {} steps", self.target, steps);
                    return Ok(false);
                }
                Step::Advanced(_) | Step::Backtracked(_) => steps += 1,
            }
        }
    }

    /// Une itération : lecture des murs, puis avance, retour arrière ou arrêt.
    pub fn step(&mut self) -> Result<Step> {
        self.sense()?;

        if self.player.position() == self.target {
            return Ok(Step::Arrived);
        }

        if let Some(direction) = self.next_direction()? {
            self.face(direction)?;
            self.player.push_waypoint();
            if let Err(e) = self.move_forward() {
                self.player.path.pop();
                return Err(e);
            }
            self.map.mark_visited(self.player.x, self.player.y)?;
            debug!(
                "advance {:?} to ({}, {})",
                direction, self.player.x, self.player.y
            );
            return Ok(Step::Advanced(direction));
        }

        match self.player.path.pop() {
            Some(waypoint) => {
                self.backtrack(waypoint)?;
                Ok(Step::Backtracked(waypoint))
            }
            None => Ok(Step::Exhausted),
        }
    }

    /// Positions du départ jusqu'à la cellule courante, sans les branches abandonnées.
    pub fn discovered_path(&self) -> Vec<(i32, i32)> {
        self.player.trail()
    }

    /// Avance d'une case. Refuse si un mur connu bloque le passage.
    /// Ne marque pas la cellule d'arrivée comme visitée.
    pub fn move_forward(&mut self) -> Result<()> {
        let Player { x, y, direction, .. } = self.player;
        if self.map.wall_at(x, y, direction)? {
            return Err(MouseError::BlockedMove { x, y, direction });
        }
        let (nx, ny) = direction.forward_cell(x, y);
        if !self.map.in_bounds(nx, ny) {
            return Err(MouseError::OutOfBounds { x: nx, y: ny });
        }
        self.api.move_forward()?;
        self.player.step_forward();
        Ok(())
    }

    pub fn turn_left(&mut self) -> Result<()> {
        self.api.turn_left()?;
        self.player.turn_left();
        Ok(())
    }

    pub fn turn_right(&mut self) -> Result<()> {
        self.api.turn_right()?;
        self.player.turn_right();
        Ok(())
    }

    /// Enregistre un mur détecté, ainsi que sa face sur la cellule voisine.
    pub fn update_wall(&mut self, x: i32, y: i32, side: Direction) -> Result<()> {
        self.map.set_wall(x, y, side, true)
    }

    /// Envoie au visualiseur tous les murs connus.
    pub fn display_walls(&mut self) -> Result<()> {
        for (x, y, side) in self.map.walls() {
            self.api.set_wall(x, y, side)?;
        }
        Ok(())
    }

    fn sense(&mut self) -> Result<()> {
        let (x, y) = self.player.position();
        let walls = self.api.sense_walls(x, y)?;
        trace!("sensed {:?} at ({}, {})", walls, x, y);
        // un côté ouvert sur un mur connu fait paniquer la carte
        for side in Direction::ALL {
            if walls.get(side) {
                self.update_wall(x, y, side)?;
            } else {
                self.map.set_wall(x, y, side, false)?;
            }
        }
        Ok(())
    }

    fn next_direction(&self) -> Result<Option<Direction>> {
        let (x, y) = self.player.position();
        for side in Direction::ALL {
            if !self.map.is_open(x, y, side)? {
                continue;
            }
            let (nx, ny) = side.forward_cell(x, y);
            if !self.map.is_visited(nx, ny)? {
                return Ok(Some(side));
            }
        }
        Ok(None)
    }

    fn face(&mut self, target: Direction) -> Result<()> {
        for turn in self.player.direction.turns_to(target) {
            match turn {
                Turn::Left => self.turn_left()?,
                Turn::Right => self.turn_right()?,
            }
        }
        Ok(())
    }

    // Revient sur `waypoint` puis reprend l'orientation enregistrée au départ.
    fn backtrack(&mut self, waypoint: Waypoint) -> Result<()> {
        self.face(waypoint.direction.turn_back())?;
        self.move_forward()?;
        assert_eq!(
            self.player.position(),
            (waypoint.x, waypoint.y),
            "backtracking left the exploration path"
        );
        self.face(waypoint.direction)?;
        debug!("backtrack to ({}, {})", waypoint.x, waypoint.y);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labyrinth_mock::{Command, MockLabyrinth};
    use crate::walls::Walls;

    fn mouse_in(labyrinth: MockLabyrinth, target: (i32, i32)) -> Mouse<MockLabyrinth> {
        let map = MazeMap::new(labyrinth.width(), labyrinth.height());
        Mouse::with_map(labyrinth, map, target).unwrap()
    }

    // Capteur qui ne voit jamais aucun mur, pas même ceux du pourtour.
    struct BlindSensor;

    impl MouseApi for BlindSensor {
        fn sense_walls(&mut self, _x: i32, _y: i32) -> Result<Walls> {
            Ok(Walls::default())
        }

        fn move_forward(&mut self) -> Result<()> {
            Ok(())
        }

        fn turn_left(&mut self) -> Result<()> {
            Ok(())
        }

        fn turn_right(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    #[should_panic(expected = "cannot be removed")]
    fn sensor_contradicting_a_known_wall_panics() {
        let mut mouse = Mouse::with_map(BlindSensor, MazeMap::new(2, 2), (1, 1)).unwrap();
        let _ = mouse.search_maze();
    }

    #[test]
    fn truthful_sensing_keeps_known_walls() {
        let mut labyrinth = MockLabyrinth::open(2, 2);
        labyrinth.add_wall(0, 0, Direction::North).unwrap();
        let mut mouse = mouse_in(labyrinth, (1, 1));
        assert!(mouse.search_maze().unwrap());
        assert!(mouse.map().wall_at(0, 0, Direction::North).unwrap());
        assert!(mouse.map().wall_at(0, 1, Direction::South).unwrap());
        assert!(mouse.map().wall_at(0, 0, Direction::West).unwrap());
    }

    #[test]
    fn start_cell_is_visited() {
        let mouse = mouse_in(MockLabyrinth::open(2, 2), (1, 1));
        assert!(mouse.map().is_visited(0, 0).unwrap());
        assert_eq!(mouse.player().direction, Direction::North);
    }

    #[test]
    fn target_outside_maze_is_rejected() {
        let map = MazeMap::new(2, 2);
        let result = Mouse::with_map(MockLabyrinth::open(2, 2), map, (2, 0));
        assert!(matches!(result, Err(MouseError::OutOfBounds { x: 2, y: 0 })));
    }

    #[test]
    fn one_cell_forward_is_found() {
        let mut mouse = mouse_in(MockLabyrinth::open(1, 2), (0, 1));
        assert!(mouse.search_maze().unwrap());
        assert_eq!(mouse.discovered_path(), vec![(0, 0), (0, 1)]);
        assert_eq!(
            mouse.api().commands(),
            &[
                Command::Sense(0, 0),
                Command::MoveForward,
                Command::Sense(0, 1),
            ]
        );
    }

    #[test]
    fn enclosed_start_has_no_path() {
        let mut labyrinth = MockLabyrinth::open(3, 3);
        labyrinth.enclose(0, 0).unwrap();
        let mut mouse = mouse_in(labyrinth, (2, 2));
        assert!(!mouse.search_maze().unwrap());
        assert!(mouse.player().path.is_empty());
        assert_eq!(mouse.player().position(), (0, 0));
    }

    #[test]
    fn turns_update_facing_and_issue_commands() {
        let mut mouse = mouse_in(MockLabyrinth::open(2, 2), (1, 1));
        for _ in 0..4 {
            mouse.turn_left().unwrap();
        }
        assert_eq!(mouse.player().direction, Direction::North);
        mouse.turn_right().unwrap();
        assert_eq!(mouse.player().direction, Direction::East);
        mouse.turn_left().unwrap();
        assert_eq!(mouse.player().direction, Direction::North);
        assert_eq!(mouse.player().position(), (0, 0));
        assert_eq!(mouse.api().commands().len(), 6);
    }

    #[test]
    fn move_forward_refuses_known_wall() {
        let mut mouse = mouse_in(MockLabyrinth::open(2, 2), (1, 1));
        mouse.update_wall(0, 0, Direction::North).unwrap();
        assert!(mouse.map().wall_at(0, 1, Direction::South).unwrap());
        assert!(matches!(
            mouse.move_forward(),
            Err(MouseError::BlockedMove {
                x: 0,
                y: 0,
                direction: Direction::North
            })
        ));
        assert_eq!(mouse.player().position(), (0, 0));
        assert!(mouse.api().commands().is_empty());
    }

    #[test]
    fn move_forward_does_not_mark_visited() {
        let mut mouse = mouse_in(MockLabyrinth::open(2, 2), (1, 1));
        mouse.move_forward().unwrap();
        assert_eq!(mouse.player().position(), (0, 1));
        assert!(!mouse.map().is_visited(0, 1).unwrap());
    }

    #[test]
    fn backtrack_restores_recorded_position_and_facing() {
        // Cul-de-sac au nord de la case de départ : (0,0) -> (0,1) puis retour.
        let mut labyrinth = MockLabyrinth::open(2, 2);
        labyrinth.add_wall(0, 1, Direction::East).unwrap();
        labyrinth.add_wall(0, 0, Direction::East).unwrap();
        let mut mouse = mouse_in(labyrinth, (1, 1));

        assert_eq!(mouse.step().unwrap(), Step::Advanced(Direction::North));
        let pushed = *mouse.player().path.last().unwrap();

        let step = mouse.step().unwrap();
        assert_eq!(step, Step::Backtracked(pushed));
        assert_eq!(mouse.player().position(), (pushed.x, pushed.y));
        assert_eq!(mouse.player().direction, pushed.direction);
        assert!(mouse.player().path.is_empty());

        assert_eq!(mouse.step().unwrap(), Step::Exhausted);
    }

    #[test]
    fn display_walls_forwards_known_walls() {
        let mut mouse = mouse_in(MockLabyrinth::open(1, 1), (0, 0));
        mouse.display_walls().unwrap();
        assert_eq!(mouse.api().displayed_walls().len(), 4);
    }
}
