//! Labyrinthe simulé en mémoire, utilisé par les tests et par le serveur de simulation.

use std::collections::HashSet;

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::api::MouseApi;
use crate::direction::Direction;
use crate::error::{MouseError, Result};
use crate::map::MazeMap;
use crate::player::Player;
use crate::walls::Walls;

/// Commande reçue par le simulateur, dans l'ordre d'arrivée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Sense(i32, i32),
    MoveForward,
    TurnLeft,
    TurnRight,
}

/// Vérité terrain d'un labyrinthe et pose réelle du robot qui s'y déplace.
#[derive(Debug, Clone)]
pub struct MockLabyrinth {
    truth: MazeMap,
    robot: Player,
    commands: Vec<Command>,
    displayed: Vec<(i32, i32, Direction)>,
}

impl MockLabyrinth {
    /// Labyrinthe sans mur intérieur.
    pub fn open(width: i32, height: i32) -> Self {
        Self {
            truth: MazeMap::new(width, height),
            robot: Player::default(),
            commands: Vec::new(),
            displayed: Vec::new(),
        }
    }

    /// Labyrinthe parfait (un seul chemin entre deux cellules), creusé en profondeur
    /// avec des choix aléatoires depuis (0,0).
    pub fn random<R: Rng + ?Sized>(width: i32, height: i32, rng: &mut R) -> Result<Self> {
        let mut labyrinth = Self::open(width, height);
        let mut passages: HashSet<(i32, i32, Direction)> = HashSet::new();
        let mut carved = vec![false; (width * height) as usize];
        let mut stack = vec![(0, 0)];
        carved[0] = true;

        while let Some(&(x, y)) = stack.last() {
            let candidates: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&side| {
                    labyrinth
                        .truth
                        .neighbor(x, y, side)
                        .is_some_and(|(nx, ny)| !carved[(ny * width + nx) as usize])
                })
                .collect();

            match candidates.choose(rng) {
                Some(&side) => {
                    let (nx, ny) = side.forward_cell(x, y);
                    carved[(ny * width + nx) as usize] = true;
                    passages.insert((x, y, side));
                    passages.insert((nx, ny, side.turn_back()));
                    stack.push((nx, ny));
                }
                None => {
                    stack.pop();
                }
            }
        }

        for y in 0..height {
            for x in 0..width {
                for side in [Direction::North, Direction::East] {
                    let inner = labyrinth.truth.neighbor(x, y, side).is_some();
                    if inner && !passages.contains(&(x, y, side)) {
                        labyrinth.add_wall(x, y, side)?;
                    }
                }
            }
        }
        debug!("random labyrinth {}x{} generated", width, height);
        Ok(labyrinth)
    }

    pub fn add_wall(&mut self, x: i32, y: i32, side: Direction) -> Result<()> {
        self.truth.set_wall(x, y, side, true)
    }

    /// Ferme les 4 côtés d'une cellule.
    pub fn enclose(&mut self, x: i32, y: i32) -> Result<()> {
        for side in Direction::ALL {
            self.add_wall(x, y, side)?;
        }
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.truth.width()
    }

    pub fn height(&self) -> i32 {
        self.truth.height()
    }

    pub fn truth(&self) -> &MazeMap {
        &self.truth
    }

    /// Pose réelle du robot.
    pub fn robot(&self) -> &Player {
        &self.robot
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Murs envoyés au visualiseur.
    pub fn displayed_walls(&self) -> &[(i32, i32, Direction)] {
        &self.displayed
    }
}

impl MouseApi for MockLabyrinth {
    fn sense_walls(&mut self, x: i32, y: i32) -> Result<Walls> {
        self.commands.push(Command::Sense(x, y));
        if self.robot.position() != (x, y) {
            return Err(MouseError::SensorFailure(format!(
                "robot is at {:?}, cannot sense ({}, {})",
                self.robot.position(),
                x,
                y
            )));
        }
        Ok(self.truth.cell(x, y)?.walls)
    }

    fn move_forward(&mut self) -> Result<()> {
        self.commands.push(Command::MoveForward);
        let Player { x, y, direction, .. } = self.robot;
        if self.truth.wall_at(x, y, direction)? {
            return Err(MouseError::BlockedMove { x, y, direction });
        }
        self.robot.step_forward();
        Ok(())
    }

    fn turn_left(&mut self) -> Result<()> {
        self.commands.push(Command::TurnLeft);
        self.robot.turn_left();
        Ok(())
    }

    fn turn_right(&mut self) -> Result<()> {
        self.commands.push(Command::TurnRight);
        self.robot.turn_right();
        Ok(())
    }

    fn set_wall(&mut self, x: i32, y: i32, side: Direction) -> Result<()> {
        self.displayed.push((x, y, side));
        Ok(())
    }
}
