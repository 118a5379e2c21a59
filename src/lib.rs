//! Souris de labyrinthe : carte des murs découverts, recherche en profondeur avec
//! retour arrière, et traduction des déplacements en rotations / pas vers l'avant.

pub mod api;
pub mod ascii_utils;
pub mod cell;
pub mod direction;
pub mod error;
pub mod json_utils;
pub mod labyrinth_mock;
pub mod map;
pub mod mouse;
pub mod network;
pub mod player;
pub mod remote;
pub mod walls;

pub use api::MouseApi;
pub use direction::{Direction, Turn};
pub use error::{MouseError, Result};
pub use map::{MazeMap, MAX_MAZE_SIDE, MAZE_HEIGHT, MAZE_WIDTH};
pub use mouse::{Mouse, Step};
pub use player::{Player, Waypoint};
pub use walls::Walls;

/// Adresse par défaut du simulateur.
pub const ADDRESS: &str = "localhost:8778";
