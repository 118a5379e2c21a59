//! Erreurs de la souris et de son interface capteurs/actionneurs.

use std::io;

use crate::direction::Direction;

pub type Result<T> = std::result::Result<T, MouseError>;

#[derive(Debug, thiserror::Error)]
pub enum MouseError {
    /// Accès à une cellule hors de la grille.
    #[error("cell ({x}, {y}) is outside the maze")]
    OutOfBounds { x: i32, y: i32 },

    /// Tentative d'avancer à travers un mur connu.
    #[error("cannot move {direction:?} from ({x}, {y}): wall")]
    BlockedMove { x: i32, y: i32, direction: Direction },

    /// Le simulateur n'a pas pu répondre à une requête.
    #[error("sensor failure: {0}")]
    SensorFailure(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Message reçu mais inattendu.
    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
