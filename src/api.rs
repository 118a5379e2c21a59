use crate::direction::Direction;
use crate::error::Result;
use crate::walls::Walls;

/// Interface avec le robot (ou le simulateur) : capteurs de murs et commandes de mouvement.
///
/// Chaque appel est bloquant, la souris attend la réponse avant de décider de la suite.
pub trait MouseApi {
    /// Murs autour de la cellule (x, y), où se trouve le robot.
    fn sense_walls(&mut self, x: i32, y: i32) -> Result<Walls>;

    /// Avance d'une case dans l'orientation courante.
    fn move_forward(&mut self) -> Result<()>;

    /// Rotation de 90° dans le sens antihoraire.
    fn turn_left(&mut self) -> Result<()>;

    /// Rotation de 90° dans le sens horaire.
    fn turn_right(&mut self) -> Result<()>;

    /// Affiche un mur découvert dans le visualiseur, si l'interface en a un.
    fn set_wall(&mut self, _x: i32, _y: i32, _side: Direction) -> Result<()> {
        Ok(())
    }
}
