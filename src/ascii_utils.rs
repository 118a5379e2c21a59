/*!
 * # Affichage ASCII de la carte
 *
 * Dessine les murs connus de la souris, les cellules visitées (`.`), le chemin
 * d'exploration (`*`) et la souris elle-même avec son orientation (`^ > v <`).
 * Le nord est en haut.
 */

use std::collections::HashSet;

use crate::direction::Direction;
use crate::map::MazeMap;
use crate::player::Player;

/// Génère la représentation ASCII de `map`.
///
/// # Arguments
///
/// * `map` - La carte connue.
/// * `player` - La souris à dessiner, avec son chemin, si on en a une.
pub fn render_map(map: &MazeMap, player: Option<&Player>) -> String {
    let trail: HashSet<(i32, i32)> = player
        .map(|player| player.path.iter().map(|w| (w.x, w.y)).collect())
        .unwrap_or_default();

    let mut out = String::new();
    for y in (0..map.height()).rev() {
        push_horizontal_walls(&mut out, map, y, Direction::North);

        for x in 0..map.width() {
            let Ok(cell) = map.cell(x, y) else { continue };
            out.push(if cell.walls.west { '|' } else { ' ' });

            let glyph = match player {
                Some(player) if player.position() == (x, y) => arrow(player.direction),
                _ if trail.contains(&(x, y)) => '*',
                _ if cell.is_visited() => '.',
                _ => ' ',
            };
            out.push(' ');
            out.push(glyph);
            out.push(' ');
        }
        let east = map.wall_at(map.width() - 1, y, Direction::East).unwrap_or(true);
        out.push(if east { '|' } else { ' ' });
        out.push('\n');
    }
    push_horizontal_walls(&mut out, map, 0, Direction::South);
    out
}

fn push_horizontal_walls(out: &mut String, map: &MazeMap, y: i32, side: Direction) {
    for x in 0..map.width() {
        out.push('+');
        let wall = map.wall_at(x, y, side).unwrap_or(false);
        out.push_str(if wall { "---" } else { "   " });
    }
    out.push_str("+\n");
}

fn arrow(direction: Direction) -> char {
    match direction {
        Direction::North => '^',
        Direction::East => '>',
        Direction::South => 'v',
        Direction::West => '<',
    }
}
