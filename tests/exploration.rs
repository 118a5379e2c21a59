use rand::rngs::StdRng;
use rand::SeedableRng;

use rusty_mouse::labyrinth_mock::MockLabyrinth;
use rusty_mouse::{Direction, MazeMap, Mouse, Step};

fn mouse_in(labyrinth: MockLabyrinth, target: (i32, i32)) -> Mouse<MockLabyrinth> {
    let map = MazeMap::new(labyrinth.width(), labyrinth.height());
    Mouse::with_map(labyrinth, map, target).unwrap()
}

/// Chaque pas du chemin doit relier deux cellules voisines sans mur réel entre elles.
fn assert_walkable(truth: &MazeMap, path: &[(i32, i32)]) {
    assert_eq!(path.first(), Some(&(0, 0)));
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let side = Direction::ALL
            .into_iter()
            .find(|side| side.forward_cell(from.0, from.1) == to)
            .unwrap_or_else(|| panic!("{:?} -> {:?} is not a single step", from, to));
        assert!(
            !truth.wall_at(from.0, from.1, side).unwrap(),
            "path crosses a wall between {:?} and {:?}",
            from,
            to
        );
    }
    let mut seen = path.to_vec();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), path.len(), "path visits a cell twice");
}

#[test]
fn open_three_by_three_follows_north_first_order() {
    env_logger::try_init().ok();
    let mut mouse = mouse_in(MockLabyrinth::open(3, 3), (2, 2));

    assert!(mouse.search_maze().unwrap());
    let path = mouse.discovered_path();
    assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
    assert_walkable(mouse.api().truth(), &path);
}

#[test]
fn walled_off_target_is_unreachable() {
    env_logger::try_init().ok();
    let mut labyrinth = MockLabyrinth::open(2, 2);
    labyrinth.enclose(1, 1).unwrap();
    let mut mouse = mouse_in(labyrinth, (1, 1));

    assert!(!mouse.search_maze().unwrap());
    assert!(mouse.player().path.is_empty());
    assert_eq!(mouse.player().position(), (0, 0));
    for (x, y) in [(0, 0), (0, 1), (1, 0)] {
        assert!(mouse.map().is_visited(x, y).unwrap());
    }
    assert!(!mouse.map().is_visited(1, 1).unwrap());
}

#[test]
fn exhausted_search_stays_exhausted() {
    let mut labyrinth = MockLabyrinth::open(2, 2);
    labyrinth.enclose(0, 0).unwrap();
    let mut mouse = mouse_in(labyrinth, (1, 1));

    assert_eq!(mouse.step().unwrap(), Step::Exhausted);
    assert_eq!(mouse.step().unwrap(), Step::Exhausted);
}

#[test]
fn random_mazes_are_always_solved() {
    env_logger::try_init().ok();
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let labyrinth = MockLabyrinth::random(8, 8, &mut rng).unwrap();
        let mut mouse = mouse_in(labyrinth, (7, 7));

        assert!(mouse.search_maze().unwrap(), "seed {seed}");
        let path = mouse.discovered_path();
        assert_eq!(path.last(), Some(&(7, 7)));
        assert_walkable(mouse.api().truth(), &path);

        // la souris et le robot simulé ne se désynchronisent jamais
        let robot = mouse.api().robot();
        assert_eq!(robot.position(), mouse.player().position());
        assert_eq!(robot.direction, mouse.player().direction);
    }
}

#[test]
fn full_size_maze_center_is_reached() {
    let mut rng = StdRng::seed_from_u64(2021);
    let labyrinth = MockLabyrinth::random(16, 16, &mut rng).unwrap();
    let mut mouse = Mouse::new(labyrinth, (8, 8)).unwrap();

    assert!(mouse.search_maze().unwrap());
    assert_walkable(mouse.api().truth(), &mouse.discovered_path());
}

#[test]
fn every_backtrack_restores_the_pushed_state() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut labyrinth = MockLabyrinth::random(6, 6, &mut rng).unwrap();
    // cible inaccessible : la souris explore tout et dépile jusqu'au départ
    labyrinth.enclose(5, 5).unwrap();
    let mut mouse = mouse_in(labyrinth, (5, 5));

    let (mut advances, mut backtracks) = (0, 0);
    loop {
        match mouse.step().unwrap() {
            Step::Arrived => panic!("target is enclosed"),
            Step::Exhausted => break,
            Step::Advanced(_) => advances += 1,
            Step::Backtracked(waypoint) => {
                backtracks += 1;
                assert_eq!(mouse.player().position(), (waypoint.x, waypoint.y));
                assert_eq!(mouse.player().direction, waypoint.direction);
            }
        }
    }
    assert!(advances > 0);
    assert_eq!(backtracks, advances);
    assert_eq!(mouse.player().position(), (0, 0));
}
