use clap::Parser;
use log::{info, warn};

use rusty_mouse::ascii_utils::render_map;
use rusty_mouse::network::connect_to_server;
use rusty_mouse::remote::RemoteApi;
use rusty_mouse::{Mouse, MazeMap, ADDRESS, MAX_MAZE_SIDE, MAZE_HEIGHT, MAZE_WIDTH};

/// Explore le labyrinthe du simulateur jusqu'à la cible
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Adresse du simulateur
    #[arg(long, default_value = ADDRESS)]
    address: String,

    /// Largeur du labyrinthe
    #[arg(long, default_value_t = MAZE_WIDTH, value_parser = side_parser())]
    width: i32,

    /// Hauteur du labyrinthe
    #[arg(long, default_value_t = MAZE_HEIGHT, value_parser = side_parser())]
    height: i32,

    /// Colonne de la cible (centre par défaut)
    #[arg(long)]
    target_x: Option<i32>,

    /// Ligne de la cible (centre par défaut)
    #[arg(long)]
    target_y: Option<i32>,
}

fn side_parser() -> clap::builder::RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(1..=MAX_MAZE_SIDE as i64)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stream = connect_to_server(&args.address)?;
    info!("connected to simulator at {}", args.address);

    let target = (
        args.target_x.unwrap_or(args.width / 2),
        args.target_y.unwrap_or(args.height / 2),
    );
    let map = MazeMap::new(args.width, args.height);
    let mut mouse = Mouse::with_map(RemoteApi::new(stream), map, target)?;

    let found = mouse.search_maze()?;
    mouse.display_walls()?;

    if found {
        println!("Path to {:?}: {:?}", target, mouse.discovered_path());
    } else {
        warn!("target {:?} is unreachable", target);
        println!("No path to {:?}", target);
    }
    println!("{}", render_map(mouse.map(), Some(mouse.player())));
    Ok(())
}
