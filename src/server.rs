use std::net::TcpListener;

use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rusty_mouse::ascii_utils::render_map;
use rusty_mouse::labyrinth_mock::MockLabyrinth;
use rusty_mouse::remote::serve;
use rusty_mouse::{ADDRESS, MAX_MAZE_SIDE, MAZE_HEIGHT, MAZE_WIDTH};

/// Simulateur de labyrinthe : un labyrinthe aléatoire par client
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Adresse d'écoute
    #[arg(long, default_value = ADDRESS)]
    address: String,

    /// Largeur du labyrinthe
    #[arg(long, default_value_t = MAZE_WIDTH, value_parser = side_parser())]
    width: i32,

    /// Hauteur du labyrinthe
    #[arg(long, default_value_t = MAZE_HEIGHT, value_parser = side_parser())]
    height: i32,

    /// Graine aléatoire
    #[arg(long)]
    seed: Option<u64>,
}

fn side_parser() -> clap::builder::RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(1..=MAX_MAZE_SIDE as i64)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let listener = TcpListener::bind(&args.address)?;
    info!("simulator listening on {}", args.address);

    // un client à la fois
    for stream in listener.incoming() {
        let mut stream = match stream {
            Ok(stream) => stream,
            Err(e) => {
                warn!("connection failed: {}", e);
                continue;
            }
        };
        let mut labyrinth = MockLabyrinth::random(args.width, args.height, &mut rng)?;
        info!("new client, labyrinth:\n{}", render_map(labyrinth.truth(), None));

        match serve(&mut stream, &mut labyrinth) {
            Ok(requests) => info!("session closed after {} requests", requests),
            Err(e) => warn!("session aborted: {}", e),
        }
    }
    Ok(())
}
