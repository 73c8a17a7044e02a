use clap::{Parser, Subcommand};
use he_battleship::{
    init_logging, ui, Arbiter, CliTargeting, Game, GameConfig, GameOutcome, Player,
    PlayerKind, RandomTargeting, Targeting,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "Alice (You)")]
        name: String,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (seed, seats) = match cli.command {
        Commands::Play { seed, name } => (
            seed,
            [(name, PlayerKind::Human), ("Bob (Computer)".to_string(), PlayerKind::Automated)],
        ),
        Commands::Auto { seed } => (
            seed,
            [
                ("Alice (Computer)".to_string(), PlayerKind::Automated),
                ("Bob (Computer)".to_string(), PlayerKind::Automated),
            ],
        ),
    };
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let config = GameConfig::default();
    config.validate()?;

    let [(name_a, kind_a), (name_b, kind_b)] = seats;
    let key_a = key_seed(&mut rng, seed.is_some());
    let alice = Player::with_random_board(name_a, kind_a, &config, &mut rng, key_a)?;
    let key_b = key_seed(&mut rng, seed.is_some());
    let bob = Player::with_random_board(name_b, kind_b, &config, &mut rng, key_b)?;

    println!("\n============================");
    println!("   HOMOMORPHIC BATTLESHIP");
    println!("        (BFV via fhe)");
    println!("============================\n");
    println!("Ships are placed randomly on a 10x10 board.");
    println!("Both boards are encrypted cell by cell under BFV.");
    println!("Hit/miss detection is done homomorphically.\n");
    if alice.kind() == PlayerKind::Human {
        println!("Your fleet:");
        print!("{}", ui::render_board(alice.board()));
    }

    let sources = [source_for(alice.kind()), source_for(bob.kind())];
    let mut game = Game::new([alice, bob], sources, Arbiter::from_config(&config)?);

    match game.play(&mut rng)? {
        GameOutcome::Winner(seat) => {
            println!("\n============================");
            println!("     {} WINS!", game.player(seat).name());
            println!("============================");
        }
        GameOutcome::Cancelled => println!("\nGame interrupted by user."),
    }

    println!("\n========== FINAL SCORES ==========");
    for p in game.players() {
        println!(
            "{}: {} hits landed, {} of {} own ship cells afloat",
            p.name(),
            p.score(),
            p.board().remaining_ship_cells(),
            p.board().total_ship_cells()
        );
    }
    for p in game.players() {
        println!("\n===== {}'s Board =====", p.name());
        print!("{}", ui::render_board(p.board()));
    }
    Ok(())
}

fn source_for(kind: PlayerKind) -> Box<dyn Targeting> {
    match kind {
        PlayerKind::Human => Box::new(CliTargeting::stdio()),
        PlayerKind::Automated => Box::new(RandomTargeting::new()),
    }
}

/// Key generation seed: from the game RNG when reproducible, else from the
/// OS-seeded thread RNG.
fn key_seed(rng: &mut SmallRng, reproducible: bool) -> [u8; 32] {
    if reproducible {
        rng.random()
    } else {
        rand::rng().random()
    }
}
