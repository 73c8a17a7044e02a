use he_battleship::{
    init_logging, Arbiter, Game, GameConfig, Player, PlayerKind, RandomTargeting, Targeting,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::default();
    config.validate()?;

    let key1: [u8; 32] = rng.random();
    let p1 = Player::with_random_board("player1", PlayerKind::Automated, &config, &mut rng, key1)?;
    let key2: [u8; 32] = rng.random();
    let p2 = Player::with_random_board("player2", PlayerKind::Automated, &config, &mut rng, key2)?;

    let sources: [Box<dyn Targeting>; 2] = [Box::new(RandomTargeting), Box::new(RandomTargeting)];
    let mut game = Game::new([p1, p2], sources, Arbiter::from_config(&config)?);
    game.play(&mut rng)?;

    println!("{}", serde_json::to_string(&game.report())?);
    Ok(())
}
