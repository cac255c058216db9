use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use netbattle::transport::tcp;
use netbattle::{
    init_logging, CliPlayer, Fleet, LocalGame, Mode, Player, RandomPlayer, Session,
    SessionConfig, TcpTransport, DEFAULT_MAX_LINE,
};

#[derive(ValueEnum, Clone, Debug)]
enum PlayerType {
    Human,
    Random,
}

/// Battleship for two over TCP, or against the computer.
///
///   netbattle                  single player
///   netbattle <port>           wait for an opponent on <port>; you fire first
///   netbattle <address> <port> join an opponent
#[derive(Parser)]
#[command(author, version, about, long_about = None, verbatim_doc_comment)]
struct Cli {
    /// Port to listen on, or the opponent's address when a port follows.
    target: Option<String>,
    /// Opponent's port.
    port: Option<String>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = PlayerType::Human)]
    player: PlayerType,
    #[arg(long, default_value_t = DEFAULT_MAX_LINE, help = "Longest protocol line accepted, in bytes")]
    max_line: usize,
}

impl PlayerType {
    fn build(&self) -> Box<dyn Player> {
        match self {
            PlayerType::Human => Box::new(CliPlayer::new()),
            PlayerType::Random => Box::new(RandomPlayer::new()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mode = Mode::from_args(cli.target.as_deref(), cli.port.as_deref())?;

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    info!("starting in {} mode", mode);

    let transport = match &mode {
        Mode::Local => {
            println!("Welcome to Battleship (single-player). Type 'quit' at any prompt to exit.");
            let mut player = cli.player.build();
            let mut game = LocalGame::setup(player.as_mut(), Fleet::standard(), &mut rng)?;
            game.run(player.as_mut(), &mut rng);
            return Ok(());
        }
        Mode::Listen { port } => {
            println!("Waiting for an opponent on port {}...", port);
            tcp::listen(*port, cli.max_line).await?
        }
        Mode::Connect { address, port } => {
            println!("Connecting to {}:{}...", address, port);
            TcpTransport::connect((address.as_str(), *port), cli.max_line).await?
        }
    };

    let role = mode
        .role()
        .ok_or_else(|| anyhow::anyhow!("{} mode has no network role", mode))?;
    println!("Connected. You are the {:?}.", role);
    let config = SessionConfig::new(role);
    let mut session = Session::setup(cli.player.build(), config, transport, &mut rng)?;
    let reason = session.run(&mut rng).await;
    println!("Two-player session ended: {}.", reason);
    Ok(())
}
