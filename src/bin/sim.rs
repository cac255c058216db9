use netbattle::{
    init_logging, EndReason, InMemoryTransport, RandomPlayer, Role, Session, SessionConfig,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct SideSummary {
    role: Role,
    reason: EndReason,
    shots: usize,
}

#[derive(Serialize)]
struct Summary {
    player1: SideSummary,
    player2: SideSummary,
    winner: Option<&'static str>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let (t1, t2) = InMemoryTransport::pair();
    let mut s1 = Session::setup(
        Box::new(RandomPlayer::new()),
        SessionConfig::new(Role::Initiator),
        t1,
        &mut rng1,
    )?;
    let mut s2 = Session::setup(
        Box::new(RandomPlayer::new()),
        SessionConfig::new(Role::Responder),
        t2,
        &mut rng2,
    )?;

    let (r1, r2) = tokio::join!(s1.run(&mut rng1), s2.run(&mut rng2));

    let winner = match (r1, r2) {
        (EndReason::LocalWin, EndReason::LocalLoss) => Some("player1"),
        (EndReason::LocalLoss, EndReason::LocalWin) => Some("player2"),
        _ => None,
    };

    let summary = Summary {
        player1: SideSummary {
            role: Role::Initiator,
            reason: r1,
            shots: s1.shots_fired(),
        },
        player2: SideSummary {
            role: Role::Responder,
            reason: r2,
            shots: s2.shots_fired(),
        },
        winner,
    };

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
