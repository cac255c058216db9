use std::io::Cursor;

use netbattle::player::cli::{coord_label, parse_command};
use netbattle::{
    CliPlayer, Coord, EndReason, Fleet, FleetError, InMemoryTransport, LocalAction, Player,
    RandomPlayer, Role, Session, SessionConfig, SessionState, ShipType,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn cli_player(script: &str) -> Box<dyn Player> {
    Box::new(CliPlayer::from_reader(Cursor::new(script.to_string())))
}

#[test]
fn test_parse_command() {
    assert_eq!(parse_command("A5"), Ok(LocalAction::Fire(Coord::new(0, 5))));
    assert_eq!(parse_command(" j9 \n"), Ok(LocalAction::Fire(Coord::new(9, 9))));
    assert_eq!(parse_command("QUIT"), Ok(LocalAction::Quit));
    assert_eq!(parse_command("quit\n"), Ok(LocalAction::Quit));
    assert!(parse_command("").is_err());
    assert!(parse_command("5A").is_err());
    assert!(parse_command("A").is_err());
    assert!(parse_command("A-1").is_err());
    assert!(parse_command("K0").is_err());
    assert!(parse_command("A10").is_err());
}

#[test]
fn test_coord_label() {
    assert_eq!(coord_label(Coord::new(0, 5)), "A5");
    assert_eq!(coord_label(Coord::new(9, 0)), "J0");
    for row in 0..10 {
        for col in 0..10 {
            let at = Coord::new(row, col);
            assert_eq!(parse_command(&coord_label(at)), Ok(LocalAction::Fire(at)));
        }
    }
}

#[test]
fn test_setup_rejects_unplaceable_fleet() {
    let (a, _b) = InMemoryTransport::pair();
    let fleet = Fleet::new(vec![ShipType::new("Barge", 11)]);
    let config = SessionConfig::new(Role::Initiator).with_fleet(fleet);
    let mut rng = SmallRng::seed_from_u64(1);
    let err = Session::setup(Box::new(RandomPlayer::new()), config, a, &mut rng)
        .err()
        .expect("setup should fail");
    assert!(matches!(err, FleetError::ShipTooLong { length: 11, .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_quit_reaches_opponent() -> anyhow::Result<()> {
    let (a, b) = InMemoryTransport::pair();
    let mut rng1 = SmallRng::seed_from_u64(3);
    let mut rng2 = SmallRng::seed_from_u64(4);
    let mut initiator = Session::setup(
        cli_player("quit\n"),
        SessionConfig::new(Role::Initiator),
        a,
        &mut rng1,
    )?;
    let mut responder = Session::setup(
        Box::new(RandomPlayer::new()),
        SessionConfig::new(Role::Responder),
        b,
        &mut rng2,
    )?;

    let (r1, r2) = tokio::join!(initiator.run(&mut rng1), responder.run(&mut rng2));
    assert_eq!(r1, EndReason::LocalQuit);
    assert_eq!(r2, EndReason::OpponentQuit);
    assert_eq!(initiator.shots_fired(), 0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_skips_bad_input_and_repeats() -> anyhow::Result<()> {
    let (a, b) = InMemoryTransport::pair();
    let mut rng1 = SmallRng::seed_from_u64(5);
    let mut rng2 = SmallRng::seed_from_u64(6);
    // closing the input after two shots counts as quitting
    let mut initiator = Session::setup(
        cli_player("A0\nnonsense\nA0\nZ9\nB1\n"),
        SessionConfig::new(Role::Initiator),
        a,
        &mut rng1,
    )?;
    let mut responder = Session::setup(
        Box::new(RandomPlayer::new()),
        SessionConfig::new(Role::Responder),
        b,
        &mut rng2,
    )?;

    let (r1, r2) = tokio::join!(initiator.run(&mut rng1), responder.run(&mut rng2));
    assert_eq!(r1, EndReason::LocalQuit);
    assert_eq!(r2, EndReason::OpponentQuit);
    assert_eq!(initiator.shots_fired(), 2);
    assert_eq!(responder.shots_fired(), 2);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_random_game_in_memory() -> anyhow::Result<()> {
    for seed in 0..5u64 {
        let (a, b) = InMemoryTransport::pair();
        let mut rng1 = SmallRng::seed_from_u64(seed);
        let mut rng2 = SmallRng::seed_from_u64(seed + 100);
        let mut initiator = Session::setup(
            Box::new(RandomPlayer::new()),
            SessionConfig::new(Role::Initiator),
            a,
            &mut rng1,
        )?;
        let mut responder = Session::setup(
            Box::new(RandomPlayer::new()),
            SessionConfig::new(Role::Responder),
            b,
            &mut rng2,
        )?;

        let (r1, r2) = tokio::join!(initiator.run(&mut rng1), responder.run(&mut rng2));
        match (r1, r2) {
            (EndReason::LocalWin, EndReason::LocalLoss) => {
                // the initiator's last shot is never answered by a shot
                assert_eq!(initiator.shots_fired(), responder.shots_fired() + 1);
                assert_eq!(initiator.engine().hits_landed(), Fleet::standard().total_cells());
            }
            (EndReason::LocalLoss, EndReason::LocalWin) => {
                assert_eq!(initiator.shots_fired(), responder.shots_fired());
                assert!(initiator.engine().board().all_destroyed());
            }
            other => panic!("unexpected end {:?}", other),
        }

        // strict alternation until the end
        let history = initiator.engine().history();
        let (last, play) = history.split_last().expect("history is never empty");
        assert!(last.is_ended());
        for (i, state) in play.iter().enumerate() {
            let expected = if i % 2 == 0 {
                SessionState::AwaitingLocalShot
            } else {
                SessionState::AwaitingRemoteShot
            };
            assert_eq!(*state, expected);
        }
    }
    Ok(())
}
