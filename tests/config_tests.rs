use log::LevelFilter;
use netbattle::{parse_level, Fleet, FleetError, Mode, Role, ShipType, BOARD_SIZE};

#[test]
fn test_mode_from_args() {
    assert_eq!(Mode::from_args(None, None).unwrap(), Mode::Local);
    assert_eq!(
        Mode::from_args(Some("4000"), None).unwrap(),
        Mode::Listen { port: 4000 }
    );
    assert_eq!(
        Mode::from_args(Some("127.0.0.1"), Some("4000")).unwrap(),
        Mode::Connect {
            address: "127.0.0.1".to_string(),
            port: 4000
        }
    );
    assert!(Mode::from_args(Some("0"), None).is_err());
    assert!(Mode::from_args(Some("abc"), None).is_err());
    assert!(Mode::from_args(Some("70000"), None).is_err());
    assert!(Mode::from_args(Some("localhost"), Some("x")).is_err());
    assert!(Mode::from_args(None, Some("4000")).is_err());
}

#[test]
fn test_mode_roles() {
    assert_eq!(Mode::Local.role(), None);
    assert_eq!(Mode::Listen { port: 1 }.role(), Some(Role::Initiator));
    assert_eq!(
        Mode::Connect {
            address: "h".into(),
            port: 1
        }
        .role(),
        Some(Role::Responder)
    );
}

#[test]
fn test_fleet_validation() {
    assert_eq!(Fleet::standard().validate::<BOARD_SIZE>(), Ok(()));
    assert_eq!(Fleet::standard().total_cells(), 17);
    assert_eq!(Fleet::new(Vec::new()).validate::<BOARD_SIZE>(), Err(FleetError::Empty));
    assert!(matches!(
        Fleet::new(vec![ShipType::new("Raft", 0)]).validate::<BOARD_SIZE>(),
        Err(FleetError::ShipTooLong { length: 0, .. })
    ));
    // the standard fleet does not fit a 5x5 board
    assert!(matches!(
        Fleet::standard().validate::<5>(),
        Err(FleetError::TooDense { cells: 17, size: 5 })
    ));
    assert!(matches!(
        Fleet::standard().validate::<4>(),
        Err(FleetError::ShipTooLong { name: "Carrier", .. })
    ));
}

#[test]
fn test_parse_level() {
    assert_eq!(parse_level(None), LevelFilter::Info);
    assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_level(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(parse_level(Some("off")), LevelFilter::Off);
    assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
}
