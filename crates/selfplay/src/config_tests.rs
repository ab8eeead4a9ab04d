use super::*;

#[test]
fn test_parse_match_file() {
    let config = MatchConfig::from_toml_str(
        r#"
        games = 4
        max_plies = 60
        start_fen = "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1"

        [engine1]
        max_depth = 3
        root = "rescan"

        [engine2]
        max_depth = 2
        algorithm = "minimax"
        evaluator = "random"
        seed = 9

        [engine2.weights]
        queen = 950
        "#,
    )
    .unwrap();

    assert_eq!(config.games, 4);
    assert_eq!(config.max_plies, 60);
    assert!(config.alternate_colors);
    assert_eq!(config.engine1.max_depth, 3);
    assert_eq!(config.engine1.root, RootSelection::Rescan);
    assert_eq!(config.engine2.algorithm, Algorithm::Minimax);
    assert_eq!(config.engine2.evaluator, EvaluatorKind::Random);
    assert_eq!(config.engine2.seed, 9);
    assert_eq!(config.engine2.weights.queen, 950);
    assert_eq!(config.engine2.weights.rook, 500);
}

#[test]
fn test_empty_file_uses_defaults() {
    assert_eq!(MatchConfig::from_toml_str("").unwrap(), MatchConfig::default());
}

#[test]
fn test_rejects_bad_fen() {
    let err = MatchConfig::from_toml_str(r#"start_fen = "nonsense""#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_rejects_excessive_depth() {
    let err = MatchConfig::from_toml_str("[engine1]\nmax_depth = 99").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Engine(classical_engine::ConfigError::Invalid(_))
    ));
}

#[test]
fn test_engine_config_takes_side() {
    let player = PlayerConfig {
        max_depth: 2,
        transposition: false,
        ..Default::default()
    };
    let config = player.engine_config(Color::Black);
    assert_eq!(config.maximizing_side, Color::Black);
    assert_eq!(config.max_depth, 2);
    assert!(!config.transposition);
    assert_eq!(player.label(), "alpha-beta d2 heuristic");
}

#[test]
fn test_shipped_match_file_parses() {
    let config = MatchConfig::from_toml_str(include_str!("../match.toml")).unwrap();
    assert_eq!(config.engine2.weights.check_bonus, 50);
}

#[test]
fn test_build_rejects_excessive_depth() {
    let player = PlayerConfig {
        max_depth: 99,
        ..Default::default()
    };
    assert!(matches!(
        player.build(Color::White),
        Err(ConfigError::Engine(_))
    ));
    assert!(PlayerConfig::default().build(Color::Black).is_ok());
}
