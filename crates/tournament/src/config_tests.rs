use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let config = TournamentConfig::from_toml_str("").unwrap();
    assert_eq!(config, TournamentConfig::default());
}

#[test]
fn test_full_config() {
    let config = TournamentConfig::from_toml_str(
        r#"
        name = "Club night"
        games_per_match = 4
        max_moves_per_game = 150
        alternate_colors = false
        seed = 7
        depth = 2
        players = ["random", "alpha-beta", "aggressive", "defensive"]

        [weights]
        mobility = 0.2
        "#,
    )
    .unwrap();

    assert_eq!(config.name, "Club night");
    assert_eq!(config.games_per_match, 4);
    assert_eq!(config.max_moves_per_game, 150);
    assert!(!config.alternate_colors);
    assert_eq!(
        config.players,
        vec![AiKind::Random, AiKind::AlphaBeta, AiKind::Aggressive, AiKind::Defensive]
    );

    let weights = config.weights.unwrap();
    assert_eq!(weights.mobility, 0.2);
    assert_eq!(weights.check, EvalWeights::default().check);

    let match_config = config.match_config();
    assert_eq!(match_config.games, 4);
    assert_eq!(match_config.max_moves, 150);
    assert!(!match_config.alternate_colors);
    assert_eq!(match_config.engine.seed, Some(7));
    assert_eq!(match_config.engine.depth, Some(2));
    assert_eq!(match_config.engine.weights, Some(weights));
}

#[test]
fn test_unknown_player_is_rejected() {
    let err = TournamentConfig::from_toml_str(r#"players = ["random", "stockfish"]"#).unwrap_err();
    assert!(matches!(err, TournamentError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = TournamentConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(matches!(err, TournamentError::Io { .. }));
}
