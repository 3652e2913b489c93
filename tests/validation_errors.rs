use coalition_shapley::{
    AirportInstance, AtomicCosts, Coalition, Game, MAX_EXACT_PLAYERS, Players, SamplingConfig,
    ShapleyError, TableCost, UNREACHABLE, build_value_table, exact_shapley, sampled_shapley,
};

fn additive_abc() -> Game {
    Game::additive(
        "abc",
        &AtomicCosts::new([("A", 30.0), ("B", 40.0), ("C", 50.0)]),
    )
    .unwrap()
}

#[test]
fn test_zero_samples_rejected() {
    let game = additive_abc();
    let result = sampled_shapley(game.players(), &game.cost(), 0);
    match result.unwrap_err() {
        ShapleyError::InvalidArgument(msg) => {
            assert!(msg.contains("sample count"));
        }
        other => panic!("Expected invalid argument for zero samples, got {other:?}"),
    }
}

#[test]
fn test_sampling_empty_player_set_rejected() {
    let players = Players::default();
    let result = sampled_shapley(&players, &|_: Coalition| 0.0, 5);
    match result.unwrap_err() {
        ShapleyError::InvalidArgument(msg) => {
            assert!(msg.contains("empty player set"));
        }
        other => panic!("Expected invalid argument for empty roster, got {other:?}"),
    }
}

#[test]
fn test_duplicate_player_rejected() {
    let costs = AtomicCosts::new([("A", 1.0), ("B", 2.0), ("A", 3.0)]);
    match build_value_table(&costs).unwrap_err() {
        ShapleyError::DuplicatePlayer(player) => assert_eq!(player, "A"),
        other => panic!("Expected duplicate player error, got {other:?}"),
    }
}

#[test]
fn test_non_finite_cost_rejected() {
    let costs = AtomicCosts::new([("A", 1.0), ("B", f64::NEG_INFINITY)]);
    match build_value_table(&costs).unwrap_err() {
        ShapleyError::InvalidCost { player, cost } => {
            assert_eq!(player, "B");
            assert_eq!(cost, f64::NEG_INFINITY);
        }
        other => panic!("Expected invalid cost error, got {other:?}"),
    }
}

#[test]
fn test_too_many_players_for_enumeration() {
    let players = Players::new((0..=MAX_EXACT_PLAYERS).map(|i| format!("P{i}"))).unwrap();
    let result = exact_shapley(&players, &|c: Coalition| c.len() as f64);
    match result.unwrap_err() {
        ShapleyError::TooManyPlayers { count, limit } => {
            assert_eq!(count, MAX_EXACT_PLAYERS + 1);
            assert_eq!(limit, MAX_EXACT_PLAYERS);
        }
        other => panic!("Expected too many players error, got {other:?}"),
    }
}

#[test]
fn test_sampling_large_roster_is_allowed() {
    // Sampling never enumerates the permutation space
    let players = Players::new((0..20).map(|i| format!("P{i}"))).unwrap();
    let result = sampled_shapley(&players, &|c: Coalition| c.len() as f64, 3).unwrap();
    assert_eq!(result.len(), 20);
    assert!((result.total() - 20.0).abs() < 1e-9);
}

#[test]
fn test_malformed_coalition_is_unreachable() {
    let game = additive_abc();
    let cost = TableCost::new(game.table());
    assert_eq!(cost.value_of(&["A", "Nobody"]), UNREACHABLE);
    assert_eq!(
        coalition_shapley::CostFunction::value(&cost, Coalition::from_mask(0b1001)),
        UNREACHABLE
    );
}

#[test]
fn test_out_of_range_index_is_unreachable() {
    let game = Game::additive("ab", &AtomicCosts::new([("A", 1.0), ("B", 2.0)])).unwrap();
    let cost = TableCost::new(game.table());

    // Bit 33 must not wrap onto bit 1 (player B)
    let malformed = Coalition::from_indices([33]);
    assert_eq!(
        coalition_shapley::CostFunction::value(&cost, malformed),
        UNREACHABLE
    );
    assert_eq!(
        coalition_shapley::CostFunction::value(&cost, Coalition::from_indices([0]).with(64)),
        UNREACHABLE
    );
}

#[test]
fn test_empty_game_sampling_through_game_is_empty() {
    let game = Game::additive("empty", &AtomicCosts::default()).unwrap();
    let result = game.sampled(&SamplingConfig::new(3)).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_airport_zero_max_cost_rejected() {
    assert!(matches!(
        AirportInstance::random(4, 1, 0),
        Err(ShapleyError::InvalidArgument(_))
    ));
}
