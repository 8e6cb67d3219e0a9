use classical_search::{MinimaxConfig, SearchError, SolverConfig, VariableOrdering};

#[test]
fn test_minimax_config_builder_methods() {
    let config = MinimaxConfig::default()
        .with_max_depth(4)
        .with_pruning(false)
        .with_win_score(100.0);

    assert_eq!(config.max_depth, 4);
    assert!(!config.use_pruning);
    assert_eq!(config.win_score, 100.0);
}

#[test]
fn test_minimax_config_default_values() {
    let config = MinimaxConfig::default();

    // Full depth for a 3x3 board, pruning on, +/-10 for a win
    assert_eq!(config.max_depth, 9);
    assert!(config.use_pruning);
    assert_eq!(config.win_score, 10.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_minimax_config_rejects_bad_win_score() {
    for score in [0.0, -1.0, f64::INFINITY, f64::NAN] {
        let config = MinimaxConfig::default().with_win_score(score);
        match config.validate() {
            Err(SearchError::InvalidConfiguration(message)) => {
                assert!(message.contains("win score"), "unexpected message: {}", message)
            }
            other => panic!("win score {} should be rejected, got {:?}", score, other),
        }
    }
}

#[test]
fn test_solver_config() {
    assert_eq!(
        SolverConfig::default().variable_ordering,
        VariableOrdering::MinimumRemainingValues
    );

    let config = SolverConfig::default().with_variable_ordering(VariableOrdering::Natural);
    assert_eq!(config.variable_ordering, VariableOrdering::Natural);
}
