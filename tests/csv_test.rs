#![cfg(feature = "serde")]

use coalition_shapley::{AtomicCosts, Game, ShapleyError, ShapleyValue, error::Result};
use tabled::{Table, settings::Style};

fn find_player_value<'a>(values: &'a [ShapleyValue], player: &str) -> Option<&'a ShapleyValue> {
    values.iter().find(|v| v.player == player)
}

#[test]
fn test_csv_atomic_costs() -> Result<()> {
    let costs = AtomicCosts::from_csv("tests/atomic_costs.csv")?;
    assert_eq!(costs.len(), 4);
    assert_eq!(costs.get("D"), Some(12.5));

    let result: Vec<ShapleyValue> = Game::additive("csv", &costs)?.exact()?.into_iter().collect();

    let table = Table::new(&result)
        .with(Style::psql().remove_horizontals())
        .to_string();
    println!("{}", table);
    assert!(table.contains("player"));

    for (player, expected) in [("A", 30.0), ("B", 40.0), ("C", 50.0), ("D", 12.5)] {
        let sv = find_player_value(&result, player).expect("player missing from result");
        assert!(
            (sv.value - expected).abs() < 1e-9,
            "{player}: expected {expected}, got {}",
            sv.value
        );
    }

    Ok(())
}

#[test]
fn test_csv_from_reader() -> Result<()> {
    let data = "Player,Cost\nX,1.5\nY,2.5\n";
    let reader = csv::Reader::from_reader(data.as_bytes());
    let costs = AtomicCosts::from_csv_reader(reader)?;
    assert_eq!(costs.get("Y"), Some(2.5));
    Ok(())
}

#[test]
fn test_csv_bad_cost_is_input_error() {
    match AtomicCosts::from_csv("tests/bad_atomic_costs.csv") {
        Err(ShapleyError::Input(_)) => {}
        other => panic!("Expected input error, got {other:?}"),
    }
}

#[test]
fn test_csv_missing_file_is_input_error() {
    assert!(matches!(
        AtomicCosts::from_csv("tests/does_not_exist.csv"),
        Err(ShapleyError::Input(_))
    ));
}
