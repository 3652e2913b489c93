use coalition_shapley::{AtomicCosts, Game, error::Result};
use tabled::{Table, settings::Style};

fn main() -> Result<()> {
    let costs = AtomicCosts::from_csv("tests/atomic_costs.csv")?;
    let result = Game::additive("csv", &costs)?.exact()?;

    let table = Table::new(result)
        .with(Style::psql().remove_horizontals())
        .to_string();
    println!("{}", table);

    Ok(())
}
