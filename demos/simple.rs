use coalition_shapley::{AtomicCosts, Game, SamplingConfig, error::Result};

fn main() -> Result<()> {
    let costs = AtomicCosts::new([("A", 30.0), ("B", 40.0), ("C", 50.0)]);
    let game = Game::additive("fixed", &costs)?;

    for sv in game.exact()? {
        println!("{}", sv);
    }

    let estimate = game.sampled(&SamplingConfig::new(4).seed(7))?;
    println!("m=4: {}", estimate);

    Ok(())
}
