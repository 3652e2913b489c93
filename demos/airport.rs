use coalition_shapley::{AirportInstance, SamplingConfig, error::Result};

fn main() -> Result<()> {
    let airport = AirportInstance::random(6, 42, 100)?;
    println!("segment costs: {:?}", airport.segment_costs());
    println!("split shares:  {}", airport.atomic_costs());

    let game = airport.airport_game();
    let exact = game.exact()?;
    println!("exact:         {}", exact);

    for m in [10, 100, 1000] {
        let estimate = game.sampled(&SamplingConfig::new(m).seed(1))?;
        println!("m={:<5}        {}", m, estimate);
    }

    Ok(())
}
