use clap::{Parser, ValueEnum};
use coalition_shapley::{
    AirportInstance, Allocation, AtomicCosts, Game, Normalization, SamplingConfig,
    error::Result,
};
use serde::Serialize;
use std::path::PathBuf;
use tabled::{Table, settings::Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Rule {
    /// Coalition cost is the sum of split-cost shares
    Additive,
    /// Coalition cost is the runway its most demanding member needs
    Airport,
}

/// Exact and sampled Shapley allocations for cost-sharing games
#[derive(Debug, Parser)]
#[command(name = "shapley-report", version)]
struct Args {
    /// CSV file with Player,Cost columns; replaces the built-in fixed example
    #[arg(long)]
    input: Option<PathBuf>,

    /// Player counts of the random airport instances
    #[arg(long, value_delimiter = ',', default_value = "3,4,5")]
    airport_sizes: Vec<usize>,

    /// Seed for instance generation and sampling
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Upper bound on a runway segment's cost
    #[arg(long, default_value_t = 100)]
    max_cost: u32,

    /// Number of sampled orderings; sweeps 1..=min(n!, 720) when omitted
    #[arg(long)]
    samples: Option<usize>,

    /// Divisor for the sampled estimator
    #[arg(long, value_enum, default_value_t = Normalization::SampleCount)]
    normalization: Normalization,

    /// Coalition cost rule for the airport instances
    #[arg(long, value_enum, default_value_t = Rule::Additive)]
    rule: Rule,

    /// Print a JSON report instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SampledReport {
    samples: usize,
    allocation: Allocation,
}

#[derive(Debug, Serialize)]
struct GameReport {
    name: String,
    total_cost: f64,
    exact: Allocation,
    sampled: Vec<SampledReport>,
}

/// Longest default sweep of sample counts (6! orderings)
const MAX_SWEEP: usize = 720;

fn sample_counts(n: usize, samples: Option<usize>) -> Vec<usize> {
    match samples {
        Some(m) => vec![m],
        None => {
            let n_orderings = (1..=n).fold(1usize, |acc, k| acc.saturating_mul(k));
            if n_orderings > MAX_SWEEP {
                log::warn!(
                    "{} players have {} orderings; sweeping sample counts 1..={} only",
                    n,
                    n_orderings,
                    MAX_SWEEP
                );
            }
            (1..=n_orderings.min(MAX_SWEEP)).collect()
        }
    }
}

fn report(game: &Game, args: &Args) -> Result<GameReport> {
    let exact = game.exact()?;

    let sampled = sample_counts(game.players().len(), args.samples)
        .into_iter()
        .map(|m| {
            let config = SamplingConfig::new(m)
                .normalization(args.normalization)
                .seed(args.seed);
            game.sampled(&config).map(|allocation| SampledReport {
                samples: m,
                allocation,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(GameReport {
        name: game.name().to_string(),
        total_cost: game.total_cost(),
        exact,
        sampled,
    })
}

fn print_report(report: &GameReport) {
    println!("\n=== {} (total cost {}) ===", report.name, report.total_cost);
    println!("Exact Shapley values:");
    let table = Table::new(report.exact.clone())
        .with(Style::psql().remove_horizontals())
        .to_string();
    println!("{}", table);

    for sampled in &report.sampled {
        println!("m={}: estimates: {}", sampled.samples, sampled.allocation);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let fixed_costs = match &args.input {
        Some(path) => AtomicCosts::from_csv(path)?,
        None => AtomicCosts::new([("A", 30.0), ("B", 40.0), ("C", 50.0)]),
    };
    let mut games = vec![Game::additive("fixed", &fixed_costs)?];

    for &n in &args.airport_sizes {
        let airport = AirportInstance::random(n, args.seed, args.max_cost)?;
        if !args.json {
            println!("Airport instance with {} players: {}", n, airport.atomic_costs());
        }
        games.push(match args.rule {
            Rule::Additive => airport.additive_game()?,
            Rule::Airport => airport.airport_game(),
        });
    }

    let reports = games
        .iter()
        .map(|game| report(game, &args))
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| coalition_shapley::ShapleyError::Input(e.to_string()))?;
        println!("{}", json);
    } else {
        reports.iter().for_each(print_report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_counts_sweep() {
        assert_eq!(sample_counts(3, None), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(sample_counts(0, None), vec![1]);
        assert_eq!(sample_counts(5, Some(40)), vec![40]);
        assert_eq!(sample_counts(6, None).len(), 720);
        assert_eq!(sample_counts(10, None).len(), MAX_SWEEP);
    }

    fn fixed_game() -> Game {
        Game::additive(
            "fixed",
            &AtomicCosts::new([("A", 30.0), ("B", 40.0), ("C", 50.0)]),
        )
        .unwrap()
    }

    #[test]
    fn test_report_fixed_game() {
        let args = Args::parse_from(["shapley-report", "--samples", "4"]);
        let report = report(&fixed_game(), &args).unwrap();

        assert_eq!(report.name, "fixed");
        assert_eq!(report.total_cost, 120.0);
        for (player, expected) in [("A", 30.0), ("B", 40.0), ("C", 50.0)] {
            assert!((report.exact.value(player).unwrap() - expected).abs() < 1e-9);
        }

        assert_eq!(report.sampled.len(), 1);
        assert_eq!(report.sampled[0].samples, 4);
        assert!((report.sampled[0].allocation.value("B").unwrap() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_permutation_space_scaling() {
        let args = Args::parse_from([
            "shapley-report",
            "--samples",
            "12",
            "--normalization",
            "permutation-space",
        ]);
        let report = report(&fixed_game(), &args).unwrap();

        // 12 draws divided by 3! doubles every value
        let sampled = &report.sampled[0].allocation;
        for (player, expected) in [("A", 60.0), ("B", 80.0), ("C", 100.0)] {
            let value = sampled.value(player).unwrap();
            assert!(
                (value - expected).abs() < 1e-9,
                "{player}: expected {expected}, got {value}"
            );
        }
        assert!((sampled.total() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "shapley-report",
            "--airport-sizes",
            "2,6",
            "--normalization",
            "permutation-space",
            "--rule",
            "airport",
        ]);
        assert_eq!(args.airport_sizes, vec![2, 6]);
        assert_eq!(args.normalization, Normalization::PermutationSpace);
        assert_eq!(args.rule, Rule::Airport);
        assert_eq!(args.seed, 42);
        assert!(!args.json);
    }
}
