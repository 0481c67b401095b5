//! Command-line front end: runs the selection strategies on generated or
//! explicit input and reports the value and time of each.
//!
//! ```text
//! ordstat --size 1000000 --seed 7
//! ordstat --values 5,3,8,1,9,2 --rank 3 --strategy deterministic
//! ```

use std::process;

use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use ordstat::{SelectConfig, Strategy, DEFAULT_GROUP_SIZE};

#[derive(Parser, Debug)]
#[command(name = "ordstat", about = "Compare order statistic selection strategies")]
struct Cli {
    /// Number of random elements to generate
    #[arg(long, default_value_t = 1_000_000)]
    size: usize,

    /// 1-based rank to select (defaults to the median)
    #[arg(long)]
    rank: Option<usize>,

    /// Strategy to run; repeat to run several (defaults to all)
    #[arg(long = "strategy", value_parser = parse_strategy)]
    strategies: Vec<Strategy>,

    /// Seed for input generation and pivot choice
    #[arg(long)]
    seed: Option<u64>,

    /// Generated values are drawn from 0..=max-value
    #[arg(long, default_value_t = i64::MAX)]
    max_value: i64,

    /// Median-of-medians group size
    #[arg(long, default_value_t = DEFAULT_GROUP_SIZE)]
    group_size: usize,

    /// Explicit comma-separated input instead of generated data
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    values: Option<Vec<i64>>,
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse().map_err(|e: ordstat::Error| e.to_string())
}

fn run(cli: Cli) -> ordstat::Result<bool> {
    let config = SelectConfig::new(cli.group_size)?;
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let data: Vec<i64> = match cli.values {
        Some(values) => values,
        None => (0..cli.size)
            .map(|_| rng.gen_range(0..=cli.max_value.max(0)))
            .collect(),
    };
    let rank = cli.rank.unwrap_or((data.len() + 1) / 2);
    let strategies = if cli.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        cli.strategies
    };
    info!("seed {}, {} elements, rank {}", seed, data.len(), rank);

    let mut values = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let selection = strategy.select(&data, rank, &mut rng, &config)?;
        println!(
            "{}: value={} elapsed={:.3} ms",
            strategy,
            selection.value,
            selection.elapsed.as_secs_f64() * 1000.0
        );
        values.push(selection.value);
    }

    let agree = values.windows(2).all(|w| w[0] == w[1]);
    if agree {
        println!("all strategies agree");
    } else {
        println!("strategies disagree: {:?}", values);
    }
    Ok(agree)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
