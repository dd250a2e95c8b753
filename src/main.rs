// Usage:
//   twolayer-nn [--config run.json] [--seed N] [dataset.csv]
//
// Reads the dataset from stdin when no path is given. Set RUST_LOG=debug
// (or trace) for library logging.
use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader},
};

use anyhow::{anyhow, bail, Context, Result};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twolayer_nn::{encode_examples, train_loop, Dataset, Network, RunConfig};

struct Args {
    config: Option<String>,
    seed: Option<u64>,
    dataset: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        seed: None,
        dataset: None,
    };
    let mut it = env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                args.config = Some(it.next().ok_or_else(|| anyhow!("--config needs a path"))?);
            }
            "--seed" => {
                let raw = it.next().ok_or_else(|| anyhow!("--seed needs a value"))?;
                args.seed = Some(raw.parse().with_context(|| format!("invalid seed '{raw}'"))?);
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path => {
                if args.dataset.replace(path.to_string()).is_some() {
                    bail!("only one dataset path may be given");
                }
            }
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    let mut config = match &args.config {
        Some(path) => RunConfig::load_json(path).with_context(|| format!("loading config {path}"))?,
        None => RunConfig::default(),
    };
    if args.seed.is_some() {
        config.train.seed = args.seed;
    }
    config.validate().map_err(|e| anyhow!("invalid config: {e}"))?;

    let spec = &config.network;
    let reader: Box<dyn BufRead> = match &args.dataset {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening dataset {path}"))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let dataset = Dataset::load(reader, spec.dataset_columns(), config.train.separator)?;
    let examples = encode_examples(&dataset, spec.input_size, spec.output_size)
        .context("dataset does not fit the network shape")?;

    let mut rng = match config.train.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut network = Network::from_spec(spec);
    network.initialize(&mut rng);
    info!(
        "training {} -> {} -> {} on {} examples",
        spec.input_size,
        spec.hidden_size,
        spec.output_size,
        examples.len()
    );

    train_loop(&mut network, &examples, &config.train, |stats| {
        println!("> epoch={}. error2={:.6}", stats.epoch, stats.error2);
    })?;

    Ok(())
}
