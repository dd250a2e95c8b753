use std::time::Instant;

use log::info;

use crate::{
    error::NnError,
    network::Network,
    optim::Sgd,
    train::{
        epoch_stats::EpochStats,
        train_config::TrainConfig,
        trainer::{train_epoch, Example},
    },
};

/// Trains `network` for `config.epochs` epochs over `examples`.
///
/// `on_epoch` is called with the stats of every completed epoch, in order;
/// the same stats are returned once the run finishes. The first error
/// aborts the run.
pub fn train_loop<F>(
    network: &mut Network,
    examples: &[Example],
    config: &TrainConfig,
    mut on_epoch: F,
) -> Result<Vec<EpochStats>, NnError>
where
    F: FnMut(&EpochStats),
{
    let optimizer = Sgd::new(config.learning_rate);
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 0..config.epochs {
        let t_start = Instant::now();
        let error2 = train_epoch(network, examples, &optimizer)?;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            error2,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        info!(
            "epoch {}/{}: error2={:.6} ({} ms)",
            epoch + 1,
            config.epochs,
            stats.error2,
            stats.elapsed_ms
        );
        on_epoch(&stats);
        history.push(stats);
    }

    Ok(history)
}
