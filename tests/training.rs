use std::io::Cursor;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twolayer_nn::{encode_examples, train_loop, Dataset, Network, NnError, TrainConfig, Vector};

const TOY: &str = "0,0,0,0\n1,1,1,0\n";

fn toy_examples() -> Vec<twolayer_nn::Example> {
    let dataset = Dataset::load(Cursor::new(TOY), 4, ',').unwrap();
    encode_examples(&dataset, 2, 2).unwrap()
}

fn argmax(v: &Vector) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
        .map(|(i, _)| i)
        .unwrap()
}

#[test]
fn forty_epochs_reduce_error_on_separable_toy_data() {
    let examples = toy_examples();
    for seed in 0..20 {
        let mut network = Network::new(2, 1, 2);
        network.initialize(&mut ChaCha8Rng::seed_from_u64(seed));

        let history = train_loop(&mut network, &examples, &TrainConfig::new(40, 0.5), |_| {}).unwrap();

        assert_eq!(history.len(), 40);
        let first = history.first().unwrap().error2;
        let last = history.last().unwrap().error2;
        assert!(last < first, "seed {seed}: error2 went from {first} to {last}");
    }
}

#[test]
fn longer_training_separates_the_classes() {
    let examples = toy_examples();
    let mut network = Network::new(2, 3, 2);
    network.initialize(&mut ChaCha8Rng::seed_from_u64(2024));

    let history = train_loop(&mut network, &examples, &TrainConfig::new(500, 0.5), |_| {}).unwrap();

    assert!(history.last().unwrap().error2 < 0.1);
    for ex in &examples {
        let out = network.forward(&ex.input).unwrap();
        assert_eq!(argmax(&out), argmax(&ex.expected));
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let examples = toy_examples();
    let run = || {
        let mut network = Network::new(2, 2, 2);
        network.initialize(&mut ChaCha8Rng::seed_from_u64(99));
        let history = train_loop(&mut network, &examples, &TrainConfig::new(10, 0.5), |_| {}).unwrap();
        (network, history.into_iter().map(|s| s.error2).collect::<Vec<_>>())
    };
    let (net_a, err_a) = run();
    let (net_b, err_b) = run();
    assert_eq!(net_a, net_b);
    assert_eq!(err_a, err_b);
}

#[test]
fn out_of_range_label_is_rejected_before_training() {
    let dataset = Dataset::load(Cursor::new("0,0,5,0\n"), 4, ',').unwrap();
    let err = encode_examples(&dataset, 2, 2).unwrap_err();
    assert!(matches!(err, NnError::InvalidLabel { classes: 2, .. }));
}

#[test]
fn forward_with_wrong_input_length_fails() {
    let mut network = Network::new(2, 2, 2);
    network.initialize(&mut ChaCha8Rng::seed_from_u64(1));
    assert!(matches!(
        network.forward(&Vector::zeros(4)),
        Err(NnError::ShapeMismatch { expected: 2, got: 4, .. })
    ));
}
