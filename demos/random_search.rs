// Demonstration: drive a logistic policy with a simple random-search optimizer.
//
// The target is a hidden logistic policy; candidates are scored by mean squared
// error against its actions, one worker thread per candidate clone.
//
// Run:
//   cargo run --example random_search -- --iterations 200 --population 8 --seed 42

use std::env;

use policykit::{LogisticPolicy, LogisticPolicyConfig, Policy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest perturbation width; keeps `gen_range(-step..step)` non-empty.
const MIN_STEP: f64 = 1e-12;

fn main() {
    let args: Vec<String> = env::args().collect();
    let iterations: usize = arg_value(&args, "--iterations")
        .and_then(|s| s.parse().ok())
        .unwrap_or(200);
    let population: usize = arg_value(&args, "--population")
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut rng = StdRng::seed_from_u64(seed);
    let config = LogisticPolicyConfig::new(3, -2.0, 2.0);

    let mut target = match LogisticPolicy::with_rng(&config, &mut rng) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid policy config: {}", e);
            std::process::exit(2);
        }
    };
    target
        .set_parameters(&[0.3, -1.2, 0.8, 1.5])
        .expect("target parameters have the right length");

    let observations: Vec<Vec<f64>> = (0..64)
        .map(|_| (0..3).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect();
    let targets = target.actions(&observations).expect("observations are 3-dimensional");

    let prototype: Box<dyn Policy> =
        Box::new(LogisticPolicy::with_rng(&config, &mut rng).expect("config already validated"));
    let mut best = prototype.parameters().to_vec();
    let mut best_loss = loss(prototype.as_ref(), &observations, &targets);
    let mut step = 0.5;

    for iteration in 0..iterations {
        let candidates: Vec<Vec<f64>> = (0..population)
            .map(|_| best.iter().map(|p| p + rng.gen_range(-step..step)).collect())
            .collect();

        let scored: Vec<(f64, Vec<f64>)> = std::thread::scope(|s| {
            let handles: Vec<_> = candidates
                .into_iter()
                .map(|candidate| {
                    let mut worker = prototype.clone();
                    let observations = &observations;
                    let targets = &targets;
                    s.spawn(move || {
                        worker
                            .set_parameters(&candidate)
                            .expect("candidate has the right length");
                        let l = loss(worker.as_ref(), observations, targets);
                        (l, worker.parameters().to_vec())
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("worker panicked"))
                .collect()
        });

        if let Some((l, params)) = scored
            .into_iter()
            .min_by(|a, b| a.0.total_cmp(&b.0))
        {
            if l < best_loss {
                best_loss = l;
                best = params;
            } else {
                step = decay_step(step);
            }
        }

        if iteration % 50 == 0 {
            println!("iter {:>4}  loss {:.6}  step {:.4}", iteration, best_loss, step);
        }
    }

    println!("Policy: {}", prototype.name());
    println!("Best loss: {:.6}", best_loss);
    println!("Recovered parameters: {:?}", best);
    println!("Target parameters:    {:?}", target.parameters());
}

/// Mean squared error between a policy's actions and the target actions.
fn loss(policy: &dyn Policy, observations: &[Vec<f64>], targets: &[Vec<f64>]) -> f64 {
    let actions = policy
        .actions(observations)
        .expect("observations match policy dimension");
    let total: f64 = actions
        .iter()
        .zip(targets)
        .map(|(a, t)| (a[0] - t[0]).powi(2))
        .sum();
    total / observations.len() as f64
}

/// Shrinks the perturbation width after a non-improving iteration.
fn decay_step(step: f64) -> f64 {
    (step * 0.95).max(MIN_STEP)
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
