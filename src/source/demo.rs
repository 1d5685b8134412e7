//! src/source/demo.rs
//!
//! Synthetic traffic: Poisson-distributed hits around a slowly drifting mean
//! with occasional bursts, so the graphs have something to show.

use std::sync::PoisonError;
use std::thread;
use std::time::Duration;

use log::info;
use rand::Rng;

use crate::graph::shared::SharedGraph;

/// Delay between generated batches.
const BATCH: Duration = Duration::from_millis(10);

/// Draw from a Poisson distribution with the given mean (Knuth).
pub fn poisson<R: Rng>(rng: &mut R, mean: f64) -> u64 {
    if mean <= 0.0 || !mean.is_finite() {
        return 0;
    }
    let limit = (-mean).exp();
    let mut k = 0;
    let mut p = 1.0;
    loop {
        p *= rng.random::<f64>();
        if p <= limit {
            return k;
        }
        k += 1;
    }
}

/// Mean rate at time `t` seconds: a swell between 0.5x and 1.5x of `base`
/// over a 20 second period.
pub fn drifting_rate(base: f64, t: f64) -> f64 {
    base * (1.0 + 0.5 * (t * std::f64::consts::TAU / 20.0).sin())
}

/// Spawn a thread adding about `hits_per_second` hits per second to each graph.
pub fn start_demo_traffic(hits_per_second: f64, graphs: Vec<SharedGraph>) {
    if hits_per_second <= 0.0 {
        return;
    }
    info!("demo traffic at ~{} hits/s", hits_per_second);
    thread::spawn(move || {
        let mut rng = rand::rng();
        let step = BATCH.as_secs_f64();
        let mut t = 0.0;
        loop {
            let mut mean = drifting_rate(hits_per_second, t) * step;
            // one batch in 500 is a burst
            if rng.random_ratio(1, 500) {
                mean *= 40.0;
            }
            for g in &graphs {
                let hits = poisson(&mut rng, mean);
                if hits > 0 {
                    g.write()
                        .unwrap_or_else(PoisonError::into_inner)
                        .graph
                        .add_hits(hits);
                }
            }
            t += step;
            thread::sleep(BATCH);
        }
    });
}
