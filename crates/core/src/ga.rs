//! Genetic optimization of the loading order.
//!
//! The optimizer searches over permutations of the input boxes, using
//! [`pack_by_order`] as the fitness oracle. Offspring are produced with
//! tournament selection, ordered crossover and swap mutation; the best
//! individuals of each generation survive unchanged.
//!
//! All randomness is drawn from a single 32-bit Mersenne Twister stream
//! seeded by the caller, so a fixed `(truck, boxes, params)` input always
//! yields the same result. Fitness evaluation runs in parallel across the
//! population; it consumes no randomness, so parallelism does not affect
//! the outcome.

use rand::prelude::*;
use rand_mt::Mt;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::item::CargoBox;
use crate::packer::pack_by_order;
use crate::result::PackResult;
use crate::truck::Truck;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the genetic loading optimizer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaParams {
    /// Population size.
    pub population: usize,
    /// Number of generations.
    pub generations: usize,
    /// Per-offspring probability of a swap mutation (0.0 - 1.0).
    pub mutation_rate: f64,
    /// Seed for the Mersenne Twister stream.
    pub seed: u32,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            population: 40,
            generations: 40,
            mutation_rate: 0.08,
            seed: 12345,
        }
    }
}

impl GaParams {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the population size.
    pub fn with_population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the PRNG seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidParams(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

/// One member of the population: a loading order and its packing outcome.
#[derive(Debug, Clone)]
struct Individual {
    order: Vec<usize>,
    score: f64,
    result: PackResult,
}

/// Optimizes the loading order for `boxes` in `truck` and returns the best
/// packing found.
///
/// Inputs are validated up front: invalid truck or box geometry, duplicate
/// box ids, and out-of-range parameters all fail fast. Boxes that no
/// explored order could place surface through `unplaced` on the returned
/// result rather than as errors.
pub fn optimize_ga(truck: &Truck, boxes: &[CargoBox], params: &GaParams) -> Result<PackResult> {
    truck.validate()?;
    params.validate()?;

    let mut seen: HashSet<&str> = HashSet::with_capacity(boxes.len());
    for item in boxes {
        item.validate()?;
        if !seen.insert(item.id()) {
            return Err(Error::DuplicateId(item.id().to_string()));
        }
    }

    if boxes.is_empty() {
        return Ok(PackResult::new());
    }

    let n = boxes.len();
    let (population, generations) = capped_budget(n, params.population, params.generations);

    let mut rng = Mt::new(params.seed);

    // Individual 0 carries the deterministic heuristic seed; the rest of the
    // initial population is uniform random permutations.
    let mut orders: Vec<Vec<usize>> = Vec::with_capacity(population);
    orders.push(heuristic_order(boxes));
    while orders.len() < population {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rng);
        orders.push(order);
    }
    let mut pop = evaluate(truck, boxes, orders);

    for generation in 0..generations {
        pop.sort_by(compare_score_desc);
        log::debug!(
            "GA gen {}: best score {:.4}, placed {}/{}",
            generation,
            pop[0].score,
            pop[0].result.placed_count(),
            n
        );

        let elite = (population / 10).max(1);
        let mut next: Vec<Individual> = pop.iter().take(elite).cloned().collect();

        // Offspring orders are bred sequentially from the single RNG stream,
        // then evaluated in parallel.
        let mut offspring: Vec<Vec<usize>> = Vec::with_capacity(population - next.len());
        while next.len() + offspring.len() < population {
            let p1 = tournament(&pop, &mut rng);
            let p2 = tournament(&pop, &mut rng);
            let mut child = order_crossover(&pop[p1].order, &pop[p2].order, &mut rng);
            swap_mutate(&mut child, params.mutation_rate, &mut rng);
            offspring.push(child);
        }

        next.extend(evaluate(truck, boxes, offspring));
        pop = next;
    }

    pop.sort_by(compare_score_desc);
    let best = pop.swap_remove(0);
    log::debug!(
        "GA finished: score {:.4}, utilization {}",
        best.score,
        best.result.utilization_percent()
    );

    Ok(best.result)
}

/// Caps the GA workload for large instances to keep the optimizer
/// responsive, then enforces the minimum viable budget.
fn capped_budget(n: usize, population: usize, generations: usize) -> (usize, usize) {
    let (max_pop, max_gen) = if n > 250 {
        (10, 6)
    } else if n > 150 {
        (18, 12)
    } else {
        (30, 25)
    };

    (
        population.min(max_pop).max(4),
        generations.min(max_gen).max(1),
    )
}

/// Sorts indices by box volume descending, breaking ties by priority
/// descending. The sort is stable, so equal boxes keep their input order.
fn heuristic_order(boxes: &[CargoBox]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| {
        let va = boxes[a].volume();
        let vb = boxes[b].volume();
        if (va - vb).abs() > 1e-12 {
            vb.partial_cmp(&va).unwrap_or(Ordering::Equal)
        } else {
            boxes[b].priority().cmp(&boxes[a].priority())
        }
    });
    order
}

fn evaluate(truck: &Truck, boxes: &[CargoBox], orders: Vec<Vec<usize>>) -> Vec<Individual> {
    orders
        .into_par_iter()
        .map(|order| {
            let result = pack_by_order(truck, boxes, &order);
            let score = result.score();
            Individual {
                order,
                score,
                result,
            }
        })
        .collect()
}

fn compare_score_desc(a: &Individual, b: &Individual) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Tournament selection with k = 3; score ties keep the earliest sample.
fn tournament<R: Rng>(pop: &[Individual], rng: &mut R) -> usize {
    let mut best = rng.gen_range(0..pop.len());
    for _ in 1..3 {
        let idx = rng.gen_range(0..pop.len());
        if pop[idx].score > pop[best].score {
            best = idx;
        }
    }
    best
}

/// Ordered crossover (OX): the child inherits a contiguous slice of parent
/// `a` in place; the remaining genes fill the empty positions left to right
/// in parent `b`'s order.
fn order_crossover<R: Rng>(a: &[usize], b: &[usize], rng: &mut R) -> Vec<usize> {
    let n = a.len();
    let mut i = rng.gen_range(0..n);
    let mut j = rng.gen_range(0..n);
    if i > j {
        std::mem::swap(&mut i, &mut j);
    }

    let mut child = vec![usize::MAX; n];
    let mut used = vec![false; n];
    for k in i..=j {
        child[k] = a[k];
        used[a[k]] = true;
    }

    let mut write = 0;
    for &gene in b {
        if used[gene] {
            continue;
        }
        while write < n && child[write] != usize::MAX {
            write += 1;
        }
        if write < n {
            child[write] = gene;
        }
    }

    child
}

/// Swaps two uniformly chosen positions with probability `rate`.
fn swap_mutate<R: Rng>(order: &mut [usize], rate: f64, rng: &mut R) {
    if rng.gen::<f64>() > rate {
        return;
    }
    let a = rng.gen_range(0..order.len());
    let b = rng.gen_range(0..order.len());
    order.swap(a, b);
}
