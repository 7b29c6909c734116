//! Random draws over a validated request.

use std::collections::HashMap;

use shared::domain::{DrawRequest, DrawResult};

use crate::rng::{scale_unit, UnitRandom};

/// Ranges up to this many slots are shuffled as a materialized pool.
pub const MATERIALIZED_POOL_LIMIT: i128 = 1_000_000;

/// Draws `request.count` numbers in `[request.min, request.max]`.
///
/// Without `no_repeat` every number is sampled independently. With it the
/// result is the head of a uniformly shuffled pool, so values are distinct.
/// The request is trusted to have passed [`crate::validator::validate`].
pub fn draw<R: UnitRandom + ?Sized>(request: &DrawRequest, rng: &mut R) -> DrawResult {
    let numbers = if request.no_repeat {
        draw_distinct(request, rng)
    } else {
        draw_with_replacement(request, rng)
    };

    DrawResult {
        request: *request,
        numbers,
    }
}

fn draw_with_replacement<R: UnitRandom + ?Sized>(request: &DrawRequest, rng: &mut R) -> Vec<i64> {
    let slots = request.range_size();
    (0..request.count)
        .map(|_| offset(request.min, scale_unit(rng.next_unit(), slots)))
        .collect()
}

fn draw_distinct<R: UnitRandom + ?Sized>(request: &DrawRequest, rng: &mut R) -> Vec<i64> {
    let slots = request.range_size();
    let take = request.count as usize;

    if slots <= MATERIALIZED_POOL_LIMIT {
        let mut pool: Vec<i64> = (request.min..=request.max).collect();
        shuffle(&mut pool, rng);
        pool.truncate(take);
        return pool;
    }

    sparse_prefix(request.min, slots, take, rng)
}

/// Fisher-Yates, walking from the last index down to 1.
pub fn shuffle<T, R: UnitRandom + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = scale_unit(rng.next_unit(), i as i128 + 1) as usize;
        items.swap(i, j);
    }
}

/// Forward partial Fisher-Yates over a virtual pool of `slots` values. Only
/// displaced slots are stored, so memory grows with `take`, not `slots`.
fn sparse_prefix<R: UnitRandom + ?Sized>(
    min: i64,
    slots: i128,
    take: usize,
    rng: &mut R,
) -> Vec<i64> {
    let mut displaced: HashMap<i128, i128> = HashMap::with_capacity(take * 2);
    let mut picked = Vec::with_capacity(take);

    for i in 0..take as i128 {
        let j = i + scale_unit(rng.next_unit(), slots - i);
        let at_i = displaced.get(&i).copied().unwrap_or(i);
        let at_j = displaced.get(&j).copied().unwrap_or(j);
        displaced.insert(j, at_i);
        picked.push(offset(min, at_j));
    }

    picked
}

fn offset(min: i64, slot: i128) -> i64 {
    (min as i128 + slot) as i64
}

#[cfg(test)]
#[path = "tests/drawer_tests.rs"]
mod tests;
