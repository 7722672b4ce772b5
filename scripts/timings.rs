//! # timings
//!
//! Runs both radix sorts and the standard library's stable sort over random `(key, index)` pairs
//! of every size from 32 to 65536, and prints the mean time per sort in seconds as a table. Every
//! radix result is checked against its input before it counts.
//!
//! ## Usage
//!
//! ```
//! cargo run --release --features timings --bin timings
//! ```
//!
//!  - `ITERATIONS=20` sets how many sorts are averaged per size, defaults to 100
//!  - `SEED=1234` sets the seed of the input generator, defaults to 0

use lsdr::test_utils::{gen_pairs, RandomKey};
use lsdr::verify::check_sorted;
use lsdr::{radix11_sort, radix8_sort, BufferId, SortBuffers};
use nanorand::WyRand;
use std::time::Instant;

const MIN_SIZE: usize = 32;
const MAX_SIZE: usize = 65_536;

struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    fn elapsed_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[derive(Default)]
struct Totals {
    radix8: f64,
    radix11: f64,
    std_stable: f64,
}

fn time_radix<K>(
    keys: &[K],
    values: &[u32],
    sort_fn: fn(&mut SortBuffers<'_, K, u32>) -> BufferId,
) -> f64
where
    K: RandomKey,
{
    let mut sort_keys = keys.to_vec();
    let mut keys_tmp = keys.to_vec();
    let mut sort_values = values.to_vec();
    let mut values_tmp = values.to_vec();
    let mut buffers = SortBuffers::new(
        &mut sort_keys,
        &mut keys_tmp,
        &mut sort_values,
        &mut values_tmp,
    )
    .expect("buffers are allocated with matching lengths");

    let watch = Stopwatch::start();
    let result = sort_fn(&mut buffers);
    let elapsed = watch.elapsed_seconds();

    if let Err(e) = check_sorted(keys, buffers.keys(result), buffers.values(result)) {
        panic!("radix sort of {} keys failed verification: {}", keys.len(), e);
    }

    elapsed
}

fn time_std_stable<K>(keys: &[K], values: &[u32]) -> f64
where
    K: RandomKey,
{
    let mut pairs: Vec<(K, u32)> = keys.iter().copied().zip(values.iter().copied()).collect();

    let watch = Stopwatch::start();
    pairs.sort_by_key(|(k, _)| k.sort_bits());
    let elapsed = watch.elapsed_seconds();

    std::hint::black_box(pairs);

    elapsed
}

fn sweep<K>(name: &str, rng: &mut WyRand, iterations: usize)
where
    K: RandomKey,
{
    println!("Radix sort {} key ({} iterations)", name, iterations);
    println!("  size    radix8   radix11 std_stable");

    let mut size = MIN_SIZE;
    while size <= MAX_SIZE {
        let mut totals = Totals::default();

        for _ in 0..iterations {
            let (keys, values) = gen_pairs::<K>(rng, size);

            totals.radix8 += time_radix(&keys, &values, radix8_sort::<K, u32>);
            totals.radix11 += time_radix(&keys, &values, radix11_sort::<K, u32>);
            totals.std_stable += time_std_stable(&keys, &values);
        }

        let mult = 1.0 / iterations as f64;
        println!(
            "{:6}  {:.6}  {:.6}  {:.6}",
            size,
            totals.radix8 * mult,
            totals.radix11 * mult,
            totals.std_stable * mult
        );

        size *= 2;
    }

    println!();
}

fn env_or<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() {
    let iterations: usize = env_or("ITERATIONS", 100).max(1);
    let seed: u64 = env_or("SEED", 0);
    let mut rng = WyRand::new_seed(seed);

    sweep::<u32>("u32", &mut rng, iterations);
    sweep::<u64>("u64", &mut rng, iterations);
    sweep::<f32>("f32", &mut rng, iterations);
}
