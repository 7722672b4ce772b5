use crate::verify::check_sorted;
use crate::{BufferId, RadixKey, SortBuffers};
use bytemuck::Zeroable;
use nanorand::{Rng, WyRand};
use std::fmt::Debug;

/// Keys that can be generated for tests, benches and timings.
///
/// Floats are always finite so that the comparison sorts used as a reference have a total order.
pub trait RandomKey: RadixKey + Debug + PartialOrd {
    fn random(rng: &mut WyRand) -> Self;
}

impl RandomKey for u32 {
    #[inline]
    fn random(rng: &mut WyRand) -> Self {
        rng.generate::<u32>()
    }
}

impl RandomKey for u64 {
    #[inline]
    fn random(rng: &mut WyRand) -> Self {
        rng.generate::<u64>()
    }
}

impl RandomKey for f32 {
    #[inline]
    fn random(rng: &mut WyRand) -> Self {
        let v = f32::from_bits(rng.generate::<u32>());
        if v.is_finite() {
            v
        } else {
            // Clearing the top exponent bit always gives a finite value
            f32::from_bits(v.to_bits() & 0xbfff_ffff)
        }
    }
}

impl RandomKey for f64 {
    #[inline]
    fn random(rng: &mut WyRand) -> Self {
        let v = f64::from_bits(rng.generate::<u64>());
        if v.is_finite() {
            v
        } else {
            f64::from_bits(v.to_bits() & 0xbfff_ffff_ffff_ffff)
        }
    }
}

pub fn gen_keys<K>(rng: &mut WyRand, n: usize) -> Vec<K>
where
    K: RandomKey,
{
    (0..n).map(|_| K::random(rng)).collect()
}

/// Random keys and the index of each key, the usual payload for a key/value sort.
pub fn gen_pairs<K>(rng: &mut WyRand, n: usize) -> (Vec<K>, Vec<u32>)
where
    K: RandomKey,
{
    let keys = gen_keys(rng, n);
    let values = (0..n as u32).collect();

    (keys, values)
}

pub fn gen_input_set<K>(seed: u64) -> Vec<Vec<K>>
where
    K: RandomKey,
{
    let mut rng = WyRand::new_seed(seed);
    let n = 200_000;
    let half = n / 2;
    let inputs: Vec<K> = gen_keys(&mut rng, n);

    // A handful of distinct keys, so most keys have equal partners and stability matters
    let palette: Vec<K> = gen_keys(&mut rng, 16);
    let duplicates: Vec<K> = (0..50_000)
        .map(|_| palette[rng.generate_range(0..palette.len())])
        .collect();

    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[..2].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 2_500)..(half + 2_500)].to_vec(),
        inputs[(half - 25_000)..(half + 25_000)].to_vec(),
        duplicates,
        inputs,
    ];

    out.reverse();

    out
}

/// The indices of `keys` in stably sorted order.
pub fn expected_order<K>(keys: &[K]) -> Vec<u32>
where
    K: RadixKey,
{
    let mut order: Vec<u32> = (0..keys.len() as u32).collect();
    order.sort_by_key(|i| keys[*i as usize].sort_bits());

    order
}

pub fn validate_sort<K, F>(inputs: Vec<K>, sort_fn: F)
where
    K: RadixKey,
    F: Fn(&mut SortBuffers<'_, K, u32>) -> BufferId,
{
    let original = inputs.clone();
    let n = inputs.len();
    let mut keys = inputs;
    let mut keys_tmp = vec![K::zeroed(); n];
    let mut values: Vec<u32> = (0..n as u32).collect();
    let mut values_tmp = vec![0u32; n];

    let mut buffers = SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp)
        .expect("buffers have equal lengths");
    let result = sort_fn(&mut buffers);

    if let Err(e) = check_sorted(&original, buffers.keys(result), buffers.values(result)) {
        panic!("invalid sort of {} keys: {}", n, e);
    }

    assert_eq!(buffers.values(result), &expected_order(&original)[..]);
}

pub fn sort_comparison_suite<K, F>(seed: u64, sort_fn: F)
where
    K: RandomKey,
    F: Fn(&mut SortBuffers<'_, K, u32>) -> BufferId,
{
    for s in gen_input_set::<K>(seed) {
        validate_sort(s, &sort_fn);
    }
}

/// Sorts u32 inputs with whole digits masked off, including digits that straddle 8 and 11 bit
/// boundaries, so passes see single-valued and empty rows.
pub fn validate_u32_patterns<F>(sort_fn: F)
where
    F: Fn(&mut SortBuffers<'_, u32, u32>) -> BufferId,
{
    let mut rng = WyRand::new_seed(0x5eed);
    let input_sets: Vec<Vec<u32>> = vec![
        vec![u32::MAX; 128],
        vec![0; 128],
        gen_keys(&mut rng, 128),
        gen_keys(&mut rng, 128_000),
        gen_keys(&mut rng, 4),
    ];

    let masks: [u32; 14] = [
        0xFFFF_FF00,
        0xFFFF_00FF,
        0xFF00_FFFF,
        0x00FF_FFFF,
        0x0000_FFFF,
        0xFFFF_0000,
        0x003F_FFFF,
        0xFFC0_07FF,
        0b10000000000000000000000000000000,
        0b00000000000000000000000000000001,
        0b11111111111111111111111111111110,
        0b01111111111111111111111111111111,
        0b10101010101010101010101010101010,
        0b01010101010101010101010101010101,
    ];

    for inputs in input_sets.iter() {
        validate_sort(inputs.clone(), &sort_fn);

        for mask in masks {
            validate_sort(
                inputs.iter().map(|v| *v & mask).collect::<Vec<u32>>(),
                &sort_fn,
            );
        }
    }
}
