use crate::test_utils::{expected_order, gen_pairs, RandomKey};
use crate::verify::check_sorted;
use crate::{radix11_sort, radix8_sort, BufferId, RadixBits, RadixKey, SortBuffers};
use arbitrary_chunks::ArbitraryChunks;
use bytemuck::Zeroable;
use nanorand::WyRand;

#[test]
pub fn test_small_u32_scenario() {
    let mut keys = [5u32, 3, 3, 1];
    let mut keys_tmp = [0u32; 4];
    let mut values = [0u32, 1, 2, 3];
    let mut values_tmp = [0u32; 4];
    let mut buffers =
        SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp).unwrap();

    let result = radix8_sort(&mut buffers);

    assert_eq!(result, BufferId::Primary);
    assert_eq!(buffers.keys(result), &[1, 3, 3, 5]);
    assert_eq!(buffers.values(result), &[3, 1, 2, 0]);
}

#[test]
pub fn test_empty_input() {
    let mut keys: [f32; 0] = [];
    let mut keys_tmp: [f32; 0] = [];
    let mut values: [u32; 0] = [];
    let mut values_tmp: [u32; 0] = [];
    let mut buffers =
        SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp).unwrap();

    assert_eq!(radix8_sort(&mut buffers), BufferId::Primary);
    assert_eq!(radix11_sort(&mut buffers), BufferId::Primary);
    assert!(buffers.keys(BufferId::Primary).is_empty());
}

#[test]
pub fn test_single_key_runs_every_pass() {
    let mut keys = [-7.25f32];
    let mut keys_tmp = [0f32];
    let mut values = [42u32];
    let mut values_tmp = [0u32];
    let mut buffers =
        SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp).unwrap();

    let result = radix11_sort(&mut buffers);

    assert_eq!(result, BufferId::Scratch);
    assert_eq!(buffers.keys(result), &[-7.25]);
    assert_eq!(buffers.values(result), &[42]);
}

#[test]
pub fn test_float_scenario() {
    for radix_bits in [RadixBits::Eight, RadixBits::Eleven] {
        let original = [-1.5f32, 2.0, -3.0, 0.0];
        let mut keys = original;
        let mut keys_tmp = [0f32; 4];
        let mut values = [0u32, 1, 2, 3];
        let mut values_tmp = [0u32; 4];
        let mut buffers =
            SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp).unwrap();

        let result = crate::radix_sort(&mut buffers, radix_bits);

        assert_eq!(result, BufferId::after_passes(radix_bits.passes::<f32>()));
        assert_eq!(buffers.keys(result), &[-3.0, -1.5, 0.0, 2.0]);
        assert_eq!(check_sorted(&original, buffers.keys(result), buffers.values(result)), Ok(()));
    }
}

#[test]
pub fn test_f64_extremes() {
    let original = [
        f64::MAX,
        -0.0,
        f64::NEG_INFINITY,
        1e-310,
        0.0,
        -1e-310,
        f64::INFINITY,
        -f64::MAX,
    ];
    let mut keys = original;
    let mut keys_tmp = [0f64; 8];
    let mut values = [0u32, 1, 2, 3, 4, 5, 6, 7];
    let mut values_tmp = [0u32; 8];
    let mut buffers =
        SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp).unwrap();

    let result = radix11_sort(&mut buffers);

    assert_eq!(buffers.values(result), &[2, 7, 5, 1, 4, 3, 0, 6]);
    assert_eq!(buffers.keys(result)[3].to_bits(), (-0.0f64).to_bits());
}

fn resort_is_idempotent<K>(seed: u64, radix_bits: RadixBits)
where
    K: RandomKey,
{
    let mut rng = WyRand::new_seed(seed);
    let (mut keys, _) = gen_pairs::<K>(&mut rng, 5_000);
    keys.sort_by_key(|k| k.sort_bits());

    let sorted = keys.clone();
    let mut keys_tmp = vec![K::zeroed(); keys.len()];
    let mut values: Vec<u32> = (0..keys.len() as u32).collect();
    let mut values_tmp = vec![0u32; keys.len()];
    let identity = values.clone();
    let mut buffers =
        SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp).unwrap();

    let result = crate::radix_sort(&mut buffers, radix_bits);

    assert_eq!(result, BufferId::after_passes(radix_bits.passes::<K>()));
    assert_eq!(buffers.values(result), &identity[..]);
    assert!(buffers
        .keys(result)
        .iter()
        .zip(sorted.iter())
        .all(|(a, b)| a.to_bits() == b.to_bits()));
}

#[test]
pub fn test_resort_is_idempotent() {
    for radix_bits in [RadixBits::Eight, RadixBits::Eleven] {
        resort_is_idempotent::<u32>(10, radix_bits);
        resort_is_idempotent::<u64>(11, radix_bits);
        resort_is_idempotent::<f32>(12, radix_bits);
        resort_is_idempotent::<f64>(13, radix_bits);
    }
}

#[test]
pub fn test_stability_with_many_duplicates() {
    let mut rng = WyRand::new_seed(77);
    let (keys, _) = gen_pairs::<u32>(&mut rng, 20_000);
    // Only the top digit differs, so every lower pass sees a single-valued row
    let original: Vec<u32> = keys.iter().map(|k| k & 0xF000_0000).collect();

    let mut keys = original.clone();
    let mut keys_tmp = vec![0u32; keys.len()];
    let mut values: Vec<u32> = (0..keys.len() as u32).collect();
    let mut values_tmp = vec![0u32; keys.len()];
    let mut buffers =
        SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp).unwrap();

    let result = radix8_sort(&mut buffers);
    let sorted_values = buffers.values(result);

    assert_eq!(sorted_values, &expected_order(&original)[..]);

    // Split the output by how many keys share each top nibble, every chunk must hold a single
    // key value and increasing original indices.
    let mut counts = vec![0usize; 16];
    original.iter().for_each(|k| counts[(k >> 28) as usize] += 1);

    let sorted_keys = buffers.keys(result).to_vec();
    let chunks: Vec<&[u32]> = sorted_values.arbitrary_chunks(&counts).collect();
    let key_chunks: Vec<&[u32]> = sorted_keys.arbitrary_chunks(&counts).collect();

    for (nibble, (values, keys)) in chunks.iter().zip(key_chunks.iter()).enumerate() {
        assert!(keys.iter().all(|k| (k >> 28) as usize == nibble));
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
pub fn test_payload_of_any_copy_type() {
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Particle {
        id: u16,
        mass: f32,
    }

    let mut keys = [3u64, u64::MAX, 0, 3];
    let mut keys_tmp = [0u64; 4];
    let mut values = [
        Particle { id: 0, mass: 1.0 },
        Particle { id: 1, mass: 2.0 },
        Particle { id: 2, mass: 3.0 },
        Particle { id: 3, mass: 4.0 },
    ];
    let mut values_tmp = values;
    let mut buffers =
        SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp).unwrap();

    let result = radix8_sort(&mut buffers);
    let ids: Vec<u16> = buffers.values(result).iter().map(|p| p.id).collect();

    assert_eq!(buffers.keys(result), &[0, 3, 3, u64::MAX]);
    assert_eq!(ids, vec![2, 0, 3, 1]);
}
