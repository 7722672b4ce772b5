//! Checks the output of a key/value sort against the keys it started from.

use crate::error::VerifyError;
use crate::radix_key::RadixKey;

/// Verifies that `keys` are in order and that `values` hold the index each key came from.
///
/// Order is the total order the sort uses (see [`RadixKey::sort_bits`]) and keys are compared by
/// bit pattern, so `-0.0` and `0.0` are distinct. `values` must be a permutation of
/// `0..original.len()`.
pub fn check_sorted<K, I>(original: &[K], keys: &[K], values: &[I]) -> Result<(), VerifyError>
where
    K: RadixKey,
    I: Copy + TryInto<usize>,
{
    if keys.len() != original.len() {
        return Err(VerifyError::LengthMismatch {
            buffer: "keys",
            expected: original.len(),
            actual: keys.len(),
        });
    }

    if values.len() != original.len() {
        return Err(VerifyError::LengthMismatch {
            buffer: "values",
            expected: original.len(),
            actual: values.len(),
        });
    }

    let mut seen = vec![false; original.len()];

    for (index, (key, value)) in keys.iter().zip(values).enumerate() {
        if index > 0 && keys[index - 1].sort_bits() > key.sort_bits() {
            return Err(VerifyError::Unsorted { index });
        }

        let source = (*value)
            .try_into()
            .ok()
            .filter(|i| *i < original.len())
            .ok_or(VerifyError::IndexOutOfRange { index })?;

        if seen[source] {
            return Err(VerifyError::DuplicateIndex { index });
        }
        seen[source] = true;

        if original[source].to_bits() != key.to_bits() {
            return Err(VerifyError::Unpaired { index });
        }
    }

    Ok(())
}
