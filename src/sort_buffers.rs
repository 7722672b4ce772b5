use crate::error::SortError;

/// Identifies one of the two buffers of a [`SortBuffers`].
///
/// Each pass reads one buffer and writes the other, so after `n` passes the sorted output is in
/// `Primary` when `n` is even and in `Scratch` when it is odd.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum BufferId {
    Primary = 0,
    Scratch = 1,
}

impl BufferId {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn other(self) -> Self {
        match self {
            BufferId::Primary => BufferId::Scratch,
            BufferId::Scratch => BufferId::Primary,
        }
    }

    /// The buffer that pass number `pass` reads from.
    #[inline]
    pub const fn for_pass(pass: usize) -> Self {
        if pass % 2 == 0 {
            BufferId::Primary
        } else {
            BufferId::Scratch
        }
    }

    /// The buffer holding the output once `passes` passes have run.
    #[inline]
    pub const fn after_passes(passes: usize) -> Self {
        Self::for_pass(passes)
    }
}

impl From<BufferId> for usize {
    fn from(id: BufferId) -> Self {
        id.index()
    }
}

/// The source and destination halves of a [`SortBuffers`] for a single pass.
pub(crate) struct PassBuffers<'b, K, V> {
    pub src_keys: &'b [K],
    pub dst_keys: &'b mut [K],
    pub src_values: &'b [V],
    pub dst_values: &'b mut [V],
}

/// Two key buffers and two value buffers of equal length.
///
/// The primary buffers hold the input. The scratch buffers may hold anything, they are fully
/// overwritten by the first pass. Both buffers of a pair are exclusive borrows, so they can never
/// alias each other.
pub struct SortBuffers<'a, K, V> {
    keys: [&'a mut [K]; 2],
    values: [&'a mut [V]; 2],
}

impl<'a, K, V> SortBuffers<'a, K, V> {
    pub fn new(
        keys: &'a mut [K],
        keys_scratch: &'a mut [K],
        values: &'a mut [V],
        values_scratch: &'a mut [V],
    ) -> Result<Self, SortError> {
        let expected = keys.len();

        for (buffer, actual) in [
            ("key scratch", keys_scratch.len()),
            ("value", values.len()),
            ("value scratch", values_scratch.len()),
        ] {
            if actual != expected {
                return Err(SortError::LengthMismatch {
                    buffer,
                    expected,
                    actual,
                });
            }
        }

        Ok(Self {
            keys: [keys, keys_scratch],
            values: [values, values_scratch],
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys[0].len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn keys(&self, id: BufferId) -> &[K] {
        &*self.keys[id.index()]
    }

    #[inline]
    pub fn values(&self, id: BufferId) -> &[V] {
        &*self.values[id.index()]
    }

    #[inline]
    pub fn keys_mut(&mut self, id: BufferId) -> &mut [K] {
        &mut *self.keys[id.index()]
    }

    #[inline]
    pub fn values_mut(&mut self, id: BufferId) -> &mut [V] {
        &mut *self.values[id.index()]
    }

    pub(crate) fn pass_buffers(&mut self, src: BufferId) -> PassBuffers<'_, K, V> {
        let [k0, k1] = &mut self.keys;
        let [v0, v1] = &mut self.values;

        match src {
            BufferId::Primary => PassBuffers {
                src_keys: k0,
                dst_keys: k1,
                src_values: v0,
                dst_values: v1,
            },
            BufferId::Scratch => PassBuffers {
                src_keys: k1,
                dst_keys: k0,
                src_values: v1,
                dst_values: v0,
            },
        }
    }
}
