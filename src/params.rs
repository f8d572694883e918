/// Upper bound on `b` (log2 of the bit-vector length): at most the number of
/// bits addressable by a pointer-sized integer, and never more than the 160
/// bits available in a SHA-1 digest (there's no point in a hash function
/// wider than its input).
pub const B_MAX: u32 = {
    let bits_per_usize = usize::BITS;
    if bits_per_usize < 160 {
        bits_per_usize
    } else {
        160
    }
};

/// Upper bound on `k` (number of hash functions): the hash-function table
/// has `k * b` bytes and must fit in memory, so `k` can never exceed
/// `usize::MAX`, even though the on-disk format encodes it as a `u64`. On a
/// 32-bit host this is a tighter bound than `u64::MAX`.
pub const K_MAX: u64 = usize::MAX as u64;

/// Map `(count, fp)` — expected cardinality and desired false-positive rate —
/// to `(k, b)`, using the standard Bloom filter sizing formulas. Makes no
/// promise about memory consumption.
pub fn optimal_params(count: u64, fp: f64) -> (u64, u8) {
    let log_fp = fp.log2();

    let bits_per_element = -1.44 * log_fp;
    let bits = bits_per_element * count as f64;
    // A tiny epsilon avoids an exact power of two rounding down due to
    // floating-point error before the ceiling.
    let b = (bits.log2() + 1e-6).ceil();
    let b = if b > B_MAX as f64 {
        B_MAX as u8
    } else {
        b as u8
    };

    let k = (-log_fp).ceil();
    let k = if k > K_MAX as f64 { K_MAX } else { k as u64 };

    (k.max(1), b.max(1))
}

/// Map `(count, max_memory)` — expected cardinality and a byte budget — to
/// `(k, b)`. Iterates `b` upward from 8, at each step picking the
/// false-positive-minimizing `k` for that `b`, and keeps the largest `b`
/// whose buffer fits in `max_memory`. Never returns `b < 8`, even if that
/// violates the budget (best-effort guarantee).
pub fn constrained_params(count: u64, max_memory: usize) -> (u64, u8) {
    let mut best = (optimal_k(8, count), 8u8);

    for b in 9..=(B_MAX as u8) {
        let k = optimal_k(b, count);
        let buffer_size = crate::filter::buffer_size(k, b);
        match buffer_size {
            Ok(size) if size <= max_memory => best = (k, b),
            _ => break,
        }
    }

    best
}

fn optimal_k(b: u8, count: u64) -> u64 {
    let m = 2f64.powi(b as i32);
    let n = (count.max(1)) as f64;
    let k = (m / n * std::f64::consts::LN_2 + 1e-6).ceil();
    if k > K_MAX as f64 {
        K_MAX
    } else {
        (k as u64).max(1)
    }
}
