/// Evaluate hash function `i` of a `k`-by-`b` hash-function table `h` against
/// digest `d`, returning a value in `[0, 2^b)`.
///
/// `h[i*b .. (i+1)*b)` holds `b` bit-indices into `d` (each `< 160`); the
/// selected bits are packed little-endian (bit-index `p` of the table slice
/// contributes bit `p` of the result).
pub fn eval(h: &[u8], i: usize, b: u8, d: &[u8; 20]) -> u64 {
    let b = b as usize;
    let slice = &h[i * b..(i + 1) * b];

    let mut value = 0u64;
    for (p, &index) in slice.iter().enumerate() {
        debug_assert!((index as usize) < 160);
        let bit = (d[index as usize / 8] >> (index % 8)) & 1;
        value |= (bit as u64) << p;
    }

    debug_assert!(b == 64 || value < (1u64 << b));
    value
}
