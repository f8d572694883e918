use crate::Csprng;

/// Number of bits in a SHA-1 digest; also the number of distinct bit-indices
/// a hash-function-family can draw from.
pub const SHA1_BITS: usize = 160;

/// Populate `h` (expected to already be sized to exactly `k * b` bytes) with
/// hash-function bit-indices into a SHA-1 digest.
///
/// Each group of `b` bytes encodes one hash function. The family is built to
/// cover all 160 bit positions before repeating any: every full 160-element
/// block is an independent Fisher–Yates shuffle of `[0, 160)`, so when
/// `k * b <= 160` every hash function's indices are pairwise distinct, and
/// every 160-byte block thereafter still uses each index exactly once.
pub fn generate<R: Csprng>(h: &mut [u8], prng: &mut R) {
    let mut permutation: [u8; SHA1_BITS] = {
        let mut p = [0u8; SHA1_BITS];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = i as u8;
        }
        p
    };

    let mut generated = 0;
    while generated < h.len() {
        fisher_yates(&mut permutation, prng);

        let copy_len = (h.len() - generated).min(SHA1_BITS);
        h[generated..generated + copy_len].copy_from_slice(&permutation[..copy_len]);
        generated += copy_len;
    }
}

fn fisher_yates<R: Csprng>(p: &mut [u8; SHA1_BITS], prng: &mut R) {
    for i in (1..SHA1_BITS).rev() {
        let j = prng.below(i as u64 + 1) as usize;
        p.swap(i, j);
    }
}
