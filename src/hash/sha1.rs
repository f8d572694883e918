use crate::Hash;

// Block size in bytes.
const BLOCK_BYTES: usize = 64;

type State = [u32; 5];

const H0: State = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// SHA-1, per FIPS 180-4. Produces a 20-byte digest.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha1(());

impl Hash for Sha1 {
    type Output = [u8; 20];

    fn hash(&self, input: &[u8]) -> Self::Output {
        let mut state = H0;
        for block in pad(input) {
            compress(&mut state, &block);
        }
        let mut out = [0u8; 20];
        for (word, chunk) in state.iter().zip(out.chunks_exact_mut(4)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

/// Split `input` into `BLOCK_BYTES`-sized blocks, applying the standard
/// `0x80`-then-zeros-then-64-bit-big-endian-bit-length padding.
fn pad(input: &[u8]) -> Vec<[u8; BLOCK_BYTES]> {
    let bit_len = (input.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity(input.len() + BLOCK_BYTES + 1);
    padded.extend_from_slice(input);
    padded.push(0x80);
    while padded.len() % BLOCK_BYTES != 56 {
        padded.push(0);
    }
    padded.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_BYTES, 0);
    padded
        .chunks_exact(BLOCK_BYTES)
        .map(|c| c.try_into().unwrap())
        .collect()
}

fn compress(state: &mut State, block: &[u8; BLOCK_BYTES]) {
    let mut w = [0u32; 80];
    for (word, chunk) in w[..16].iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (t, &wt) in w.iter().enumerate() {
        let (f, k) = match t {
            0..=19 => ((b & c) | ((!b) & d), 0x5a827999u32),
            20..=39 => (b ^ c ^ d, 0x6ed9eba1),
            40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
            _ => (b ^ c ^ d, 0xca62c1d6),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(wt);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
