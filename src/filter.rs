use crate::{
    eval::eval,
    family,
    hash::{Hash, Sha1},
    random::{Csprng, DefaultPrng},
    BloomError,
};

/// A Bloom filter over SHA-1 digests.
///
/// `k` hash functions select `b`-bit values from a 160-bit SHA-1 digest; each
/// hash function is itself encoded as `b` bit-indices in `[0, 160)`, stored in
/// `table`. `bits` is the `2^b`-bit vector, LSB-first within each byte.
///
/// Invariants: `k >= 1`, `1 <= b <= B_MAX`, every byte of `table` is `< 160`,
/// `table.len() == k * b`, `bits.len() == ceil(2^b / 8)`. `table` never
/// changes after construction; only `bits` is mutated, by `insert_*`.
#[derive(Debug, Clone)]
pub struct Filter {
    k: u64,
    b: u8,
    table: Vec<u8>,
    bits: Vec<u8>,
}

impl Filter {
    /// Construct a new, empty filter with `k` hash functions and a
    /// `2^b`-bit vector, using the default PRNG (tries a cryptographic
    /// source, falls back if unavailable — see [`DefaultPrng`]).
    pub fn new(k: u64, b: u8) -> Result<Self, BloomError> {
        Self::new_with_prng(k, b, &mut DefaultPrng::new())
    }

    /// As [`Filter::new`], but the caller supplies the source of randomness
    /// used to generate the hash-function family.
    pub fn new_with_prng<R: Csprng>(k: u64, b: u8, prng: &mut R) -> Result<Self, BloomError> {
        validate_params(k, b)?;
        let size = buffer_size(k, b)?;

        let table_len = checked_table_len(k, b)?;
        let vector_len = size - table_len;

        let mut table = vec![0u8; table_len];
        family::generate(&mut table, prng);

        Ok(Self {
            k,
            b,
            table,
            bits: vec![0u8; vector_len],
        })
    }

    /// Reassemble a filter from its raw, already-validated parts. Used by
    /// the persistence codec, which performs its own validation (including
    /// the checksum check) before calling this.
    pub(crate) fn from_raw_parts(k: u64, b: u8, table: Vec<u8>, bits: Vec<u8>) -> Self {
        Self { k, b, table, bits }
    }

    pub fn k(&self) -> u64 {
        self.k
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    /// Number of bits in the underlying bit vector, i.e. `2^b`.
    pub fn bits(&self) -> u64 {
        1u64 << self.b
    }

    /// Total bytes occupied by the hash-function table and bit vector.
    pub fn memory_bytes(&self) -> usize {
        self.table.len() + self.bits.len()
    }

    pub(crate) fn table(&self) -> &[u8] {
        &self.table
    }

    pub(crate) fn vector(&self) -> &[u8] {
        &self.bits
    }

    /// Insert a byte string by first hashing it with SHA-1.
    pub fn insert_bytes(&mut self, buf: &[u8]) {
        let digest = Sha1::default().hash(buf);
        self.insert_sha(&digest);
    }

    /// Insert a UTF-8 string by first hashing its bytes with SHA-1.
    pub fn insert_str(&mut self, s: &str) {
        self.insert_bytes(s.as_bytes());
    }

    /// Insert a pre-computed SHA-1 digest.
    pub fn insert_sha(&mut self, digest: &[u8; 20]) {
        for i in 0..self.k as usize {
            let j = eval(&self.table, i, self.b, digest);
            let (byte, bit) = (j / 8, j % 8);
            self.bits[byte as usize] |= 1 << bit;
        }
    }

    /// Query whether a byte string is (probably) present, by first hashing
    /// it with SHA-1.
    pub fn query_bytes(&self, buf: &[u8]) -> bool {
        let digest = Sha1::default().hash(buf);
        self.query_sha(&digest)
    }

    /// Query whether a UTF-8 string is (probably) present, by first hashing
    /// its bytes with SHA-1.
    pub fn query_str(&self, s: &str) -> bool {
        self.query_bytes(s.as_bytes())
    }

    /// Query whether a pre-computed SHA-1 digest is (probably) present.
    /// Returns `false` only if the string is definitely absent.
    pub fn query_sha(&self, digest: &[u8; 20]) -> bool {
        (0..self.k as usize).all(|i| {
            let j = eval(&self.table, i, self.b, digest);
            let (byte, bit) = (j / 8, j % 8);
            (self.bits[byte as usize] >> bit) & 1 == 1
        })
    }

    /// Load a previously-saved filter from any [`std::io::Read`].
    pub fn load<R: std::io::Read>(reader: R) -> Result<Self, BloomError> {
        crate::codec::load(reader)
    }

    /// Save this filter to any [`std::io::Write`].
    pub fn save<W: std::io::Write>(&self, writer: W) -> Result<(), BloomError> {
        crate::codec::save(self, writer)
    }

    /// Load a previously-saved filter from a raw byte-callback stream.
    pub fn load_stream<R: crate::io::Reader>(reader: &mut R) -> Result<Self, BloomError> {
        crate::codec::load_stream(reader)
    }

    /// Save this filter to a raw byte-callback stream.
    pub fn save_stream<W: crate::io::Writer>(&self, writer: &mut W) -> Result<(), BloomError> {
        crate::codec::save_stream(self, writer)
    }
}

/// `k == 0` or `b == 0` is `ParamError`; `b` above [`crate::params::B_MAX`] or
/// `k` above [`crate::params::K_MAX`] is `TooBig`.
pub(crate) fn validate_params(k: u64, b: u8) -> Result<(), BloomError> {
    if k == 0 || b == 0 {
        return Err(BloomError::ParamError);
    }
    if (b as u32) > crate::params::B_MAX {
        return Err(BloomError::TooBig);
    }
    Ok(())
}

/// Total allocation size for a `(k, b)` filter: `k*b + ceil(2^b / 8)`, with
/// every multiplication/addition/shift checked against `usize` overflow.
pub(crate) fn buffer_size(k: u64, b: u8) -> Result<usize, BloomError> {
    validate_params(k, b)?;

    let table_len = checked_table_len(k, b)?;

    let vector_bits = 1usize
        .checked_shl(b as u32)
        .ok_or(BloomError::TooBig)?;
    let vector_len = vector_bits / 8 + usize::from(vector_bits % 8 != 0);

    table_len.checked_add(vector_len).ok_or(BloomError::TooBig)
}

fn checked_table_len(k: u64, b: u8) -> Result<usize, BloomError> {
    let k: usize = k.try_into().map_err(|_| BloomError::TooBig)?;
    k.checked_mul(b as usize).ok_or(BloomError::TooBig)
}
