pub mod sha1;

pub use sha1::Sha1;

/// A cryptographic hash function.
///
/// The bloom filter engine treats SHA-1 as an external collaborator: the only
/// thing it consumes is this trait's `hash` method, applied to arbitrary byte
/// buffers.
pub trait Hash {
    type Output;

    fn hash(&self, input: &[u8]) -> Self::Output;
}
