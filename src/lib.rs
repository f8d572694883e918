//! A probabilistic set-membership library for large corpora of short byte
//! strings — the motivating use is checking candidate passwords against the
//! "Have I Been Pwned" breached-password corpus without shipping the corpus
//! itself.
//!
//! The engine ([`Filter`]) is a Bloom filter whose hash functions are all
//! derived from a single SHA-1 digest: each hash function selects and packs
//! a permuted subset of the digest's 160 bits. Filters can be tuned by
//! target false-positive rate ([`optimal_params`]) or by memory budget
//! ([`constrained_params`]), and persisted to a portable, checksummed binary
//! format via [`Filter::save`]/[`Filter::load`].


mod codec;
mod error;
mod eval;
mod family;
mod filter;
mod hash;
mod hex;
mod io;
mod params;
mod random;

pub use {
    error::BloomError,
    filter::Filter,
    hash::{Hash, Sha1},
    hex::sha1_hex_to_bin,
    io::{IoReader, IoWriter, Reader, Writer},
    params::{constrained_params, optimal_params, B_MAX, K_MAX},
    random::{Csprng, DefaultPrng},
};
