use {
    crate::Csprng,
    rand::{
        rngs::{OsRng, StdRng},
        RngCore,
        SeedableRng,
    },
    std::time::{SystemTime, UNIX_EPOCH},
};

/// The default [`Csprng`] used by [`crate::Filter::new`].
///
/// Tries the host's cryptographic random source (`OsRng`, backed by
/// `getrandom`/`/dev/urandom`/`BCryptGenRandom` depending on platform) first.
/// If a draw from that source ever fails, this falls back to a seeded
/// `StdRng` for the remainder of this `DefaultPrng`'s lifetime — mirroring
/// the original's "try OpenSSL, fall back to libc `rand()`" behavior, without
/// claiming the fallback is itself cryptographically strong. Per spec, the
/// contract callers may rely on is only "uniform on `[0, upper)`", not which
/// source produced it.
pub struct DefaultPrng {
    os: OsRng,
    fallback: Option<StdRng>,
}

impl DefaultPrng {
    pub fn new() -> Self {
        Self {
            os: OsRng,
            fallback: None,
        }
    }

    fn next_u64(&mut self) -> u64 {
        if self.fallback.is_none() {
            let mut buf = [0u8; 8];
            match self.os.try_fill_bytes(&mut buf) {
                Ok(()) => return u64::from_le_bytes(buf),
                Err(_) => self.fallback = Some(StdRng::seed_from_u64(weak_seed())),
            }
        }
        self.fallback.as_mut().expect("fallback seeded above").next_u64()
    }
}

impl Default for DefaultPrng {
    fn default() -> Self {
        Self::new()
    }
}

impl Csprng for DefaultPrng {
    fn below(&mut self, upper: u64) -> u64 {
        debug_assert!(upper > 0);

        // Rejection sampling: draw from the largest prefix of [0, u64::MAX]
        // whose length is a multiple of `upper`, so the modulo doesn't bias
        // toward smaller results.
        let limit = u64::MAX / upper * upper;
        loop {
            let n = self.next_u64();
            if n < limit {
                return n % upper;
            }
        }
    }
}

/// A non-cryptographic seed derived from ambient, slightly-unpredictable
/// process state. Only used if the OS random source is unavailable.
fn weak_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let marker = &nanos as *const u64 as u64;
    nanos ^ marker.rotate_left(17)
}
