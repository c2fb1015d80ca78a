use rand::{Rng, rng};

/// A source of random bits for the identifier's random suffix.
///
/// Collision avoidance, not secrecy, is the goal; implementations should be
/// well distributed but need not be cryptographically strong. Swap in a
/// deterministic implementation for tests.
pub trait RandSource {
    /// Returns 64 random bits.
    fn rand(&self) -> u64;
}

/// A [`RandSource`] that uses the thread-local RNG (`rand::rng()`).
///
/// Each OS thread has its own RNG instance, so calls from multiple threads
/// are contention-free. This type does **not** store the RNG itself; it is a
/// zero-sized handle that accesses the thread-local generator on each call,
/// and may therefore be freely shared across threads.
#[derive(Default, Clone, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}
