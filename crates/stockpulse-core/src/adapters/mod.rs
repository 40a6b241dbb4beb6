//! Feed adapters.
//!
//! A single deterministic in-process adapter ships with the engine.
//! Network-backed adapters implement [`crate::MarketFeed`] the same
//! way and own their own retry/timeout policy.

mod mock;

pub use mock::MockFeed;
