//! The conversion pipeline.
//!
//! Money becomes metal ([`metal`]), metal becomes period coinage ([`coins`]),
//! coinage becomes purchasing power ([`purchasing`]) and a social tier
//! ([`lifestyle`]). Every stage is a pure function of its inputs and the
//! read-only [`Dataset`](crate::dataset::Dataset).

pub mod coins;
pub mod lifestyle;
pub mod metal;
pub mod purchasing;

pub use coins::map_to_coins;
pub use lifestyle::classify;
pub use metal::to_base_metal;
pub use purchasing::compute_purchasing;
