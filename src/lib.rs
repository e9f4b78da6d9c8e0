//! # Sift
//!
//! Composable specifications and lazy filtering over typed record collections.
//!
//! Selection criteria are written once as small [`Predicate`]s, combined with
//! `and`, `or` and `not` into larger ones, and applied to any sequence of
//! records by a stateless engine that yields matches lazily and in order.
//! New kinds of criteria plug in without touching the combinators or the
//! engine.
//!
//! ## Quick Example
//!
//! ```rust
//! use sift::prelude::*;
//!
//! let catalogue = vec![
//!     Instrument::new("Flute", InstrumentType::Wind, Material::Metal),
//!     Instrument::new("Piano", InstrumentType::Chord, Material::Wood),
//!     Instrument::new("Drums", InstrumentType::Percussion, Material::Metal),
//! ];
//!
//! let metal = MaterialIs::new(Material::Metal);
//! let wind = KindIs::new(InstrumentType::Wind);
//!
//! let metal_wind: Vec<&str> = catalogue
//!     .iter()
//!     .filter_by(metal.and(wind))
//!     .map(|i| i.name.as_str())
//!     .collect();
//! assert_eq!(metal_wind, vec!["Flute"]);
//! ```
//!
//! ## Your own records
//!
//! The engine knows nothing about attributes. Implement [`Predicate`] for a
//! type, pass a closure, or project an attribute with
//! [`field`](predicate::field):
//!
//! ```rust
//! use sift::prelude::*;
//!
//! struct Order {
//!     id: u32,
//!     total_cents: u64,
//!     country: &'static str,
//! }
//!
//! let orders = vec![
//!     Order { id: 1, total_cents: 12_000, country: "NL" },
//!     Order { id: 2, total_cents: 800, country: "NL" },
//!     Order { id: 3, total_cents: 55_000, country: "BE" },
//! ];
//!
//! let large = field(|o: &Order| &o.total_cents, ge(10_000));
//! let domestic = field(|o: &Order| o.country, eq_ignore_ascii_case("nl"));
//!
//! let ids: Vec<u32> = orders.iter().filter_by(large.and(domestic)).map(|o| o.id).collect();
//! assert_eq!(ids, vec![1]);
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: emit `trace` events when filters are built and from
//!   predicates wrapped with `.traced(label)`.
//! - `serde`: `Serialize`/`Deserialize` for the catalogue types.
//! - `proptest`: `Arbitrary` implementations for the catalogue types.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod filter;
pub mod instrument;
pub mod predicate;
pub mod stream;
pub mod testing;

// Re-exports
pub use error::{FilterError, Result};
pub use filter::{
    filter, filter_present, partition, reject, try_filter, FilterExt, Filtered, Present,
    PresentExt,
};
pub use instrument::{
    sample_instruments, Instrument, InstrumentType, KindIs, Material, MaterialIs, NameContains,
    NameIs,
};
pub use predicate::{Predicate, PredicateExt};
pub use stream::{FilterStreamExt, FilteredStream};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::FilterError;
    pub use crate::filter::{filter, try_filter, FilterExt, PresentExt};
    pub use crate::instrument::{
        sample_instruments, Instrument, InstrumentType, KindIs, Material, MaterialIs,
        NameContains, NameIs,
    };
    pub use crate::predicate::prelude::*;
    pub use crate::stream::FilterStreamExt;
}
