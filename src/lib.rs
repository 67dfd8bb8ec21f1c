//! Synthetic SQL workload generator.
//!
//! Produces a transaction of `INSERT OR REPLACE` statements that repeatedly
//! overwrite a fixed range of rows with recombined presidential names.
//!
//! # Example
//!
//! ```rust
//! use prez_names::{Generator, NamePool};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let gen = Generator::new(NamePool::presidential())
//!     .with_items(2)
//!     .with_edits(1);
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut sql = Vec::new();
//! let stats = gen.generate(&mut rng, &mut sql).unwrap();
//!
//! assert_eq!(stats.statements, 2);
//! ```

pub mod generator;
pub mod names;
pub mod progress;
pub mod statement;
pub mod writer;

pub use generator::{GenerateStats, Generator, GeneratorConfig};
pub use names::{NamePool, PersonName};
