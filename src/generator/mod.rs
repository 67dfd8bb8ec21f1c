//! Name-recombination generator.
//!
//! Emits a transaction of `INSERT OR REPLACE` statements: `edits` passes over
//! `items` row slots, each slot receiving a freshly recombined name per pass.
//! Statements are streamed to the output as they are produced.

use crate::names::NamePool;
use crate::statement::{self, BEGIN_TRANSACTION, COMMIT_TRANSACTION};
use crate::writer::SqlWriter;
use rand::Rng;
use serde::Serialize;
use std::io::Write;

/// Number of distinct row identifiers, `0..DEFAULT_ITEMS`
pub const DEFAULT_ITEMS: usize = 100;
/// Number of passes over all row identifiers
pub const DEFAULT_EDITS: usize = 500;
pub const DEFAULT_TABLE: &str = "people";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub items: usize,
    pub edits: usize,
    pub table: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEMS,
            edits: DEFAULT_EDITS,
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

/// Statistics from a generation run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerateStats {
    pub passes: usize,
    /// INSERT lines only; the transaction boundaries are not counted
    pub statements: u64,
    pub bytes_written: u64,
}

pub struct Generator {
    pool: NamePool,
    config: GeneratorConfig,
    on_pass: Option<Box<dyn Fn(usize)>>,
}

impl Generator {
    pub fn new(pool: NamePool) -> Self {
        Self {
            pool,
            config: GeneratorConfig::default(),
            on_pass: None,
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_items(mut self, items: usize) -> Self {
        self.config.items = items;
        self
    }

    pub fn with_edits(mut self, edits: usize) -> Self {
        self.config.edits = edits;
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.config.table = table.into();
        self
    }

    /// Called after each completed pass with the number of passes done so far.
    pub fn with_pass_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize) + 'static,
    {
        self.on_pass = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn pool(&self) -> &NamePool {
        &self.pool
    }

    /// Number of INSERT lines a full run will emit
    pub fn total_statements(&self) -> u64 {
        self.config.items as u64 * self.config.edits as u64
    }

    /// Write the whole script to `out`, drawing names from `rng`.
    ///
    /// Output is pass-major, slot-minor. Any write error aborts the run and
    /// is returned as is; nothing is retried.
    pub fn generate<W, R>(&self, rng: &mut R, out: W) -> std::io::Result<GenerateStats>
    where
        W: Write,
        R: Rng + ?Sized,
    {
        let mut writer = SqlWriter::new(out);
        let mut stats = GenerateStats::default();

        writer.write_statement(BEGIN_TRANSACTION)?;

        for pass in 0..self.config.edits {
            for slot in 0..self.config.items {
                let name = self.pool.recombine(rng);
                let stmt = statement::insert_or_replace(&self.config.table, slot, &name);
                writer.write_statement(&stmt)?;
                stats.statements += 1;
            }

            stats.passes = pass + 1;
            if let Some(ref on_pass) = self.on_pass {
                on_pass(stats.passes);
            }
        }

        writer.write_statement(COMMIT_TRANSACTION)?;

        let counts = writer.finish()?;
        stats.bytes_written = counts.bytes;

        Ok(stats)
    }
}
