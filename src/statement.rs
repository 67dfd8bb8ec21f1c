//! SQL text for the generated script.
//!
//! All statement text is built here. Names are interpolated verbatim inside
//! double quotes; callers must not pass names containing `"`.

pub const BEGIN_TRANSACTION: &str = "BEGIN;";
pub const COMMIT_TRANSACTION: &str = "COMMIT;";

/// Render one upsert of `name` into row `slot` of `table`.
pub fn insert_or_replace(table: &str, slot: usize, name: &str) -> String {
    format!(
        "INSERT OR REPLACE INTO {} VALUES ({}, \"{}\");",
        table, slot, name
    )
}
