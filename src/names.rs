//! The fixed pool of full names that generated rows are recombined from.
//!
//! Each full name is split once, when the pool is built, into a first and a
//! last name. Picks are uniform and independent, so a generated name may pair
//! the first name of one entry with the last name of another.

use rand::Rng;

/// Source names for the default pool. "Kenedy" is intentional fixture data.
pub const PRESIDENTS: &[&str] = &[
    "George Washington",
    "Thomas Jefferson",
    "Abraham Lincoln",
    "Franklin Roosevelt",
    "John Kenedy",
];

/// A full name split into its first and last tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    /// Split on whitespace; tokens past the second are ignored.
    pub fn parse(full_name: &str) -> anyhow::Result<Self> {
        let mut parts = full_name.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(first), Some(last)) => Ok(Self {
                first: first.to_string(),
                last: last.to_string(),
            }),
            _ => anyhow::bail!(
                "name must have a first and a last part: {:?}",
                full_name
            ),
        }
    }
}

/// Immutable, non-empty pool of split names.
#[derive(Debug, Clone)]
pub struct NamePool {
    names: Vec<PersonName>,
}

impl NamePool {
    /// The five-entry presidential pool.
    pub fn presidential() -> Self {
        let names = PRESIDENTS
            .iter()
            .filter_map(|n| PersonName::parse(n).ok())
            .collect();
        Self { names }
    }

    pub fn from_full_names<I, S>(full_names: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = full_names
            .into_iter()
            .map(|n| PersonName::parse(n.as_ref()))
            .collect::<anyhow::Result<Vec<_>>>()?;

        if names.is_empty() {
            anyhow::bail!("name pool must contain at least one name");
        }

        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[PersonName] {
        &self.names
    }

    /// First name of a uniformly chosen entry
    pub fn pick_first<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.names[rng.random_range(0..self.names.len())].first
    }

    /// Last name of a uniformly chosen entry
    pub fn pick_last<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.names[rng.random_range(0..self.names.len())].last
    }

    /// Draw a first and a last name independently and join them.
    ///
    /// The first-name draw always happens before the last-name draw, which
    /// keeps seeded output stable.
    pub fn recombine<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let first = self.pick_first(rng);
        let last = self.pick_last(rng);
        format!("{} {}", first, last)
    }
}

impl Default for NamePool {
    fn default() -> Self {
        Self::presidential()
    }
}
