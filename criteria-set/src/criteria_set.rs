mod boolean;

use std::{
    borrow::Borrow,
    collections::{hash_map::RandomState, HashSet},
    fmt,
    hash::{BuildHasher, Hash},
    num::NonZeroUsize,
};

use derive_more::From;
use thiserror::Error;
use tracing::trace;

/// A collection of independent criteria that is `true` as long as any criterion is present.
///
/// Useful to track things like the reasons why something is disabled or which validations are
/// still pending, where most callers only care whether *anything* is present.
///
/// Each criterion is stored at most once. Inserting a criterion that is already present keeps the
/// existing one untouched.
///
/// The aggregate boolean value is available through [`CriteriaSet::aggregate()`] as well as by
/// comparing the set against a [`bool`] directly:
///
/// ```
/// # use criteria_set::CriteriaSet;
/// let mut pending = CriteriaSet::new();
/// assert!(pending == false);
///
/// pending.insert("email");
/// assert!(pending == true);
/// assert!(pending.aggregate());
/// ```
#[derive(Clone, From)]
pub struct CriteriaSet<T, S = RandomState> {
    criteria: HashSet<T, S>,
}

/// Returned by [`CriteriaSet::ensure_clear()`] while criteria are still present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("{0} criteria still active")]
    Active(NonZeroUsize),
}

impl<T> CriteriaSet<T> {
    /// Creates an empty [`CriteriaSet`].
    pub fn new() -> Self {
        Self {
            criteria: HashSet::new(),
        }
    }
}

impl<T, S> CriteriaSet<T, S> {
    /// Creates an empty [`CriteriaSet`] that hashes its criteria using the given `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            criteria: HashSet::with_hasher(hasher),
        }
    }

    /// Returns `true` if no criteria are present.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns the number of distinct criteria that are present.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// The aggregate boolean value: `true` if any criterion is present.
    ///
    /// This is what `if criteria { ... }` would mean if Rust allowed it.
    pub fn aggregate(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if the aggregate boolean value matches `expected`.
    ///
    /// Same as comparing the set to a [`bool`] using `==`.
    pub fn equals_aggregate(&self, expected: bool) -> bool {
        self.aggregate() == expected
    }

    /// Turns the aggregate into a [`Result`], failing while any criterion is still present.
    pub fn ensure_clear(&self) -> Result<(), CriteriaError> {
        match NonZeroUsize::new(self.len()) {
            None => Ok(()),
            Some(count) => Err(CriteriaError::Active(count)),
        }
    }
}

impl<T: Eq + Hash, S: BuildHasher> CriteriaSet<T, S> {
    /// Returns `true` if a criterion equal to the given one is present.
    pub fn has<Q>(&self, criterion: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.criteria.contains(criterion)
    }

    /// Adds the criterion, returning `false` if an equal one was already present.
    ///
    /// An already present criterion is not replaced.
    pub fn insert(&mut self, criterion: T) -> bool {
        let inserted = self.criteria.insert(criterion);
        if inserted {
            trace!(len = self.criteria.len(), "criterion inserted");
        } else {
            trace!(len = self.criteria.len(), "criterion already present");
        }
        inserted
    }

    /// Removes the criterion, returning `false` if it was not present.
    pub fn erase<Q>(&mut self, criterion: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let erased = self.criteria.remove(criterion);
        if erased {
            trace!(len = self.criteria.len(), "criterion erased");
        } else {
            trace!(len = self.criteria.len(), "criterion absent");
        }
        erased
    }
}

impl<T, S: Default> Default for CriteriaSet<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for CriteriaSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.criteria == other.criteria
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for CriteriaSet<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for CriteriaSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CriteriaSet ")?;
        f.debug_set().entries(self.criteria.iter()).finish()
    }
}
