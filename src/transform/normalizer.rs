use super::{cnf, dnf, Cnf, Dnf, Error};
use crate::{
    syntax::{Atom, Predicate},
    trace,
};
use serde_derive::{Deserialize, Serialize};
use tracing::Level;

/// Is the entry point for computing normal forms with a given configuration.
///
/// A normalizer can be deserialized from a configuration file; missing fields take their
/// default values:
/// ```rust
/// use razor_clause::transform::Normalizer;
///
/// let normalizer: Normalizer = serde_json::from_str(r#"{"subsumption": true}"#).unwrap();
/// assert!(normalizer.subsumption());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Normalizer {
    /// Drops every clause that is a strict superset of another clause of the result.
    subsumption: bool,
}

impl Normalizer {
    /// Creates a normalizer that keeps every clause it produces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns subsumption pruning on or off.
    pub fn with_subsumption(self, subsumption: bool) -> Self {
        Self { subsumption }
    }

    #[inline(always)]
    pub fn subsumption(&self) -> bool {
        self.subsumption
    }

    /// Returns the Disjunctive Normal Form of `predicate`.
    pub fn dnf<A: Atom>(&self, predicate: &Predicate<A>) -> Result<Dnf<A>, Error<A>> {
        let span = span!(Level::TRACE, trace::DNF, subsumption = self.subsumption);
        let _enter = span.enter();

        let clauses = dnf::clause_set(predicate, self.subsumption)?;
        debug!(event = trace::NORMAL_FORM, clauses = clauses.len());
        Ok(clauses.into())
    }

    /// Returns the Conjunctive Normal Form of `predicate`.
    pub fn cnf<A: Atom>(&self, predicate: &Predicate<A>) -> Result<Cnf<A>, Error<A>> {
        let span = span!(Level::TRACE, trace::CNF, subsumption = self.subsumption);
        let _enter = span.enter();

        let clauses = cnf::clause_set(predicate, self.subsumption)?;
        debug!(event = trace::NORMAL_FORM, clauses = clauses.len());
        Ok(clauses.into())
    }
}
