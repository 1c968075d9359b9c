use crate::syntax::{Atom, Clause, ClauseSet};
use std::collections::BTreeSet;

/// Collects the clauses of a normal form while it is being built.
///
/// Clauses are kept in buckets by their number of literals so that subsumption checks only
/// visit clauses of compatible sizes: a subset of a clause must be smaller and a superset
/// must be larger than the clause itself. With subsumption on, a clause is not added if a
/// subset of it is already collected and adding a clause evicts its collected supersets.
pub(super) struct ClauseAccumulator<A: Atom> {
    buckets: Vec<BTreeSet<Clause<A>>>,
    subsumption: bool,
}

impl<A: Atom> ClauseAccumulator<A> {
    pub fn new(subsumption: bool) -> Self {
        Self {
            buckets: Vec::new(),
            subsumption,
        }
    }

    /// Returns the number of collected clauses.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(BTreeSet::len).sum()
    }

    pub fn add(&mut self, clause: Clause<A>) {
        if self.subsumption {
            if self.has_subset_of(&clause) {
                return;
            }
            self.remove_supersets_of(&clause);
        }
        self.bucket_mut(clause.len()).insert(clause);
    }

    pub fn remove(&mut self, clause: &Clause<A>) -> bool {
        self.buckets
            .get_mut(clause.len())
            .map_or(false, |bucket| bucket.remove(clause))
    }

    /// Returns true if a strict subset of `clause` is collected.
    pub fn has_subset_of(&self, clause: &Clause<A>) -> bool {
        self.buckets
            .iter()
            .take(clause.len())
            .flatten()
            .any(|c| c.is_subset_of(clause))
    }

    /// Removes every collected strict superset of `clause`.
    pub fn remove_supersets_of(&mut self, clause: &Clause<A>) {
        let supersets: Vec<_> = self
            .buckets
            .iter()
            .skip(clause.len() + 1)
            .flatten()
            .filter(|c| clause.is_subset_of(c))
            .cloned()
            .collect();
        for superset in &supersets {
            self.remove(superset);
        }
    }

    /// Consumes the receiver and returns the collected clauses.
    pub fn into_clause_set(self) -> ClauseSet<A> {
        self.buckets.into_iter().flatten().into()
    }

    fn bucket_mut(&mut self, size: usize) -> &mut BTreeSet<Clause<A>> {
        if size >= self.buckets.len() {
            self.buckets.resize_with(size + 1, BTreeSet::new);
        }
        &mut self.buckets[size]
    }
}
