use super::{Atom, Predicate};
use std::{collections::BTreeSet, ops::Deref};

/// Represents a collection of literal [`Predicate`]s; that is, constants and atoms.
///
/// **Note:**
/// The interpretation of a clause depends on its syntactic context.
/// For example, a [`Cnf`] clause is interpreted as disjunction of literals whereas
/// a [`Dnf`] clause corresponds to a conjunction of literals.
///
/// [`Cnf`]: crate::transform::Cnf
/// [`Dnf`]: crate::transform::Dnf
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct Clause<A: Atom>(BTreeSet<Predicate<A>>);

impl<A: Atom> Clause<A> {
    /// Returns the literals of the receiver clause.
    pub fn literals(&self) -> &BTreeSet<Predicate<A>> {
        &self.0
    }

    /// Consumes the receiver and returns its underlying set of literals.
    pub fn into_literals(self) -> BTreeSet<Predicate<A>> {
        self.0
    }

    /// Returns a clause containing all literals in the receiver and `other`.
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().into()
    }

    /// Returns true if every literal of the receiver is also in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl<A: Atom> Deref for Clause<A> {
    type Target = BTreeSet<Predicate<A>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<A: Atom> From<Predicate<A>> for Clause<A> {
    fn from(value: Predicate<A>) -> Self {
        vec![value].into_iter().into()
    }
}

impl<A, I> From<I> for Clause<A>
where
    A: Atom,
    I: IntoIterator<Item = Predicate<A>>,
{
    fn from(value: I) -> Self {
        Self(value.into_iter().collect())
    }
}

impl<A: Atom> Default for Clause<A> {
    fn default() -> Self {
        Self(BTreeSet::new())
    }
}

/// Represents a set of [`Clause`]s.
///
/// **Note:**
/// The interpretation of a clause set depends on its syntactic context. For example,
/// a [`Cnf`] is a clause set that is interpreted as a conjunction of clauses where each
/// clause is a disjunction of literals. In contrast, a [`Dnf`] is a clause set that
/// corresponds to a disjunction of clauses where each clause is a conjunction of literals.
///
/// [`Cnf`]: crate::transform::Cnf
/// [`Dnf`]: crate::transform::Dnf
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ClauseSet<A: Atom>(BTreeSet<Clause<A>>);

impl<A: Atom> From<Clause<A>> for ClauseSet<A> {
    fn from(value: Clause<A>) -> Self {
        vec![value].into_iter().into()
    }
}

impl<A, I> From<I> for ClauseSet<A>
where
    A: Atom,
    I: IntoIterator<Item = Clause<A>>,
{
    fn from(value: I) -> Self {
        Self(value.into_iter().collect())
    }
}

impl<A: Atom> ClauseSet<A> {
    /// Returns the clauses of the receiver.
    pub fn clauses(&self) -> &BTreeSet<Clause<A>> {
        &self.0
    }

    /// Consumes the receiver and returns its underlying clauses.
    pub fn into_clauses(self) -> BTreeSet<Clause<A>> {
        self.0
    }

    /// Consumes the receiver and returns its clauses as plain sets of literals.
    pub fn into_sets(self) -> BTreeSet<BTreeSet<Predicate<A>>> {
        self.0.into_iter().map(Clause::into_literals).collect()
    }
}

impl<A: Atom> Deref for ClauseSet<A> {
    type Target = BTreeSet<Clause<A>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<A: Atom> Default for ClauseSet<A> {
    fn default() -> Self {
        BTreeSet::<Clause<A>>::new().into()
    }
}
