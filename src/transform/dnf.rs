/*! Defines conditions in Disjunctive Normal Form (DNF) and implements an algorithm for
transforming a [`Predicate`] to a [`Dnf`].

[`Predicate`]: crate::syntax::Predicate
 */
use super::{accumulator::ClauseAccumulator, push_negations, Error, Normalizer};
use crate::{
    syntax::{Atom, Clause, ClauseSet, Predicate},
    trace,
};
use std::{collections::BTreeSet, fmt, ops::Deref};

/// Represents a [`Predicate`] in Disjunctive Normal Form (DNF).
///
/// **Hint**: A DNF is a disjunction of zero or more [`Clause`]s where each clause is a
/// conjunction of literals.
#[derive(PartialEq, Eq, Clone)]
pub struct Dnf<A: Atom>(ClauseSet<A>);

impl<A: Atom> Dnf<A> {
    /// Consumes the receiver and returns its underlying clause set.
    pub fn into_clause_set(self) -> ClauseSet<A> {
        self.0
    }

    /// Consumes the receiver and returns its conjunctions as plain sets of literals.
    pub fn into_sets(self) -> BTreeSet<BTreeSet<Predicate<A>>> {
        self.0.into_sets()
    }

    /// Evaluates the receiver, using `assignment` to decide the truth of its atoms.
    ///
    /// **Note**: an empty DNF is false and an empty conjunction is true.
    pub fn evaluate(&self, assignment: &impl Fn(&A) -> bool) -> bool {
        self.iter()
            .any(|clause| clause.iter().all(|lit| lit.evaluate(assignment)))
    }

    fn clause_to_predicate(clause: Clause<A>) -> Predicate<A> {
        let mut literals: Vec<_> = clause.into_literals().into_iter().collect();
        match literals.len() {
            0 => Predicate::True,
            1 => literals.remove(0),
            _ => Predicate::And(literals),
        }
    }
}

impl<A: Atom> From<ClauseSet<A>> for Dnf<A> {
    fn from(value: ClauseSet<A>) -> Self {
        Self(value)
    }
}

impl<A: Atom> Deref for Dnf<A> {
    type Target = ClauseSet<A>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<A: Atom> Default for Dnf<A> {
    fn default() -> Self {
        ClauseSet::default().into()
    }
}

/// Is the trait of types that can be transformed to [`Dnf`].
pub trait ToDnf<A: Atom> {
    /// Transforms `self` to a Disjunctive Normal Form (DNF) with the default [`Normalizer`].
    ///
    /// **Example**:
    /// ```rust
    /// use razor_clause::syntax::{Literal, Predicate};
    /// use razor_clause::transform::ToDnf;
    ///
    /// let a = Predicate::from(Literal::Pos("a"));
    /// let b = Predicate::from(Literal::Pos("b"));
    /// let c = Predicate::from(Literal::Pos("c"));
    /// let predicate = a.or(b).and(Predicate::not(c));
    ///
    /// assert_eq!("(a ∧ ¬c) ∨ (b ∧ ¬c)", predicate.dnf().unwrap().to_string());
    /// ```
    fn dnf(&self) -> Result<Dnf<A>, Error<A>>;
}

impl<A: Atom> ToDnf<A> for Predicate<A> {
    fn dnf(&self) -> Result<Dnf<A>, Error<A>> {
        Normalizer::default().dnf(self)
    }
}

impl<A: Atom> From<Dnf<A>> for Predicate<A> {
    fn from(value: Dnf<A>) -> Self {
        let mut clauses: Vec<_> = value
            .0
            .into_clauses()
            .into_iter()
            .map(Dnf::clause_to_predicate)
            .collect();
        match clauses.len() {
            0 => Predicate::False,
            1 => clauses.remove(0),
            _ => Predicate::Or(clauses),
        }
    }
}

impl<A: Atom> From<&Dnf<A>> for Predicate<A> {
    fn from(value: &Dnf<A>) -> Self {
        value.clone().into()
    }
}

impl<A: Atom> fmt::Display for Dnf<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Predicate::from(self), f)
    }
}

impl<A: Atom> fmt::Debug for Dnf<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Predicate::from(self), f)
    }
}

// Returns the DNF of `condition` in clause form.
pub(super) fn clause_set<A: Atom>(
    condition: &Predicate<A>,
    subsumption: bool,
) -> Result<ClauseSet<A>, Error<A>> {
    match condition {
        Predicate::Not(this) => clause_set(&push_negations(this, true)?, subsumption),
        Predicate::Or(these) => {
            // the disjunction of DNFs is a DNF
            let mut dnf = ClauseAccumulator::new(subsumption);
            for operand in these {
                for conjunction in clause_set(operand, subsumption)?.into_clauses() {
                    append_conjunction(&mut dnf, conjunction);
                }
            }
            Ok(dnf.into_clause_set())
        }
        Predicate::And(these) => {
            let mut operands = these.iter();
            let mut prev = match operands.next() {
                Some(first) => clause_set(first, subsumption)?,
                None => return Ok(Clause::from(Predicate::True).into()),
            };

            // distribute the conjunction over the disjunctions of each operand
            for operand in operands {
                let next = clause_set(operand, subsumption)?;
                let mut dnf = ClauseAccumulator::new(subsumption);
                for con1 in prev.iter() {
                    for con2 in next.iter() {
                        append_conjunction(&mut dnf, merge(con1, con2));
                    }
                }
                trace!(
                    event = trace::FOLD,
                    prev = prev.len(),
                    next = next.len(),
                    clauses = dnf.len()
                );
                prev = dnf.into_clause_set();
            }
            Ok(prev)
        }
        Predicate::True | Predicate::False | Predicate::Atom(_) => {
            Ok(Clause::from(condition.clone()).into())
        }
    }
}

// Adds `conjunction` to `dnf` unless it is false.
fn append_conjunction<A: Atom>(dnf: &mut ClauseAccumulator<A>, conjunction: Clause<A>) {
    if !conjunction.is_empty() && conjunction.iter().all(Predicate::is_false) {
        return;
    }
    dnf.add(conjunction);
}

// Returns the conjunction of `con1` and `con2`, cleaned up from constants.
fn merge<A: Atom>(con1: &Clause<A>, con2: &Clause<A>) -> Clause<A> {
    let con = con1.union(con2);
    if con.iter().any(Predicate::is_false) {
        return Predicate::False.into();
    }
    if con.iter().all(Predicate::is_true) {
        return Predicate::True.into();
    }
    con.into_literals()
        .into_iter()
        .filter(|lit| !lit.is_true())
        .into()
}
