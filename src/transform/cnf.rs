/*! Defines conditions in Conjunctive Normal Form (CNF) and implements an algorithm for
transforming a [`Predicate`] to a [`Cnf`].

[`Predicate`]: crate::syntax::Predicate
 */
use super::{accumulator::ClauseAccumulator, push_negations, Error, Normalizer};
use crate::{
    syntax::{Atom, Clause, ClauseSet, Predicate},
    trace,
};
use std::{collections::BTreeSet, fmt, ops::Deref};

/// Represents a [`Predicate`] in Conjunctive Normal Form (CNF).
///
/// **Hint**: A CNF is a conjunction of zero or more [`Clause`]s where each clause is a
/// disjunction of literals.
#[derive(PartialEq, Eq, Clone)]
pub struct Cnf<A: Atom>(ClauseSet<A>);

impl<A: Atom> Cnf<A> {
    /// Consumes the receiver and returns its underlying clause set.
    pub fn into_clause_set(self) -> ClauseSet<A> {
        self.0
    }

    /// Consumes the receiver and returns its disjunctions as plain sets of literals.
    pub fn into_sets(self) -> BTreeSet<BTreeSet<Predicate<A>>> {
        self.0.into_sets()
    }

    /// Evaluates the receiver, using `assignment` to decide the truth of its atoms.
    ///
    /// **Note**: an empty CNF is true and an empty disjunction is false.
    pub fn evaluate(&self, assignment: &impl Fn(&A) -> bool) -> bool {
        self.iter()
            .all(|clause| clause.iter().any(|lit| lit.evaluate(assignment)))
    }

    fn clause_to_predicate(clause: Clause<A>) -> Predicate<A> {
        let mut literals: Vec<_> = clause.into_literals().into_iter().collect();
        match literals.len() {
            0 => Predicate::False,
            1 => literals.remove(0),
            _ => Predicate::Or(literals),
        }
    }
}

impl<A: Atom> From<ClauseSet<A>> for Cnf<A> {
    fn from(value: ClauseSet<A>) -> Self {
        Self(value)
    }
}

impl<A: Atom> Deref for Cnf<A> {
    type Target = ClauseSet<A>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<A: Atom> Default for Cnf<A> {
    fn default() -> Self {
        ClauseSet::default().into()
    }
}

/// Is the trait of types that can be transformed to [`Cnf`].
pub trait ToCnf<A: Atom> {
    /// Transforms `self` to a Conjunctive Normal Form (CNF) with the default [`Normalizer`].
    ///
    /// **Example**:
    /// ```rust
    /// use razor_clause::syntax::{Literal, Predicate};
    /// use razor_clause::transform::ToCnf;
    ///
    /// let a = Predicate::from(Literal::Pos("a"));
    /// let b = Predicate::from(Literal::Pos("b"));
    /// let c = Predicate::from(Literal::Pos("c"));
    /// let d = Predicate::from(Literal::Pos("d"));
    /// let predicate = a.and(b).or(c.and(d));
    ///
    /// assert_eq!(
    ///     "(a ∨ c) ∧ (a ∨ d) ∧ (b ∨ c) ∧ (b ∨ d)",
    ///     predicate.cnf().unwrap().to_string()
    /// );
    /// ```
    fn cnf(&self) -> Result<Cnf<A>, Error<A>>;
}

impl<A: Atom> ToCnf<A> for Predicate<A> {
    fn cnf(&self) -> Result<Cnf<A>, Error<A>> {
        Normalizer::default().cnf(self)
    }
}

impl<A: Atom> From<Cnf<A>> for Predicate<A> {
    fn from(value: Cnf<A>) -> Self {
        let mut clauses: Vec<_> = value
            .0
            .into_clauses()
            .into_iter()
            .map(Cnf::clause_to_predicate)
            .collect();
        match clauses.len() {
            0 => Predicate::True,
            1 => clauses.remove(0),
            _ => Predicate::And(clauses),
        }
    }
}

impl<A: Atom> From<&Cnf<A>> for Predicate<A> {
    fn from(value: &Cnf<A>) -> Self {
        value.clone().into()
    }
}

impl<A: Atom> fmt::Display for Cnf<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Predicate::from(self), f)
    }
}

impl<A: Atom> fmt::Debug for Cnf<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Predicate::from(self), f)
    }
}

// Returns the CNF of `condition` in clause form.
pub(super) fn clause_set<A: Atom>(
    condition: &Predicate<A>,
    subsumption: bool,
) -> Result<ClauseSet<A>, Error<A>> {
    match condition {
        Predicate::Not(this) => clause_set(&push_negations(this, true)?, subsumption),
        Predicate::And(these) => {
            // the conjunction of CNFs is a CNF
            let mut cnf = ClauseAccumulator::new(subsumption);
            for operand in these {
                for disjunction in clause_set(operand, subsumption)?.into_clauses() {
                    append_disjunction(&mut cnf, disjunction);
                }
            }
            Ok(cnf.into_clause_set())
        }
        Predicate::Or(these) => {
            let mut operands = these.iter();
            let mut prev = match operands.next() {
                Some(first) => clause_set(first, subsumption)?,
                None => return Ok(Clause::from(Predicate::False).into()),
            };

            // distribute the disjunction over the conjunctions of each operand
            for operand in operands {
                let next = clause_set(operand, subsumption)?;
                let mut cnf = ClauseAccumulator::new(subsumption);
                for dis1 in prev.iter() {
                    for dis2 in next.iter() {
                        append_disjunction(&mut cnf, merge(dis1, dis2));
                    }
                }
                trace!(
                    event = trace::FOLD,
                    prev = prev.len(),
                    next = next.len(),
                    clauses = cnf.len()
                );
                prev = cnf.into_clause_set();
            }
            Ok(prev)
        }
        Predicate::True | Predicate::False | Predicate::Atom(_) => {
            Ok(Clause::from(condition.clone()).into())
        }
    }
}

// Adds `disjunction` to `cnf` unless it is true.
fn append_disjunction<A: Atom>(cnf: &mut ClauseAccumulator<A>, disjunction: Clause<A>) {
    if !disjunction.is_empty() && disjunction.iter().all(Predicate::is_true) {
        return;
    }
    cnf.add(disjunction);
}

// Returns the disjunction of `dis1` and `dis2`, cleaned up from constants.
fn merge<A: Atom>(dis1: &Clause<A>, dis2: &Clause<A>) -> Clause<A> {
    let dis = dis1.union(dis2);
    if dis.iter().any(Predicate::is_true) {
        return Predicate::True.into();
    }
    if dis.iter().all(Predicate::is_false) {
        return Predicate::False.into();
    }
    dis.into_literals()
        .into_iter()
        .filter(|lit| !lit.is_false())
        .into()
}
