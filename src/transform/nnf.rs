/*! Implements an algorithm for pushing negations of a [`Predicate`] down to its atoms.

[`Predicate`]: crate::syntax::Predicate
*/
use super::Error;
use crate::syntax::{Atom, Predicate};

/// Is the trait of types that can be transformed to Negation Normal Form (NNF).
///
/// **Hint**: An NNF is a predicate where negation only appears inside its atoms; that is,
/// it contains no [`Predicate::Not`] nodes.
pub trait ToNnf<A: Atom> {
    /// Transforms `self` to a Negation Normal Form (NNF).
    ///
    /// **Example**:
    /// ```rust
    /// use razor_clause::syntax::{Literal, Predicate};
    /// use razor_clause::transform::ToNnf;
    ///
    /// let a = Predicate::from(Literal::Pos("a"));
    /// let b = Predicate::from(Literal::Pos("b"));
    /// let predicate = Predicate::not(a.or(Predicate::not(b)));
    ///
    /// assert_eq!("¬a ∧ b", predicate.nnf().unwrap().to_string());
    /// ```
    fn nnf(&self) -> Result<Predicate<A>, Error<A>>;
}

impl<A: Atom> ToNnf<A> for Predicate<A> {
    fn nnf(&self) -> Result<Predicate<A>, Error<A>> {
        push_negations(self, false)
    }
}

/// Returns `predicate` with its negations pushed down to the atoms. When `negated` is true,
/// the result is the negation of `predicate`.
///
/// Double negations cancel out, constants flip and conjunctions and disjunctions are swapped
/// under negation (De Morgan). A negated atom is replaced by the atom's [`Atom::negate`];
/// the function fails with [`Error::UnsupportedPredicateKind`] if the atom has no negated
/// counterpart.
pub fn push_negations<A: Atom>(
    predicate: &Predicate<A>,
    negated: bool,
) -> Result<Predicate<A>, Error<A>> {
    match predicate {
        Predicate::True if negated => Ok(Predicate::False),
        Predicate::False if negated => Ok(Predicate::True),
        Predicate::True | Predicate::False => Ok(predicate.clone()),
        Predicate::Atom(this) => {
            if !negated {
                return Ok(predicate.clone());
            }
            this.negate()
                .map(Predicate::Atom)
                .ok_or_else(|| Error::UnsupportedPredicateKind {
                    predicate: predicate.clone(),
                })
        }
        Predicate::Not(this) => push_negations(this, !negated),
        Predicate::And(these) => {
            let operands = push_all(these, negated)?;
            Ok(if negated {
                Predicate::Or(operands)
            } else {
                Predicate::And(operands)
            })
        }
        Predicate::Or(these) => {
            let operands = push_all(these, negated)?;
            Ok(if negated {
                Predicate::And(operands)
            } else {
                Predicate::Or(operands)
            })
        }
    }
}

fn push_all<A: Atom>(
    predicates: &[Predicate<A>],
    negated: bool,
) -> Result<Vec<Predicate<A>>, Error<A>> {
    predicates
        .iter()
        .map(|p| push_negations(p, negated))
        .collect()
}
