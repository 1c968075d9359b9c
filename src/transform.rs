/*! Implements the negation normal form and the clause forms of conjunctive and disjunctive
normal forms for boolean conditions. */
mod accumulator;
mod cnf;
mod dnf;
mod nnf;
mod normalizer;

pub use cnf::{Cnf, ToCnf};
pub use dnf::{Dnf, ToDnf};
pub use nnf::{push_negations, ToNnf};
pub use normalizer::Normalizer;

use crate::syntax::{Atom, Predicate};
use thiserror::Error;

/// Is the type of errors arising from transforming conditions.
#[derive(Error, Debug)]
pub enum Error<A: Atom> {
    /// Is returned when a negation is pushed into a predicate that has no negated form.
    #[error("predicate `{}` cannot be negated", .predicate.to_string())]
    UnsupportedPredicateKind { predicate: Predicate<A> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn assert_equivalent(predicate: &Pred, normalizer: &Normalizer) {
        let dnf = normalizer.dnf(predicate).unwrap();
        let cnf = normalizer.cnf(predicate).unwrap();
        let dnf_tree = Pred::from(dnf.clone());
        let cnf_tree = Pred::from(cnf.clone());

        for assignment in assignments(&ATOMS) {
            let eval = |l: &Lit| satisfies(&assignment, l);
            let expected = predicate.evaluate(&eval);
            assert_eq!(expected, dnf.evaluate(&eval), "DNF of {:?}: {:?}", predicate, dnf);
            assert_eq!(expected, cnf.evaluate(&eval), "CNF of {:?}: {:?}", predicate, cnf);
            assert_eq!(expected, dnf_tree.evaluate(&eval));
            assert_eq!(expected, cnf_tree.evaluate(&eval));
        }

        for clause in dnf.iter().chain(cnf.iter()) {
            assert!(clause.iter().all(|l| l.is_literal()), "{:?}", clause);
        }
    }

    fn assert_no_subsumed_clauses(clauses: &crate::syntax::ClauseSet<Lit>) {
        for first in clauses.iter() {
            for second in clauses.iter() {
                assert!(first == second || !first.is_subset_of(second));
            }
        }
    }

    #[test]
    fn test_random_equivalence() {
        let mut rng = StdRng::seed_from_u64(42);
        let normalizer = Normalizer::new();
        for _ in 0..500 {
            let predicate = random_predicate(&mut rng, 4);
            assert_equivalent(&predicate, &normalizer);
        }
    }

    #[test]
    fn test_random_equivalence_with_subsumption() {
        let mut rng = StdRng::seed_from_u64(7);
        let normalizer = Normalizer::new().with_subsumption(true);
        for _ in 0..500 {
            let predicate = random_predicate(&mut rng, 4);
            assert_equivalent(&predicate, &normalizer);
            assert_no_subsumed_clauses(&normalizer.dnf(&predicate).unwrap());
            assert_no_subsumed_clauses(&normalizer.cnf(&predicate).unwrap());
        }
    }

    #[test]
    fn test_de_morgan() {
        let normalizer = Normalizer::new();
        assert_equivalent(&not(a().and(b())), &normalizer);
        assert_equivalent(&not(a().or(b())), &normalizer);
        assert_eq!(
            neg(a()).or(neg(b())).dnf().unwrap(),
            not(a().and(b())).dnf().unwrap()
        );
        assert_eq!(
            neg(a()).and(neg(b())).cnf().unwrap(),
            not(a().or(b())).cnf().unwrap()
        );
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(a().dnf().unwrap(), not(not(a())).dnf().unwrap());
        assert_eq!(a().cnf().unwrap(), not(not(a())).cnf().unwrap());
        let predicate = a().and(b().or(neg(c())));
        assert_eq!(
            predicate.dnf().unwrap(),
            not(not(predicate.clone())).dnf().unwrap()
        );
        assert_eq!(
            predicate.cnf().unwrap(),
            not(not(predicate.clone())).cnf().unwrap()
        );
    }

    #[test]
    fn test_constant_absorption() {
        let normalizer = Normalizer::new();
        for predicate in vec![
            a().or(b()).and(Pred::True),
            a().and(b()).or(Pred::True),
            a().or(b()).and(Pred::False),
            a().and(b()).or(Pred::False),
            Pred::True.and(Pred::True),
            Pred::False.or(Pred::False),
        ] {
            assert_equivalent(&predicate, &normalizer);
        }
    }

    #[test]
    fn test_unsupported_predicate() {
        let exists = Predicate::from(Exists("x"));
        assert!(exists.dnf().is_ok());
        assert!(exists.cnf().is_ok());

        let negated = Predicate::not(exists.clone().and(Predicate::True));
        let error = negated.dnf().unwrap_err();
        assert_eq!("predicate `exists(x)` cannot be negated", error.to_string());
        match negated.cnf().unwrap_err() {
            Error::UnsupportedPredicateKind { predicate } => assert_eq!(exists, predicate),
        }
    }
}
