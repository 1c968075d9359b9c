/*! Defines an abstract syntax tree (AST) for boolean conditions over opaque atoms and the
clause structures that normal forms are made of. */

mod clause;
mod literal;
mod predicate;

pub use clause::{Clause, ClauseSet};
pub use literal::Literal;
pub use predicate::{Atom, Predicate};
