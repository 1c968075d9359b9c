/*! Provides a set of tools for transforming boolean conditions over opaque atomic predicates
into [conjunctive] and [disjunctive] normal forms in clause form.

A condition is a [`Predicate`] tree of `AND`, `OR` and `NOT` connectives over atoms of a
host-defined type. The only capability the transformations ask of an atom is its negation
(see [`Atom`]).

**Example**:
```rust
use razor_clause::syntax::{Literal, Predicate};
use razor_clause::transform::{ToCnf, ToDnf};

let a = Predicate::from(Literal::Pos("a"));
let b = Predicate::from(Literal::Pos("b"));

// ¬(a ∧ ¬b)
let condition = Predicate::not(a.and(Predicate::not(b)));

assert_eq!("b ∨ ¬a", condition.dnf().unwrap().to_string());
assert_eq!("b ∨ ¬a", condition.cnf().unwrap().to_string());
```

[conjunctive]: https://en.wikipedia.org/wiki/Conjunctive_normal_form
[disjunctive]: https://en.wikipedia.org/wiki/Disjunctive_normal_form
[`Predicate`]: crate::syntax::Predicate
[`Atom`]: crate::syntax::Atom
*/
#![doc(issue_tracker_base_url = "https://github.com/salmans/rusty-razor/issues")]

#[macro_use]
extern crate tracing;

pub mod syntax;
#[cfg(test)]
pub mod test_macros;
#[cfg(test)]
mod test_prelude;
pub mod trace;
pub mod transform;
