use crate::syntax::*;
use rand::Rng;
use std::{collections::HashMap, fmt};

pub type Lit = Literal<&'static str>;
pub type Pred = Predicate<Lit>;

pub const ATOMS: [&str; 4] = ["a", "b", "c", "d"];

pub fn lit(name: &'static str) -> Lit {
    Literal::Pos(name)
}

// Atoms
pub fn a() -> Pred { lit("a").into() }

pub fn b() -> Pred { lit("b").into() }

pub fn c() -> Pred { lit("c").into() }

pub fn d() -> Pred { lit("d").into() }

pub fn e() -> Pred { lit("e").into() }

pub fn f() -> Pred { lit("f").into() }

pub fn not(predicate: Pred) -> Pred {
    Predicate::not(predicate)
}

// Returns the negated atom of an atomic `predicate`.
pub fn neg(predicate: Pred) -> Pred {
    match predicate {
        Predicate::Atom(this) => Predicate::Atom(this.negate().unwrap()),
        _ => panic!("expecting an atom"),
    }
}

/// An atom without a negated counterpart.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Exists(pub &'static str);

impl fmt::Display for Exists {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "exists({})", self.0)
    }
}

impl Atom for Exists {
    fn negate(&self) -> Option<Self> {
        None
    }
}

// Returns every truth assignment to `symbols`.
pub fn assignments(symbols: &[&'static str]) -> Vec<HashMap<&'static str, bool>> {
    (0..1usize << symbols.len())
        .map(|bits| {
            symbols
                .iter()
                .enumerate()
                .map(|(i, s)| (*s, bits & (1 << i) != 0))
                .collect()
        })
        .collect()
}

pub fn satisfies(assignment: &HashMap<&'static str, bool>, literal: &Lit) -> bool {
    literal.evaluate(|s| assignment[s])
}

pub fn random_predicate<R: Rng>(rng: &mut R, depth: usize) -> Pred {
    if depth == 0 || rng.gen_ratio(1, 4) {
        return match rng.gen_range(0..10) {
            0 => Predicate::True,
            1 => Predicate::False,
            _ => {
                let symbol = ATOMS[rng.gen_range(0..ATOMS.len())];
                if rng.gen_bool(0.3) {
                    Literal::Neg(symbol).into()
                } else {
                    Literal::Pos(symbol).into()
                }
            }
        };
    }

    let arity = rng.gen_range(0..4);
    let mut operands = Vec::with_capacity(arity);
    match rng.gen_range(0..3) {
        0 => Predicate::not(random_predicate(&mut *rng, depth - 1)),
        1 => {
            for _ in 0..arity {
                operands.push(random_predicate(&mut *rng, depth - 1));
            }
            Predicate::And(operands)
        }
        _ => {
            for _ in 0..arity {
                operands.push(random_predicate(&mut *rng, depth - 1));
            }
            Predicate::Or(operands)
        }
    }
}
