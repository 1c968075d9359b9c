/*! Defines the syntax of boolean conditions over opaque atoms. */
use itertools::Itertools;
use std::{fmt, hash::Hash};

/// Is the trait of atomic conditions that appear at the leaves of a [`Predicate`].
///
/// Atoms are opaque to the normal form transformations with the exception of negation:
/// when a negation is pushed down to an atom, the atom is asked for its negated
/// counterpart.
pub trait Atom: Clone + Ord + Hash + fmt::Debug + fmt::Display {
    /// Returns the negation of the receiver or `None` if the receiver has no negated
    /// counterpart.
    ///
    /// **Note**: when defined, negation is its own inverse; that is,
    /// `a.negate().and_then(|n| n.negate())` is `Some(a)`.
    fn negate(&self) -> Option<Self>;
}

/// Is an abstract syntax tree (AST) for boolean conditions.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Predicate<A: Atom> {
    /// Is logical top (⊤) or truth.
    True,

    /// Is logical bottom (⟘) or falsehood.
    False,

    /// Is an atomic condition, wrapping an [`Atom`].
    Atom(A),

    /// Is the negation of a condition.
    Not(Box<Predicate<A>>),

    /// Is the conjunction of zero or more conditions.
    ///
    /// **Note**: the conjunction of no conditions is true.
    And(Vec<Predicate<A>>),

    /// Is the disjunction of zero or more conditions.
    ///
    /// **Note**: the disjunction of no conditions is false.
    Or(Vec<Predicate<A>>),
}

impl<A: Atom> From<A> for Predicate<A> {
    fn from(value: A) -> Self {
        Self::Atom(value)
    }
}

impl<A: Atom> Predicate<A> {
    /// Returns the negation of `predicate`.
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn not(predicate: Self) -> Self {
        Self::Not(Box::new(predicate))
    }

    /// Returns the conjunction of the receiver and `predicate`.
    #[inline(always)]
    pub fn and(self, predicate: Self) -> Self {
        Self::And(vec![self, predicate])
    }

    /// Returns the disjunction of the receiver and `predicate`.
    #[inline(always)]
    pub fn or(self, predicate: Self) -> Self {
        Self::Or(vec![self, predicate])
    }

    /// Returns the conjunction of all `operands`.
    pub fn all<I: IntoIterator<Item = Self>>(operands: I) -> Self {
        Self::And(operands.into_iter().collect())
    }

    /// Returns the disjunction of all `operands`.
    pub fn any<I: IntoIterator<Item = Self>>(operands: I) -> Self {
        Self::Or(operands.into_iter().collect())
    }

    /// Returns true if the receiver is [`Predicate::True`].
    #[inline(always)]
    pub fn is_true(&self) -> bool {
        matches!(self, Self::True)
    }

    /// Returns true if the receiver is [`Predicate::False`].
    #[inline(always)]
    pub fn is_false(&self) -> bool {
        matches!(self, Self::False)
    }

    /// Returns true if the receiver is a constant or an atom; that is, a predicate that may
    /// appear inside a clause.
    #[inline(always)]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::True | Self::False | Self::Atom(_))
    }

    /// Returns the atoms of the receiver.
    ///
    /// **Note**: each atom appears only once, in the order of its first occurrence.
    ///
    /// **Example**:
    /// ```rust
    /// use razor_clause::syntax::{Literal, Predicate};
    ///
    /// let a = Predicate::from(Literal::Pos("a"));
    /// let b = Predicate::from(Literal::Pos("b"));
    /// let predicate = a.clone().and(Predicate::not(b.or(a)));
    ///
    /// assert_eq!(vec![&Literal::Pos("a"), &Literal::Pos("b")], predicate.atoms());
    /// ```
    pub fn atoms(&self) -> Vec<&A> {
        match self {
            Self::True | Self::False => Vec::new(),
            Self::Atom(this) => vec![this],
            Self::Not(this) => this.atoms(),
            Self::And(these) | Self::Or(these) => {
                these.iter().flat_map(|p| p.atoms()).unique().collect()
            }
        }
    }

    /// Evaluates the receiver, using `assignment` to decide the truth of its atoms.
    ///
    /// **Example**:
    /// ```rust
    /// use razor_clause::syntax::{Literal, Predicate};
    ///
    /// let a = Predicate::from(Literal::Pos("a"));
    /// let b = Predicate::from(Literal::Neg("b"));
    /// let predicate = a.or(b);
    ///
    /// assert!(predicate.evaluate(&|lit: &Literal<&str>| lit.evaluate(|_| false)));
    /// assert!(!predicate.evaluate(&|lit: &Literal<&str>| lit.evaluate(|s| *s == "b")));
    /// ```
    pub fn evaluate(&self, assignment: &impl Fn(&A) -> bool) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Atom(this) => assignment(this),
            Self::Not(this) => !this.evaluate(assignment),
            Self::And(these) => these.iter().all(|p| p.evaluate(assignment)),
            Self::Or(these) => these.iter().any(|p| p.evaluate(assignment)),
        }
    }

    fn is_compound(&self) -> bool {
        match self {
            Self::And(these) | Self::Or(these) => these.len() > 1,
            _ => false,
        }
    }

    fn render(&self, f: &mut fmt::Formatter, notation: &Notation) -> fmt::Result {
        match self {
            Self::True => write!(f, "{}", notation.top),
            Self::False => write!(f, "{}", notation.bottom),
            Self::Atom(this) => {
                if notation.debug {
                    write!(f, "{:?}", this)
                } else {
                    write!(f, "{}", this)
                }
            }
            Self::Not(this) => {
                write!(f, "{}", notation.not)?;
                this.render_operand(f, notation)
            }
            Self::And(these) => {
                Self::render_operands(these, notation.and, notation.top, f, notation)
            }
            Self::Or(these) => {
                Self::render_operands(these, notation.or, notation.bottom, f, notation)
            }
        }
    }

    fn render_operand(&self, f: &mut fmt::Formatter, notation: &Notation) -> fmt::Result {
        if self.is_compound() {
            write!(f, "(")?;
            self.render(f, notation)?;
            write!(f, ")")
        } else {
            self.render(f, notation)
        }
    }

    fn render_operands(
        operands: &[Self],
        separator: &str,
        neutral: &str,
        f: &mut fmt::Formatter,
        notation: &Notation,
    ) -> fmt::Result {
        if operands.is_empty() {
            return write!(f, "{}", neutral);
        }
        for (index, operand) in operands.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", separator)?;
            }
            operand.render_operand(f, notation)?;
        }
        Ok(())
    }
}

// Symbols for printing predicates.
struct Notation {
    top: &'static str,
    bottom: &'static str,
    not: &'static str,
    and: &'static str,
    or: &'static str,
    debug: bool,
}

const DISPLAY: Notation = Notation {
    top: "⊤",
    bottom: "⟘",
    not: "¬",
    and: " ∧ ",
    or: " ∨ ",
    debug: false,
};

const DEBUG: Notation = Notation {
    top: "true",
    bottom: "false",
    not: "~",
    and: " & ",
    or: " | ",
    debug: true,
};

impl<A: Atom> fmt::Display for Predicate<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render(f, &DISPLAY)
    }
}

impl<A: Atom> fmt::Debug for Predicate<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render(f, &DEBUG)
    }
}
