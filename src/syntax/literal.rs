use super::Atom;
use std::{fmt, hash::Hash};

/// A literal is either a (positive) symbol or its negation.
///
/// [`Literal`] is an [`Atom`] for any symbol type and serves hosts whose atomic conditions
/// have no native negated form: negating a literal flips its sign.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Literal<T> {
    /// Wraps a (positive) symbol.
    Pos(T),

    /// Wraps the negation of a symbol.
    Neg(T),
}

impl<T> Literal<T> {
    /// Returns the symbol of the receiver, regardless of its sign.
    pub fn symbol(&self) -> &T {
        match self {
            Self::Pos(this) | Self::Neg(this) => this,
        }
    }

    /// Returns true if the receiver is a positive literal.
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Pos(_))
    }

    /// Evaluates the receiver, using `assignment` to decide the truth of its symbol.
    pub fn evaluate(&self, assignment: impl Fn(&T) -> bool) -> bool {
        match self {
            Self::Pos(this) => assignment(this),
            Self::Neg(this) => !assignment(this),
        }
    }
}

impl<T> From<T> for Literal<T> {
    fn from(value: T) -> Self {
        Self::Pos(value)
    }
}

impl<T> Atom for Literal<T>
where
    T: Clone + Ord + Hash + fmt::Display,
{
    fn negate(&self) -> Option<Self> {
        Some(match self {
            Self::Pos(this) => Self::Neg(this.clone()),
            Self::Neg(this) => Self::Pos(this.clone()),
        })
    }
}

impl<T: fmt::Display> fmt::Display for Literal<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pos(this) => write!(f, "{}", this),
            Self::Neg(this) => write!(f, "¬{}", this),
        }
    }
}

impl<T: fmt::Display> fmt::Debug for Literal<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pos(this) => write!(f, "{}", this),
            Self::Neg(this) => write!(f, "~{}", this),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate() {
        assert_eq!(Some(Literal::Neg("a")), Literal::Pos("a").negate());
        assert_eq!(Some(Literal::Pos("a")), Literal::Neg("a").negate());
        assert_eq!(
            Some(Literal::Pos("a")),
            Literal::Pos("a").negate().and_then(|l| l.negate())
        );
    }

    #[test]
    fn test_evaluate() {
        assert!(Literal::Pos("a").evaluate(|_| true));
        assert!(!Literal::Neg("a").evaluate(|_| true));
        assert!(Literal::Neg("a").evaluate(|s| *s == "b"));
    }

    #[test]
    fn test_print() {
        assert_eq!("a", Literal::Pos("a").to_string());
        assert_eq!("¬a", Literal::Neg("a").to_string());
        assert_eq!("~a", format!("{:?}", Literal::Neg("a")));
        assert_eq!(&"a", Literal::Neg("a").symbol());
        assert!(!Literal::Neg("a").is_positive());
    }
}
