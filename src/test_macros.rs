#[macro_export]
macro_rules! assert_debug_string {
    ($expected:expr, $value:expr) => {{
        match (&$expected, &$value) {
            (expected_val, val) => assert_eq!(*expected_val, format!("{:?}", val)),
        }
    }};
    ($expected:expr, $value:expr ,) => {
        $crate::assert_debug_string!($expected, $value)
    };
}

/// Builds a set of sets of predicates, the raw shape of a normal form.
#[macro_export]
macro_rules! clauses {
    ($([$($lit:expr),* $(,)?]),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut set = std::collections::BTreeSet::new();
        $(
            set.insert(
                vec![$($lit),*]
                    .into_iter()
                    .collect::<std::collections::BTreeSet<_>>(),
            );
        )*
        set
    }};
}
