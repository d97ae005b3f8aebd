#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used by the predicate")]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[derive(Debug)]
    enum Outcome {
        Stored(u32),
        Rejected,
    }

    #[test]
    fn matches_pattern() {
        assert_matches!(Outcome::Stored(3), Outcome::Stored(_));
        assert_matches!(Outcome::Stored(3), Outcome::Stored(x) if *x == 3);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn rejects_other_variant() {
        assert_matches!(Outcome::Rejected, Outcome::Stored(_));
    }

    #[test]
    #[should_panic(expected = "does not match predicate")]
    fn rejects_failed_predicate() {
        assert_matches!(Outcome::Stored(1), Outcome::Stored(x) if *x == 2);
    }
}
