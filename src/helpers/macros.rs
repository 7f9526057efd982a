/// Assert that an expression matches a pattern, with an optional guard.
#[macro_export]
macro_rules! assert_match {
    ($expression:expr, $( $pattern:pat )|+ $( if $guard: expr )? $(,)?) => {
        match $expression {
            $( $pattern )|+ $( if $guard )? => (),
            ref other => panic!(
                "`{}` did not match `{}`: {:?}",
                stringify!($expression),
                stringify!($( $pattern )|+ $( if $guard )?),
                other
            ),
        }
    };
}

/// Assert on the `Display` text of an error.
#[macro_export]
macro_rules! assert_error_message {
    ($error:expr, $message:expr) => {
        assert_eq!($error.to_string(), $message);
    };
}
