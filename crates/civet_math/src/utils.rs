//! Internal macro utilities.

/// Strip the leading `+` off a fold of `+ expr` repetitions
macro_rules! strip_plus {
    {+ $($rest:tt)*} => {
        $($rest)*
    };
}
pub(crate) use strip_plus;

/// Strip the leading `*` off a fold of `* expr` repetitions
macro_rules! strip_mul {
    {* $($rest:tt)*} => {
        $($rest)*
    };
}
pub(crate) use strip_mul;
