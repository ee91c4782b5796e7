pub use enclose::enclose;

/// `computed!((a, b) cx => body)` builds a [`Computed`](crate::Computed)
/// over clones of the listed handles.
#[macro_export]
macro_rules! computed {
    (( $($d_tt:tt)* ) $ctx:ident => $($b:tt)*) => {
        $crate::Computed::new($crate::macros::enclose!(($( $d_tt )*) Box::new(move |$ctx: &$crate::Evaluation| { $($b)* })))
    };
    ($ctx:ident => $($b:tt)*) => {
        $crate::Computed::new(Box::new(move |$ctx: &$crate::Evaluation| { $($b)* }))
    };
}

#[macro_export]
macro_rules! reaction {
    (( $($d_tt:tt)* ) $ctx:ident => $($b:tt)*) => {
        $crate::Reaction::new($crate::macros::enclose!(($( $d_tt )*) Box::new(move |$ctx: &$crate::Evaluation| { $($b)* })))
    };
    ($ctx:ident => $($b:tt)*) => {
        $crate::Reaction::new(Box::new(move |$ctx: &$crate::Evaluation| { $($b)* }))
    };
}
