//! Nilness classification for assertion helpers.
//!
//! A value is *nil* when it is a reference-like handle in its "no object"
//! state. Rather than inspecting types at runtime, this crate fixes a closed
//! set of handle kinds ([`NilKind`]) and classifies each supported type
//! statically through the [`Nilness`] trait.
//!
//! In Rust only two kinds can actually be nil:
//! - `Option<T>` is nil when it is `None`,
//! - `*const T` and `*mut T` are nil when they are null.
//!
//! Every other kind in the set (sequences, mappings, channels, function
//! pointers) exists so that the decision "this handle is always initialized
//! here" is recorded per type instead of being an implicit fallback. Plain
//! data (numbers, strings, structs, tuples) is never nil.
//!
//! E.g.
//! - `None::<i64>.is_nil()` is `true`
//! - `Some(5).is_nil()` is `false`
//! - `vec![1, 2].is_nil()` is `false`, with `KIND` equal to `Sequence`

#![warn(
    missing_docs,
    unused_crate_dependencies,
    unused_macro_rules,
    variant_size_differences,
    clippy::missing_docs_in_private_items,
    clippy::multiple_inherent_impl,
    clippy::panic,
    clippy::pedantic,
    clippy::str_to_string,
    clippy::unreachable,
    clippy::unwrap_used
)]

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::{mpsc, Arc};

/// The closed set of handle kinds that nilness classification knows about.
///
/// Only `Optional` and `RawPointer` can ever produce a nil value in Rust.
/// The remaining kinds mirror handle families that are nilable in other
/// runtimes and are kept as explicit tags: a type carrying one of them is
/// known to always hold an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NilKind {
    /// An optional reference: nil when absent.
    Optional,
    /// A raw pointer: nil when null.
    RawPointer,
    /// A sequence handle, always initialized.
    Sequence,
    /// A mapping handle, always initialized.
    Mapping,
    /// A channel endpoint, always initialized.
    Channel,
    /// A function pointer, non-nullable.
    Function,
    /// Plain data with no handle semantics.
    Plain,
}

impl NilKind {
    /// Whether values of this kind can ever be nil.
    #[must_use]
    pub fn nilable(self) -> bool {
        matches!(self, Self::Optional | Self::RawPointer)
    }
}

/// Classification of a value as nil or not.
///
/// `is_nil` is total: it never panics, whatever the value. Types outside the
/// nilable kinds answer `false` unconditionally.
pub trait Nilness {
    /// The handle kind of this type.
    const KIND: NilKind;

    /// Whether the value currently holds no object.
    fn is_nil(&self) -> bool;
}

impl<T> Nilness for Option<T> {
    const KIND: NilKind = NilKind::Optional;

    #[inline]
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nilness for *const T {
    const KIND: NilKind = NilKind::RawPointer;

    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilness for *mut T {
    const KIND: NilKind = NilKind::RawPointer;

    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

/// Always-initialized handles, one impl per line:
/// `kind for type where <generics>`.
macro_rules! nilness_always {
    ($kind:ident for $container:ty where $($decl:tt)*) => {
        impl$($decl)* Nilness for $container {
            const KIND: NilKind = NilKind::$kind;

            #[inline]
            fn is_nil(&self) -> bool {
                false
            }
        }
    };
}

// References and owning pointers always hold an object.
nilness_always!(Plain for &T where <T: ?Sized>);
nilness_always!(Plain for &mut T where <T: ?Sized>);
nilness_always!(Plain for Box<T> where <T: ?Sized>);
nilness_always!(Plain for Rc<T> where <T: ?Sized>);
nilness_always!(Plain for Arc<T> where <T: ?Sized>);
// Sequence and mapping handles are always initialized in Rust,
// unlike their nilable counterparts in other runtimes.
nilness_always!(Sequence for Vec<T> where <T>);
nilness_always!(Sequence for VecDeque<T> where <T>);
nilness_always!(Sequence for [T; N] where <T, const N: usize>);
nilness_always!(Mapping for HashMap<K, V, S> where <K, V, S>);
nilness_always!(Mapping for BTreeMap<K, V> where <K, V>);
nilness_always!(Mapping for HashSet<T, S> where <T, S>);
nilness_always!(Mapping for BTreeSet<T> where <T>);
nilness_always!(Channel for mpsc::Sender<T> where <T>);
nilness_always!(Channel for mpsc::SyncSender<T> where <T>);
nilness_always!(Channel for mpsc::Receiver<T> where <T>);

/// Function pointers cannot be null.
///
/// Implementations are currently provided for arities up to 10.
/// (A nullable function slot is spelled `Option<fn(..)>` and classifies
/// as `Optional`.)
macro_rules! nilness_for_fn {
    ($( ( $( $A:ident ),* ) )*) => {
        $(
            impl<R $(, $A)*> Nilness for fn( $( $A ),* ) -> R {
                const KIND: NilKind = NilKind::Function;

                #[inline]
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

nilness_for_fn! {
    ()
    (A0)
    (A0, A1)
    (A0, A1, A2)
    (A0, A1, A2, A3)
    (A0, A1, A2, A3, A4)
    (A0, A1, A2, A3, A4, A5)
    (A0, A1, A2, A3, A4, A5, A6)
    (A0, A1, A2, A3, A4, A5, A6, A7)
    (A0, A1, A2, A3, A4, A5, A6, A7, A8)
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9)
}

/// Tuples are plain aggregates, never nil.
macro_rules! nilness_for_tuple {
    ( ( $( $T:ty ),* ) with $($decl:tt)*) => {
        impl$($decl)* Nilness for ( $( $T, )* ) {
            const KIND: NilKind = NilKind::Plain;

            #[inline]
            fn is_nil(&self) -> bool {
                false
            }
        }
    };
}

nilness_for_tuple!(() with);
nilness_for_tuple!((T0) with <T0>);
nilness_for_tuple!((T0, T1) with <T0, T1>);
nilness_for_tuple!((T0, T1, T2) with <T0, T1, T2>);
nilness_for_tuple!((T0, T1, T2, T3) with <T0, T1, T2, T3>);
nilness_for_tuple!((T0, T1, T2, T3, T4) with <T0, T1, T2, T3, T4>);
nilness_for_tuple!((T0, T1, T2, T3, T4, T5) with <T0, T1, T2, T3, T4, T5>);
nilness_for_tuple!((T0, T1, T2, T3, T4, T5, T6) with <T0, T1, T2, T3, T4, T5, T6>);
nilness_for_tuple!((T0, T1, T2, T3, T4, T5, T6, T7) with <T0, T1, T2, T3, T4, T5, T6, T7>);
nilness_for_tuple!((T0, T1, T2, T3, T4, T5, T6, T7, T8) with <T0, T1, T2, T3, T4, T5, T6, T7, T8>);
nilness_for_tuple!((T0, T1, T2, T3, T4, T5, T6, T7, T8, T9) with <T0, T1, T2, T3, T4, T5, T6, T7, T8, T9>);

/// Declare types as never nil.
///
/// This is how plain data earns its [`Nilness`] implementation. The crate
/// applies it to the primitives below; downstream crates can apply it to
/// their own non-generic types (generic types should prefer
/// `#[derive(NeverNil)]` from `must-derive`).
///
/// ```
/// struct Celsius(f64);
/// must_nil::never_nil!(Celsius);
/// ```
#[macro_export]
macro_rules! never_nil {
    ( $( $t:ty ),* $(,)? ) => {
        $(
            impl $crate::Nilness for $t {
                const KIND: $crate::NilKind = $crate::NilKind::Plain;

                #[inline]
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil!(u8, u16, u32, u64, u128, usize);
never_nil!(i8, i16, i32, i64, i128, isize);
never_nil!(f32, f64, bool, char, String);
