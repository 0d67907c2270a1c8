//! Type-level lists of variant markers.
//!
//! A typed match chain carries the variants it has not handled yet as an
//! [`HCons`]/[`HNil`] list in its type. Each branch removes its markers with
//! [`Remove`]; the index parameter (`Here`, `There<I>`) is inferred, and it can
//! only be inferred when the marker is still in the list. Asking for a marker
//! that was already removed, or that never belonged to the state, leaves no
//! impl to pick and the chain stops type-checking.

use std::marker::PhantomData;

/// The empty list: nothing left to handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HNil;

/// A list whose first element is `H`, followed by the list `T`.
pub struct HCons<H, T> {
    _marker: PhantomData<(H, T)>,
}

/// Index: the marker is the head of the list.
pub struct Here;

/// Index: the marker is somewhere in the tail, at index `I`.
pub struct There<I> {
    _marker: PhantomData<I>,
}

/// Build an [`HCons`] list type from a comma separated list of types.
///
/// ```
/// use ui_state::{HCons, HList, HNil};
///
/// struct A;
/// struct B;
/// let _: Option<HList![A, B]> = None::<HCons<A, HCons<B, HNil>>>;
/// ```
#[macro_export]
macro_rules! HList {
    () => { $crate::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::HCons<$head, $crate::HList![$($tail),*]>
    };
}

/// Remove the marker `V`, found at index `I`, from a type-level list.
#[diagnostic::on_unimplemented(
    message = "`{V}` is not among the variants left to match",
    label = "already matched earlier in this chain, or not a variant of this state",
    note = "variants left to match: `{Self}`"
)]
pub trait Remove<V, I> {
    /// The list without `V`.
    type Rest;
}

impl<V, T> Remove<V, Here> for HCons<V, T> {
    type Rest = T;
}

impl<V, H, T, I> Remove<V, There<I>> for HCons<H, T>
where
    T: Remove<V, I>,
{
    type Rest = HCons<H, <T as Remove<V, I>>::Rest>;
}

/// Remove every marker of the list `L` (at indices `I`) from a type-level list.
///
/// Selecting the same marker twice in `L` fails like selecting an already
/// matched one.
#[diagnostic::on_unimplemented(
    message = "the selection `{L}` names a variant that is not left to match",
    note = "variants left to match: `{Self}`"
)]
pub trait RemoveAll<L, I> {
    /// The list without any marker of `L`.
    type Rest;
}

impl<R> RemoveAll<HNil, HNil> for R {
    type Rest = R;
}

impl<R, H, T, IH, IT> RemoveAll<HCons<H, T>, HCons<IH, IT>> for R
where
    R: Remove<H, IH>,
    <R as Remove<H, IH>>::Rest: RemoveAll<T, IT>,
{
    type Rest = <<R as Remove<H, IH>>::Rest as RemoveAll<T, IT>>::Rest;
}

/// Implemented only by [`HNil`]: every variant has been matched.
#[diagnostic::on_unimplemented(
    message = "`exhaustive()` requires every variant to be matched",
    label = "variants still unmatched: `{Self}`",
    note = "match the remaining variants, or finish with `non_exhaustive()`"
)]
pub trait Exhausted {}

impl Exhausted for HNil {}

/// Runtime names of a list of markers, used in debug output.
pub trait Names {
    fn names() -> Vec<&'static str>;
}

impl Names for HNil {
    fn names() -> Vec<&'static str> {
        Vec::new()
    }
}

impl<H, T> Names for HCons<H, T>
where
    T: Names,
{
    fn names() -> Vec<&'static str> {
        let mut names = vec![std::any::type_name::<H>()];
        names.extend(T::names());
        names
    }
}
