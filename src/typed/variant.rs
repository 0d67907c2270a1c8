//! Traits tying a state enum to its variant markers.
//!
//! These are normally implemented by [`ui_state!`](crate::ui_state), which
//! generates one zero-sized marker per variant and the list of all markers.

use crate::status::Status;

/// A closed set of statuses, each carrying its own payload type.
pub trait UiStatus: Sized {
    /// Type-level list of every variant marker, in declaration order.
    type Variants;

    /// Status identifiers, in declaration order.
    const STATUSES: &'static [&'static str];

    /// The status of this value.
    fn status(&self) -> Status;
}

/// A zero-sized marker selecting one variant of the state `S`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a variant of `{S}`",
    label = "not a status this state can take"
)]
pub trait Variant<S>: Sized {
    /// The fields carried by this variant.
    type Payload;

    /// Status identifier of this variant.
    const STATUS: &'static str;

    /// The payload, if `state` is this variant.
    fn payload(state: &S) -> Option<&Self::Payload>;

    /// Build the state from this variant's payload.
    fn wrap(payload: Self::Payload) -> S;

    /// Whether `state` is this variant.
    fn is_current(state: &S) -> bool {
        Self::payload(state).is_some()
    }
}

/// A tuple of variant markers used as a list selector.
///
/// `()` is the empty selection and never matches. Up to eight markers are
/// supported.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a selection of variants of `{S}`",
    label = "expected a tuple of variant markers"
)]
pub trait Selection<S> {
    /// Type-level list of the selected markers.
    type List;

    /// Whether `state` is one of the selected variants.
    fn contains(state: &S) -> bool;

    /// Status identifiers of the selected variants.
    fn statuses() -> Vec<&'static str>;
}

macro_rules! impl_selection {
    ($($marker:ident),*) => {
        impl<S, $($marker: Variant<S>),*> Selection<S> for ($($marker,)*) {
            type List = crate::HList![$($marker),*];

            #[allow(unused_variables)]
            fn contains(state: &S) -> bool {
                false $(|| <$marker as Variant<S>>::is_current(state))*
            }

            fn statuses() -> Vec<&'static str> {
                vec![$(<$marker as Variant<S>>::STATUS),*]
            }
        }
    };
}

impl_selection!();
impl_selection!(V0);
impl_selection!(V0, V1);
impl_selection!(V0, V1, V2);
impl_selection!(V0, V1, V2, V3);
impl_selection!(V0, V1, V2, V3, V4);
impl_selection!(V0, V1, V2, V3, V4, V5);
impl_selection!(V0, V1, V2, V3, V4, V5, V6);
impl_selection!(V0, V1, V2, V3, V4, V5, V6, V7);
