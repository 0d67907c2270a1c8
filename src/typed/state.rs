//! Typed snapshots: `is`, `when` and `match_` over a [`UiStatus`] enum.

use std::marker::PhantomData;

use crate::status::Status;
use crate::typed::chain::TypedMatch;
use crate::typed::hlist::{Remove, RemoveAll};
use crate::typed::variant::{Selection, UiStatus, Variant};

/// The `set` operation of a typed builder.
pub struct Set<S> {
    _state: PhantomData<fn() -> S>,
}

impl<S: UiStatus> Set<S> {
    /// Tag the state with `variant` and its payload.
    pub fn set<V: Variant<S>>(&self, _variant: V, payload: V::Payload) -> S {
        V::wrap(payload)
    }

    /// Tag the state with a variant that carries no payload.
    pub fn tag<V: Variant<S, Payload = ()>>(&self, _variant: V) -> S {
        V::wrap(())
    }
}

/// An immutable typed snapshot.
///
/// Selectors are variant markers generated by [`ui_state!`](crate::ui_state),
/// so naming a status the state cannot take is a compile error, and match
/// chains track coverage in their type (see [`TypedMatch`]).
///
/// # Example
/// ```
/// use ui_state::{ui_state, UiState};
///
/// ui_state! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub enum Counter => counter {
///         Initial = "initial",
///         Odd(u32) = "odd",
///         Peer(u32) = "peer",
///         Over10 = "over-10",
///     }
/// }
///
/// let count = 3;
/// let ui = UiState::<Counter>::build(|set| {
///     if count == 0 {
///         return set.tag(counter::Initial);
///     }
///     if count > 10 {
///         return set.tag(counter::Over10);
///     }
///     if count % 2 == 1 {
///         return set.set(counter::Odd, count);
///     }
///     set.set(counter::Peer, count)
/// });
///
/// let label = ui
///     .match_(counter::Initial, |_| "Waiting to increase count".to_string())
///     .match_(counter::Odd, |count| format!("{} is odd", count))
///     .match_(counter::Peer, |count| format!("{} is peer", count))
///     .match_(counter::Over10, |_| "Count is over 10".to_string())
///     .exhaustive();
///
/// assert_eq!(label.as_deref(), Some("3 is odd"));
/// assert!(ui.is(counter::Odd));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UiState<S> {
    state: S,
}

impl<S: UiStatus> UiState<S> {
    /// Wrap an already built state.
    pub fn new(state: S) -> Self {
        Self { state }
    }

    /// Evaluate `builder` once with a [`Set`] and wrap the state it returns.
    pub fn build<F>(builder: F) -> Self
    where
        F: FnOnce(&Set<S>) -> S,
    {
        let set = Set {
            _state: PhantomData,
        };
        Self::new(builder(&set))
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Whether the state is `variant`.
    pub fn is<V: Variant<S>>(&self, _variant: V) -> bool {
        V::is_current(&self.state)
    }

    /// Run `handler` on the payload if the state is `variant`, else `None`.
    pub fn when<V, T, F>(&self, _variant: V, handler: F) -> Option<T>
    where
        V: Variant<S>,
        F: FnOnce(&V::Payload) -> T,
    {
        V::payload(&self.state).map(handler)
    }

    /// Run `handler` on the state if it is one of `selection`, else `None`.
    pub fn when_any<L, T, F>(&self, _selection: L, handler: F) -> Option<T>
    where
        L: Selection<S>,
        F: FnOnce(&S) -> T,
    {
        if L::contains(&self.state) {
            Some(handler(&self.state))
        } else {
            None
        }
    }

    /// Start a match chain with a branch for one variant.
    pub fn match_<'a, V, I, T, F>(
        &'a self,
        variant: V,
        handler: F,
    ) -> TypedMatch<'a, S, <S::Variants as Remove<V, I>>::Rest, T>
    where
        V: Variant<S>,
        V::Payload: 'a,
        S::Variants: Remove<V, I>,
        F: FnOnce(&V::Payload) -> T + 'a,
    {
        TypedMatch::<'a, S, S::Variants, T>::new(&self.state).match_(variant, handler)
    }

    /// Start a match chain with a branch for a tuple of variants.
    pub fn match_any<'a, L, I, T, F>(
        &'a self,
        selection: L,
        handler: F,
    ) -> TypedMatch<'a, S, <S::Variants as RemoveAll<L::List, I>>::Rest, T>
    where
        L: Selection<S>,
        S::Variants: RemoveAll<L::List, I>,
        F: FnOnce(&S) -> T + 'a,
    {
        TypedMatch::<'a, S, S::Variants, T>::new(&self.state).match_any(selection, handler)
    }
}

impl<S: UiStatus> From<S> for UiState<S> {
    fn from(state: S) -> Self {
        Self::new(state)
    }
}
