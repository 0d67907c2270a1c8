//! The `ui_state!` declaration macro.

/// Declare a typed state enum, its variant markers, and their status names.
///
/// ```text
/// ui_state! {
///     #[derive(...)]
///     pub enum Name => markers {
///         Variant(PayloadType) = "status-name",
///         BareVariant = "other-status",
///     }
/// }
/// ```
///
/// This expands to:
///
/// - `enum Name` with one tuple variant per status. A variant written without
///   a payload type carries `()`.
/// - `mod markers` holding one zero-sized marker per variant (`markers::Variant`),
///   used as selectors by [`UiState`](crate::UiState).
/// - [`UiStatus`](crate::UiStatus) for `Name` and [`Variant`](crate::Variant)
///   for each marker.
///
/// # Example
/// ```
/// use ui_state::{ui_state, Status, UiState, UiStatus};
///
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct Listing {
///     pub items: Vec<u32>,
///     pub total: usize,
/// }
///
/// ui_state! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub enum Fetch => fetch {
///         Pending = "pending",
///         Failed(String) = "error",
///         Loaded(Listing) = "default",
///     }
/// }
///
/// assert_eq!(Fetch::STATUSES, &["pending", "error", "default"]);
///
/// let ui = UiState::new(Fetch::Loaded(Listing { items: vec![1, 2, 3], total: 3 }));
/// assert_eq!(ui.status(), Status::Default);
///
/// let rendered = ui
///     .match_(fetch::Pending, |_| "Loading".to_string())
///     .match_(fetch::Failed, |message| format!("Error: {}", message))
///     .match_(fetch::Loaded, |listing| format!("Total: {}", listing.total))
///     .exhaustive();
/// assert_eq!(rendered.as_deref(), Some("Total: 3"));
/// ```
#[macro_export]
macro_rules! ui_state {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => $markers:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(($payload:ty))? = $status:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($crate::__ui_state_payload!($($payload)?)),
            )+
        }

        #[allow(non_snake_case, dead_code)]
        $vis mod $markers {
            $(
                #[doc = concat!("Marker for the `", $status, "` status.")]
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
                pub struct $variant;
            )+
        }

        impl $crate::UiStatus for $name {
            type Variants = $crate::HList![$($markers::$variant),+];

            const STATUSES: &'static [&'static str] = &[$($status),+];

            fn status(&self) -> $crate::Status {
                match self {
                    $($name::$variant(_) => $crate::Status::from($status),)+
                }
            }
        }

        $(
            impl $crate::Variant<$name> for $markers::$variant {
                type Payload = $crate::__ui_state_payload!($($payload)?);

                const STATUS: &'static str = $status;

                fn payload(state: &$name) -> ::std::option::Option<&Self::Payload> {
                    #[allow(unreachable_patterns)]
                    match state {
                        $name::$variant(payload) => ::std::option::Option::Some(payload),
                        _ => ::std::option::Option::None,
                    }
                }

                fn wrap(payload: Self::Payload) -> $name {
                    $name::$variant(payload)
                }
            }
        )+
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ui_state_payload {
    () => { () };
    ($payload:ty) => { $payload };
}
