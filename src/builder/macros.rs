//! Macros for declaring state and event identifiers.

/// Generate a `State` enum and its trait implementation.
///
/// # Example
///
/// ```
/// use minifsm::state_enum;
/// use minifsm::core::State;
///
/// state_enum! {
///     pub enum Login {
///         Init,
///         GetSession,
///         Form,
///         Authenticate,
///         Done,
///         Unexpected,
///     }
///     final: [Done]
///     error: [Unexpected]
/// }
///
/// assert_eq!(Login::GetSession.name(), "GetSession");
/// assert!(Login::Done.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate an `Event` enum and its trait implementation.
///
/// # Example
///
/// ```
/// use minifsm::event_enum;
/// use minifsm::core::Event;
///
/// event_enum! {
///     pub enum Socket {
///         Start,
///         ConnOpen,
///         ConnClosed,
///     }
/// }
///
/// assert_eq!(Socket::ConnOpen.name(), "ConnOpen");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
