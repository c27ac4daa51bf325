//! Macros for declaring machine states.

/// Declare a fieldless state enum and implement [`State`](crate::core::State)
/// and `Display` for it.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` and
/// serde's traits. Variants listed under `final:` report `is_final`, those
/// under `error:` report `is_error`.
///
/// # Example
///
/// ```
/// use vending_machine::core::State;
/// use vending_machine::state_enum;
///
/// state_enum! {
///     pub enum HopperState {
///         Filling,
///         Full,
///         Jammed,
///     }
///     final: [Jammed]
///     error: [Jammed]
/// }
///
/// assert_eq!(HopperState::Full.name(), "Full");
/// assert_eq!(HopperState::Full.to_string(), "Full");
/// assert!(HopperState::Jammed.is_final());
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

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Ready,
            Paying,
            Empty,
        }
        final: [Empty]
        error: [Empty]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Ready.name(), "Ready");
        assert!(!TestState::Ready.is_final());
        assert!(!TestState::Paying.is_error());
        assert!(TestState::Empty.is_final());
        assert!(TestState::Empty.is_error());
    }

    #[test]
    fn state_enum_implements_display() {
        assert_eq!(TestState::Paying.to_string(), "Paying");
        assert_eq!(format!("{}", TestState::Empty), "Empty");
    }

    #[test]
    fn state_enum_works_without_final_error() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        let state = MinimalState::One;
        let copied = state;
        assert_eq!(state, copied);
        assert!(!MinimalState::Two.is_final());
        assert!(!MinimalState::Two.is_error());
    }
}
