//! Macros for ergonomic automaton construction.

/// Declare a state enum usable as automaton states and in checkpoints.
///
/// Generates the derives the engine and checkpoints need, a `name()`
/// accessor, a `Display` impl, and `accept_states()` listing the variants
/// named in the optional `accept:` clause.
///
/// # Example
///
/// ```
/// use tablefsm::state_enum;
/// use tablefsm::Automaton;
///
/// state_enum! {
///     pub enum Switch {
///         Off,
///         On,
///     }
///     accept: [On]
/// }
///
/// let mut switch = Automaton::new(
///     Switch::Off,
///     [((Switch::Off, "flip"), Switch::On), ((Switch::On, "flip"), Switch::Off)],
///     Switch::accept_states(),
/// );
///
/// switch.step("flip").unwrap();
/// assert!(switch.accepted());
/// assert_eq!(switch.current_state().name(), "On");
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

        $(accept: [$($accept:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// The variant's name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            /// The variants listed as accepting.
            pub fn accept_states() -> ::std::vec::Vec<Self> {
                ::std::vec![$($(Self::$accept),*)?]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
