//! Declarative macro for record enums.

/// Declares a fieldless enum usable as a query field value.
///
/// Each variant is paired with its label: the string used on the wire, in
/// filters, and in search. Declaration order is the sort order.
///
/// The macro generates:
///
/// - `Serialize`/`Deserialize` using the labels
/// - `as_str()` and an `ALL` slice in declaration order
/// - [`QueryEnum`](assetdesk_query::QueryEnum) with rank = declaration index
/// - `Display`, and `FromStr` matching labels ignoring case
///
/// ```text
/// record_enum! {
///     /// Doc comment.
///     pub enum Priority("priority") {
///         Low => "Low",
///         High => "High",
///     }
/// }
/// ```
macro_rules! record_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in sort order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label of this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl ::assetdesk_query::QueryEnum for $name {
            fn rank(&self) -> u32 {
                *self as u32
            }

            fn label(&self) -> &'static str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::RecordError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let s = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::error::RecordError::UnknownLabel {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}
