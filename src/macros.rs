//! Macros making implementing mnemonic types easier.

/// Creates an enum whose values are written as fixed mnemonics.
///
/// This adds impls for `Display` and `FromStr` as well as, if the `serde`
/// feature is enabled, `Serialize` and `Deserialize` using the mnemonic.
/// Parsing ignores ASCII case.
macro_rules! mnemonic_enum {
    ( $(#[$attr:meta])* =>
      $enumtype:ident;
      $( $(#[$variant_attr:meta])* ( $variant:ident => $mnemonic:expr ) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $enumtype {
            $(
                $(#[$variant_attr])*
                $variant,
            )*
        }

        impl $enumtype {
            /// Returns a value from a well-defined mnemonic.
            #[must_use]
            pub fn from_mnemonic(m: &str) -> Option<Self> {
                $(
                    if m.eq_ignore_ascii_case($mnemonic) {
                        return Some($enumtype::$variant)
                    }
                )*
                None
            }

            /// Returns the mnemonic for this value.
            #[must_use]
            pub const fn to_mnemonic(self) -> &'static str {
                match self {
                    $(
                        $enumtype::$variant => $mnemonic,
                    )*
                }
            }
        }

        impl core::str::FromStr for $enumtype {
            type Err = $crate::iana::UnknownMnemonic;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $enumtype::from_mnemonic(s).ok_or(
                    $crate::iana::UnknownMnemonic(stringify!($enumtype))
                )
            }
        }

        impl core::fmt::Display for $enumtype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str(self.to_mnemonic())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $enumtype {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.to_mnemonic())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $enumtype {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let s = std::string::String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}
