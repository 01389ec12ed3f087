/// A macro which defines an enum type for a TLS registry with an
/// `Unknown` catch-all for values it does not name.
macro_rules! enum_builder {
    (
        $(#[doc = $comment:literal])*
        #[repr($uint:ty)]
        $enum_vis:vis enum $enum_name:ident
        {
          $(
              $(#[doc = $var_comment:literal])*
              $enum_var:ident => $enum_val:literal
          ),* $(,)?
        }
    ) => {
        $(#[doc = $comment])*
        #[non_exhaustive]
        #[derive(PartialEq, Eq, Clone, Copy, Hash)]
        $enum_vis enum $enum_name {
            $(
                $(#[doc = $var_comment])*
                $enum_var,
            )*
            /// A value not named by this enum.
            Unknown($uint)
        }

        impl $enum_name {
            /// The big-endian wire encoding of this value.
            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            $enum_vis fn to_array(self) -> [u8; (<$uint>::BITS / 8) as usize] {
                <$uint>::from(self).to_be_bytes()
            }

            /// The registry name of this value, or `None` for `Unknown`.
            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            $enum_vis fn as_str(&self) -> Option<&'static str> {
                match self {
                    $( $enum_name::$enum_var => Some(stringify!($enum_var)), )*
                    $enum_name::Unknown(_) => None,
                }
            }
        }

        impl crate::msgs::Codec<'_> for $enum_name {
            fn encode(&self, bytes: &mut alloc::vec::Vec<u8>) {
                crate::msgs::Codec::encode(&<$uint>::from(*self), bytes);
            }

            fn read(r: &mut crate::msgs::Reader<'_>) -> Result<Self, crate::error::InvalidMessage> {
                match <$uint as crate::msgs::Codec>::read(r) {
                    Ok(x) => Ok($enum_name::from(x)),
                    Err(_) => Err(crate::error::InvalidMessage::MissingData(stringify!($enum_name))),
                }
            }
        }

        impl From<$uint> for $enum_name {
            fn from(x: $uint) -> Self {
                match x {
                    $( $enum_val => $enum_name::$enum_var, )*
                    x => $enum_name::Unknown(x),
                }
            }
        }

        impl From<$enum_name> for $uint {
            fn from(value: $enum_name) -> Self {
                match value {
                    $( $enum_name::$enum_var => $enum_val, )*
                    $enum_name::Unknown(x) => x
                }
            }
        }

        impl core::fmt::Debug for $enum_name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.as_str() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}(0x{:04x})", stringify!($enum_name), <$uint>::from(*self)),
                }
            }
        }
    };
}
