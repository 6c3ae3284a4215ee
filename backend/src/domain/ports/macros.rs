//! Helper macro for declaring driven-port error enums.
//!
//! Each variant gets a snake_case constructor whose `String` fields accept
//! anything `Into<String>`, so adapters can write
//! `GardenRepositoryError::query(err.to_string())`.
//!
//! Repository ports use the `pub enum Name for "label"` form, which adds the
//! `Connection` and `Query` variants every storage adapter reports, worded
//! with the label, ahead of any port-specific variants.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident for $label:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            /// The store could not be reached.
            #[error("{} connection failed: {}", $label, .message)]
            Connection { message: String },
            /// A query or mutation failed during execution.
            #[error("{} query failed: {}", $label, .message)]
            Query { message: String },
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            define_port_error!(@ctor Connection { message: String });
            define_port_error!(@ctor Query { message: String });
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Label naming the store in log lines and error messages.
            pub const STORE: &'static str = $label;
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ShedError {
            Locked => "shed is locked",
            Missing { tool: String } => "missing tool: {tool}",
            Short { tool: String, count: u32 } => "short of {tool} ({count})",
        }
    }

    define_port_error! {
        pub enum SeedTrayError for "seed tray store" {
            Full { capacity: u32 } => "tray full at {capacity} cells",
        }
    }

    #[test]
    fn unit_variants_get_plain_constructors() {
        assert_eq!(ShedError::locked(), ShedError::Locked);
        assert_eq!(ShedError::locked().to_string(), "shed is locked");
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(ShedError::missing("trowel").to_string(), "missing tool: trowel");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        assert_eq!(ShedError::short("gloves", 2_u32).to_string(), "short of gloves (2)");
    }

    #[test]
    fn repository_form_adds_labelled_storage_variants() {
        assert_eq!(
            SeedTrayError::connection("refused").to_string(),
            "seed tray store connection failed: refused"
        );
        assert_eq!(
            SeedTrayError::query("deadlock").to_string(),
            "seed tray store query failed: deadlock"
        );
        assert_eq!(SeedTrayError::full(72_u32).to_string(), "tray full at 72 cells");
        assert_eq!(SeedTrayError::STORE, "seed tray store");
    }
}
