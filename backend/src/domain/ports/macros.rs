//! Macro generating the `thiserror` enums returned by driven ports.
//!
//! Each variant gets a snake_case constructor whose fields accept
//! `impl Into<T>`, so call sites read `BankRepositoryError::query("...")`.

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
        pub enum BrokerPortError {
            Unreachable => "broker unreachable",
            Rejected { destination: String } => "rejected by {destination}",
            Throttled { destination: String, retry_after_ms: u64 } =>
                "throttled by {destination} for {retry_after_ms}ms",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(BrokerPortError::unreachable().to_string(), "broker unreachable");
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = BrokerPortError::rejected("account-created");
        assert_eq!(err.to_string(), "rejected by account-created");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = BrokerPortError::throttled("account-lookups", 250_u64);
        assert_eq!(err.to_string(), "throttled by account-lookups for 250ms");
    }
}
