//! Building blocks for service model types.
//!
//! Every request and shape is a plain struct of `Option` fields. The
//! macros here generate the repetitive parts:
//!
//! - [`fluent!`](crate::fluent) adds consuming `field(value)` builders and
//!   `set_field(Option<_>)` setters. List builders append and map builders
//!   insert; `set_*` always replaces the whole value.
//! - [`wire_enum!`](crate::wire_enum) declares a string enum with its wire
//!   names, `FromStr` and `Display`.
//! - [`operation_methods!`](crate::operation_methods) adds one client method
//!   per operation.

/// A string that is not one of an enum's wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a valid {type_name}")]
pub struct UnknownVariantError {
    pub type_name: &'static str,
    pub value: String,
}

impl UnknownVariantError {
    pub fn new(type_name: &'static str, value: &str) -> Self {
        Self {
            type_name,
            value: value.to_string(),
        }
    }
}

/// Builder and setter methods for model structs.
///
/// ```ignore
/// fluent! {
///     CreateFilterRequest {
///         detector_id / set_detector_id: String;
///         rank / set_rank: i32;
///         finding_ids / set_finding_ids: [String];
///         tags / set_tags: {String => String};
///     }
/// }
/// ```
#[macro_export]
macro_rules! fluent {
    ($ty:ident { $($body:tt)* }) => {
        impl $ty {
            $crate::fluent!(@field $($body)*);
        }
    };
    (@field) => {};
    (@field $field:ident / $set:ident : [$item:ty]; $($rest:tt)*) => {
        /// Appends to the list, keeping elements already set.
        pub fn $field<I, V>(mut self, values: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<$item>,
        {
            self.$field
                .get_or_insert_with(Vec::new)
                .extend(values.into_iter().map(Into::into));
            self
        }

        /// Replaces the whole list.
        pub fn $set(&mut self, values: Option<Vec<$item>>) -> &mut Self {
            self.$field = values;
            self
        }

        $crate::fluent!(@field $($rest)*);
    };
    (@field $field:ident / $set:ident : {$key:ty => $value:ty}; $($rest:tt)*) => {
        /// Inserts one entry.
        pub fn $field(mut self, key: impl Into<$key>, value: impl Into<$value>) -> Self {
            self.$field
                .get_or_insert_with(::std::collections::HashMap::new)
                .insert(key.into(), value.into());
            self
        }

        /// Replaces the whole map.
        pub fn $set(
            &mut self,
            values: Option<::std::collections::HashMap<$key, $value>>,
        ) -> &mut Self {
            self.$field = values;
            self
        }

        $crate::fluent!(@field $($rest)*);
    };
    (@field $field:ident / $set:ident : $t:ty; $($rest:tt)*) => {
        pub fn $field(mut self, value: impl Into<$t>) -> Self {
            self.$field = Some(value.into());
            self
        }

        pub fn $set(&mut self, value: Option<$t>) -> &mut Self {
            self.$field = value;
            self
        }

        $crate::fluent!(@field $($rest)*);
    };
}

/// A set of wire strings known to this client.
///
/// Parsing (`FromStr`, `TryFrom<&str>`) accepts only the declared values.
/// Decoding a response keeps any other value in the generated `Unknown`
/// arm, so a value the service adds later does not fail the call.
///
/// ```ignore
/// wire_enum! {
///     pub enum IpSetStatus {
///         Inactive => "INACTIVE",
///         Active => "ACTIVE",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A wire value received from the service that this client
            /// does not declare.
            Unknown(String),
        }

        impl $name {
            /// Every declared wire value, in declaration order.
            pub const VALUES: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::model::UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, $crate::model::UnknownVariantError> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::model::UnknownVariantError::new(stringify!($name), other)),
                }
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::model::UnknownVariantError;

            fn try_from(s: &str) -> Result<Self, $crate::model::UnknownVariantError> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                match value {
                    $name::Unknown(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                match raw.parse::<$name>() {
                    Ok(known) => Ok(known),
                    Err(_) => Ok($name::Unknown(raw)),
                }
            }
        }
    };
}

/// One client method per operation, forwarding to the invoker.
///
/// ```ignore
/// operation_methods! {
///     GuardDutyError;
///     /// Creates a detector.
///     create_detector, create_detector_with: CreateDetectorRequest;
/// }
/// ```
///
/// Expands to `create_detector(&self, &CreateDetectorRequest)` and
/// `create_detector_with(&self, &CreateDetectorRequest, &CallOptions)`
/// inside the surrounding `impl`. The receiver must have an `invoker` field.
#[macro_export]
macro_rules! operation_methods {
    ($error:ty; $($(#[$doc:meta])* $method:ident, $method_with:ident : $request:ty;)+) => {
        $(
            $(#[$doc])*
            pub fn $method(
                &self,
                request: &$request,
            ) -> Result<<$request as $crate::invoker::Operation>::Output, $crate::error::SdkError<$error>> {
                self.invoker.invoke(request)
            }

            $(#[$doc])*
            ///
            /// Per-call overrides in `options` apply to this call only.
            pub fn $method_with(
                &self,
                request: &$request,
                options: &$crate::invoker::CallOptions,
            ) -> Result<<$request as $crate::invoker::Operation>::Output, $crate::error::SdkError<$error>> {
                self.invoker.invoke_with(request, options)
            }
        )+
    };
}
