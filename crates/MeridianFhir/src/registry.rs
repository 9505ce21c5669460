//! The closed set of resource types and polymorphic "any Resource" decoding.
//!
//! A release's resource modules invoke [`resource_registry!`] once with every
//! resource they define. The macro produces:
//!
//! - `ResourceType`, a fieldless enum naming every resource, parseable from
//!   the `resourceType` discriminator;
//! - `Resource`, an enum holding one resource of any type, used for
//!   `contained`, `Bundle.entry.resource` and other slots typed as "Resource";
//! - `resource_type_of` and `decode_resource` free functions.
//!
//! The vocabulary is closed: a discriminator outside the list is
//! [`DecodeError::UnknownResourceType`](crate::DecodeError::UnknownResourceType).

/// Reads the `resourceType` discriminator of an "any Resource" document.
pub(crate) fn discriminator(map: &crate::wire::JsonMap) -> Result<&str, crate::DecodeError> {
    match map.get("resourceType") {
        None | Some(serde_json::Value::Null) => {
            Err(crate::DecodeError::MissingRequiredField("resourceType".to_string()))
        }
        Some(serde_json::Value::String(name)) => Ok(name),
        Some(_) => Err(crate::DecodeError::mismatch(
            "resourceType",
            "expected a string naming the resource type",
        )),
    }
}

macro_rules! resource_registry {
    ($($name:ident),* $(,)?) => {
        /// Names every resource type compiled into this release.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ResourceType {
            $($name,)*
        }

        impl ResourceType {
            /// Every resource type, in alphabetical order.
            pub const ALL: &'static [ResourceType] = &[$(ResourceType::$name,)*];

            /// The `resourceType` discriminator of this type.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ResourceType::$name => stringify!($name),)*
                }
            }

            /// Wire names of the fields a document of this type must carry.
            pub fn required_fields(&self) -> &'static [&'static str] {
                match self {
                    $(ResourceType::$name => <$name as $crate::FhirType>::REQUIRED_FIELDS,)*
                }
            }
        }

        impl ::std::fmt::Display for ResourceType {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for ResourceType {
            type Err = $crate::DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($name) => Ok(ResourceType::$name),)*
                    other => Err($crate::DecodeError::UnknownResourceType(other.to_string())),
                }
            }
        }

        /// Maps a `resourceType` discriminator to the concrete type it names.
        pub fn resource_type_of(type_name: &str) -> Result<ResourceType, $crate::DecodeError> {
            type_name.parse().inspect_err(|_| {
                ::tracing::debug!(resource_type = type_name, "resourceType is not in the vocabulary");
            })
        }

        /// One resource of any type.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $($name($name),)*
        }

        impl Resource {
            pub fn resource_type(&self) -> ResourceType {
                match self {
                    $(Resource::$name(_) => ResourceType::$name,)*
                }
            }

            /// The logical id of the wrapped resource.
            pub fn id(&self) -> Option<&str> {
                match self {
                    $(Resource::$name(r) => $crate::ResourceBase::id(r),)*
                }
            }
        }

        impl $crate::FhirJson for Resource {
            fn from_json(value: ::serde_json::Value) -> Result<Self, $crate::DecodeError> {
                let map = $crate::wire::expect_object(value, "Resource")?;
                let resource_type = resource_type_of($crate::registry::discriminator(&map)?)?;
                let value = ::serde_json::Value::Object(map);
                match resource_type {
                    $(ResourceType::$name => <$name as $crate::FhirJson>::from_json(value).map(Resource::$name),)*
                }
            }

            fn to_json(&self) -> ::serde_json::Value {
                match self {
                    $(Resource::$name(r) => $crate::FhirJson::to_json(r),)*
                }
            }
        }

        impl ::serde::Serialize for Resource {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(&$crate::FhirJson::to_json(self), serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for Resource {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::FhirJson>::from_json(value).map_err(::serde::de::Error::custom)
            }
        }

        $(
            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Resource::$name(resource)
                }
            }
        )*

        impl $crate::FhirResourceTypeProvider for Resource {
            fn get_resource_type_names() -> Vec<&'static str> {
                ResourceType::ALL.iter().map(ResourceType::as_str).collect()
            }
        }

        /// Decodes a document whose concrete type is known only from its
        /// `resourceType` key.
        pub fn decode_resource(value: ::serde_json::Value) -> Result<Resource, $crate::DecodeError> {
            $crate::codec::decode(value)
        }
    };
}

pub(crate) use resource_registry;

#[cfg(all(test, feature = "R4"))]
mod tests {
    use crate::r4::{resource_type_of, ResourceType};
    use crate::DecodeError;

    #[test]
    fn discriminators_resolve_to_their_type() {
        for resource_type in ResourceType::ALL {
            assert_eq!(resource_type_of(resource_type.as_str()).unwrap(), *resource_type);
        }
        assert_eq!(resource_type_of("Provenance").unwrap(), ResourceType::Provenance);
    }

    #[test]
    fn unknown_discriminator_is_reported() {
        assert!(matches!(
            resource_type_of("Spaceship"),
            Err(DecodeError::UnknownResourceType(name)) if name == "Spaceship"
        ));
        // names are case sensitive
        assert!(resource_type_of("account").is_err());
    }
}
