//! Traits describing the FHIR base types that every record flattens in.
//!
//! FHIR models `Element`, `BackboneElement`, `Resource` and `DomainResource` as
//! an inheritance chain. Records here carry the inherited fields directly, and
//! `#[derive(FhirSerde)]` implements the matching accessor trait so code can
//! work with any record of a given kind.

/// The constant type name of a record.
///
/// For resources this is the `resourceType` discriminator; for data types and
/// backbone elements it is the name from the FHIR type system, e.g. `Period`
/// or `AccountCoverage`.
pub trait FhirType {
    const TYPE_NAME: &'static str;
    /// Wire names of the fields a document must carry, in declaration order.
    /// A required choice group is listed as `name[x]`.
    const REQUIRED_FIELDS: &'static [&'static str];

    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }
}

/// Fields inherited from `Element`.
pub trait ElementBase {
    type Extension;

    fn id(&self) -> Option<&str>;

    fn extension(&self) -> Option<&[Self::Extension]>;
}

/// Fields inherited from `BackboneElement`.
pub trait BackboneElementBase: ElementBase {
    /// Extensions that change the meaning of the element.
    fn modifier_extension(&self) -> Option<&[Self::Extension]>;
}

/// Fields inherited from `Resource`.
pub trait ResourceBase: FhirType {
    type Meta;

    /// The logical id, if the resource has one.
    fn id(&self) -> Option<&str>;

    fn meta(&self) -> Option<&Self::Meta>;

    fn implicit_rules(&self) -> Option<&str>;

    fn language(&self) -> Option<&str>;
}

/// Fields inherited from `DomainResource`.
pub trait DomainResourceBase: ResourceBase {
    type Extension;
    type Narrative;
    /// The "any resource" type held in `contained`.
    type Resource;

    fn text(&self) -> Option<&Self::Narrative>;

    fn contained(&self) -> Option<&[Self::Resource]>;

    fn extension(&self) -> Option<&[Self::Extension]>;

    fn modifier_extension(&self) -> Option<&[Self::Extension]>;
}

#[cfg(all(test, feature = "R4"))]
mod tests {
    use super::*;
    use crate::r4::{AccountCoverage, Patient, Period, Reference, Resource};

    fn contained_ids<T: DomainResourceBase<Resource = Resource>>(resource: &T) -> Vec<&str> {
        resource
            .contained()
            .unwrap_or_default()
            .iter()
            .filter_map(Resource::id)
            .collect()
    }

    #[test]
    fn type_names_are_constant() {
        assert_eq!(Period::TYPE_NAME, "Period");
        assert_eq!(Period::default().type_name(), "Period");
        assert_eq!(AccountCoverage::TYPE_NAME, "AccountCoverage");
        assert_eq!(Patient::TYPE_NAME, "Patient");
    }

    #[test]
    fn required_fields_follow_cardinality() {
        assert!(Period::REQUIRED_FIELDS.is_empty());
        assert!(Patient::REQUIRED_FIELDS.is_empty());
        assert_eq!(AccountCoverage::REQUIRED_FIELDS, &["coverage"]);
        assert_eq!(crate::r4::Provenance::REQUIRED_FIELDS, &["target", "recorded", "agent"]);
        assert_eq!(crate::r4::SupplyRequest::REQUIRED_FIELDS, &["item[x]", "quantity"]);
    }

    #[test]
    fn accessors_reach_flattened_fields() {
        let patient = Patient {
            id: Some("p1".into()),
            language: Some("en".into()),
            contained: Some(vec![Resource::Patient(Patient {
                id: Some("inner".into()),
                ..Default::default()
            })]),
            ..Default::default()
        };
        assert_eq!(ResourceBase::id(&patient), Some("p1"));
        assert_eq!(patient.language(), Some("en"));
        assert_eq!(contained_ids(&patient), vec!["inner"]);

        let coverage = AccountCoverage {
            id: Some("c1".to_string()),
            coverage: Reference::default(),
            ..Default::default()
        };
        assert_eq!(ElementBase::id(&coverage), Some("c1"));
        assert!(coverage.modifier_extension().is_none());
    }
}
