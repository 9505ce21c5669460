use crate::r4::*;
use crate::FhirSerde;

/// FHIR ImplementationGuide type
///
/// A set of rules of how a particular interoperability or standards problem is
/// solved - typically through the use of FHIR resources. This resource is used
/// to gather all the parts of an implementation guide into a logical whole and
/// to publish a computable definition of all the parts.
///
/// See: [ImplementationGuide](http://hl7.org/fhir/StructureDefinition/ImplementationGuide)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImplementationGuide", kind = "domain_resource")]
pub struct ImplementationGuide {
    /// Logical id of this artifact
    pub id: Option<Id>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// Text summary of the resource, for human interpretation
    pub text: Option<Narrative>,
    /// Contained, inline Resources
    pub contained: Option<Vec<Resource>>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Canonical identifier for this implementation guide, represented as a URI (globally unique)
    pub url: Uri,
    /// Business version of the implementation guide
    pub version: Option<String>,
    /// Name for this implementation guide (computer friendly)
    pub name: String,
    /// Name for this implementation guide (human friendly)
    pub title: Option<String>,
    /// The status of this implementation guide. Enables tracking the life-cycle of the content.
    pub status: Code,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the implementation guide
    pub description: Option<Markdown>,
    /// The context that the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for implementation guide (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// NPM Package name for IG
    #[fhir_serde(rename = "packageId")]
    pub package_id: String,
    /// SPDX license code for this IG (or not-open-source)
    pub license: Option<String>,
    /// FHIR Version(s) this Implementation Guide targets
    #[fhir_serde(rename = "fhirVersion")]
    pub fhir_version: Vec<String>,
    /// Another Implementation guide this depends on
    #[fhir_serde(rename = "dependsOn")]
    pub depends_on: Option<Vec<ImplementationGuideDependsOn>>,
    /// Profiles that apply globally
    pub global: Option<Vec<ImplementationGuideGlobal>>,
    /// Information needed to build the IG
    pub definition: Option<ImplementationGuideDefinition>,
    /// Information about an assembled IG
    pub manifest: Option<ImplementationGuideManifest>,
}

/// Information needed to build the IG
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImplementationGuideDefinition", kind = "backbone_element")]
pub struct ImplementationGuideDefinition {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Grouping used to present related resources in the IG
    pub grouping: Option<Vec<ImplementationGuideDefinitionGrouping>>,
    /// Resource in the implementation guide
    pub resource: Vec<ImplementationGuideDefinitionResource>,
    /// Page/Section in the Guide
    pub page: Option<ImplementationGuideDefinitionPage>,
    /// Defines how IG is built by tools
    pub parameter: Option<Vec<ImplementationGuideDefinitionParameter>>,
    /// A template for building resources
    pub template: Option<Vec<ImplementationGuideDefinitionTemplate>>,
}

/// Grouping used to present related resources in the IG
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImplementationGuideDefinitionGrouping", kind = "backbone_element")]
pub struct ImplementationGuideDefinitionGrouping {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Descriptive name for the package
    pub name: String,
    /// Human readable text describing the package
    pub description: Option<String>,
}

/// Choice of types for the name\[x\] field in ImplementationGuideDefinitionPage
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "name")]
pub enum ImplementationGuideDefinitionPageName {
    /// Variant accepting the Url type.
    #[fhir_serde(rename = "nameUrl")]
    Url(Url),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "nameReference")]
    Reference(Reference),
}

/// Page/Section in the Guide
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_type(name = "ImplementationGuideDefinitionPage", kind = "backbone_element")]
pub struct ImplementationGuideDefinitionPage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Where to find that page
    #[fhir_serde(flatten)]
    pub name: ImplementationGuideDefinitionPageName,
    /// Short title shown for navigational assistance
    pub title: String,
    /// A code that indicates how the page is generated
    pub generation: Code,
    /// Nested Pages / Sections
    pub page: Option<Vec<ImplementationGuideDefinitionPage>>,
}

/// Defines how IG is built by tools
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImplementationGuideDefinitionParameter", kind = "backbone_element")]
pub struct ImplementationGuideDefinitionParameter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// None
    pub code: Code,
    /// Value for named type
    pub value: String,
}

/// Choice of types for the example\[x\] field in ImplementationGuideDefinitionResource
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "example")]
pub enum ImplementationGuideDefinitionResourceExample {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "exampleBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "exampleCanonical")]
    Canonical(Canonical),
}

/// Resource in the implementation guide
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImplementationGuideDefinitionResource", kind = "backbone_element")]
pub struct ImplementationGuideDefinitionResource {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Location of the resource
    pub reference: Reference,
    /// Versions this applies to (if different to IG)
    #[fhir_serde(rename = "fhirVersion")]
    pub fhir_version: Option<Vec<String>>,
    /// Human Name for the resource
    pub name: Option<String>,
    /// Reason why included in guide
    pub description: Option<String>,
    /// Is an example/What is this an example of?
    #[fhir_serde(flatten)]
    pub example: Option<ImplementationGuideDefinitionResourceExample>,
    /// Grouping this is part of
    #[fhir_serde(rename = "groupingId")]
    pub grouping_id: Option<String>,
}

/// A template for building resources
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImplementationGuideDefinitionTemplate", kind = "backbone_element")]
pub struct ImplementationGuideDefinitionTemplate {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of template specified
    pub code: String,
    /// The source location for the template
    pub source: String,
    /// The scope in which the template applies
    pub scope: Option<String>,
}

/// Another Implementation guide this depends on
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImplementationGuideDependsOn", kind = "backbone_element")]
pub struct ImplementationGuideDependsOn {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identity of the IG that this depends on
    pub uri: String,
    /// NPM Package name for IG this depends on
    #[fhir_serde(rename = "packageId")]
    pub package_id: Option<String>,
    /// Version of the IG
    pub version: Option<String>,
}

/// Profiles that apply globally
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImplementationGuideGlobal", kind = "backbone_element")]
pub struct ImplementationGuideGlobal {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of resource that all instances must conform to
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Profile that all resources must conform to
    pub profile: Canonical,
}

/// Information about an assembled IG
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImplementationGuideManifest", kind = "backbone_element")]
pub struct ImplementationGuideManifest {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Location of rendered implementation guide
    pub rendering: Option<String>,
    /// Resource in the implementation guide
    pub resource: Vec<ImplementationGuideManifestResource>,
    /// HTML page within the parent IG
    pub page: Option<Vec<ImplementationGuideManifestPage>>,
    /// Image within the IG
    pub image: Option<Vec<String>>,
    /// Additional linkable file in IG
    pub other: Option<Vec<String>>,
}

/// HTML page within the parent IG
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImplementationGuideManifestPage", kind = "backbone_element")]
pub struct ImplementationGuideManifestPage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// HTML page name
    pub name: String,
    /// Title of the page, for references
    pub title: Option<String>,
    /// Anchor available on the page
    pub anchor: Option<Vec<String>>,
}

/// Choice of types for the example\[x\] field in ImplementationGuideManifestResource
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "example")]
pub enum ImplementationGuideManifestResourceExample {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "exampleBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "exampleCanonical")]
    Canonical(Canonical),
}

/// Resource in the implementation guide
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "ImplementationGuideManifestResource", kind = "backbone_element")]
pub struct ImplementationGuideManifestResource {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Location of the resource
    pub reference: Reference,
    /// Is an example/What is this an example of?
    #[fhir_serde(flatten)]
    pub example: Option<ImplementationGuideManifestResourceExample>,
    /// Relative path for page in IG
    #[fhir_serde(rename = "relativePath")]
    pub relative_path: Option<String>,
}
