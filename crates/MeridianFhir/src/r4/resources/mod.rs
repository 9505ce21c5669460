pub mod account;
pub use account::*;

pub mod activity_definition;
pub use activity_definition::*;

pub mod adverse_event;
pub use adverse_event::*;

pub mod allergy_intolerance;
pub use allergy_intolerance::*;

pub mod appointment;
pub use appointment::*;

pub mod appointment_response;
pub use appointment_response::*;

pub mod audit_event;
pub use audit_event::*;

pub mod basic;
pub use basic::*;

pub mod binary;
pub use binary::*;

pub mod biologically_derived_product;
pub use biologically_derived_product::*;

pub mod body_structure;
pub use body_structure::*;

pub mod bundle;
pub use bundle::*;

pub mod capability_statement;
pub use capability_statement::*;

pub mod care_plan;
pub use care_plan::*;

pub mod care_team;
pub use care_team::*;

pub mod catalog_entry;
pub use catalog_entry::*;

pub mod charge_item;
pub use charge_item::*;

pub mod charge_item_definition;
pub use charge_item_definition::*;

pub mod claim;
pub use claim::*;

pub mod claim_response;
pub use claim_response::*;

pub mod clinical_impression;
pub use clinical_impression::*;

pub mod code_system;
pub use code_system::*;

pub mod communication;
pub use communication::*;

pub mod communication_request;
pub use communication_request::*;

pub mod compartment_definition;
pub use compartment_definition::*;

pub mod composition;
pub use composition::*;

pub mod concept_map;
pub use concept_map::*;

pub mod condition;
pub use condition::*;

pub mod consent;
pub use consent::*;

pub mod contract;
pub use contract::*;

pub mod coverage;
pub use coverage::*;

pub mod coverage_eligibility_request;
pub use coverage_eligibility_request::*;

pub mod coverage_eligibility_response;
pub use coverage_eligibility_response::*;

pub mod detected_issue;
pub use detected_issue::*;

pub mod device;
pub use device::*;

pub mod device_definition;
pub use device_definition::*;

pub mod device_metric;
pub use device_metric::*;

pub mod device_request;
pub use device_request::*;

pub mod device_use_statement;
pub use device_use_statement::*;

pub mod diagnostic_report;
pub use diagnostic_report::*;

pub mod document_manifest;
pub use document_manifest::*;

pub mod document_reference;
pub use document_reference::*;

pub mod effect_evidence_synthesis;
pub use effect_evidence_synthesis::*;

pub mod encounter;
pub use encounter::*;

pub mod endpoint;
pub use endpoint::*;

pub mod enrollment_request;
pub use enrollment_request::*;

pub mod enrollment_response;
pub use enrollment_response::*;

pub mod episode_of_care;
pub use episode_of_care::*;

pub mod event_definition;
pub use event_definition::*;

pub mod evidence;
pub use evidence::*;

pub mod evidence_variable;
pub use evidence_variable::*;

pub mod example_scenario;
pub use example_scenario::*;

pub mod explanation_of_benefit;
pub use explanation_of_benefit::*;

pub mod family_member_history;
pub use family_member_history::*;

pub mod flag;
pub use flag::*;

pub mod goal;
pub use goal::*;

pub mod graph_definition;
pub use graph_definition::*;

pub mod group;
pub use group::*;

pub mod guidance_response;
pub use guidance_response::*;

pub mod healthcare_service;
pub use healthcare_service::*;

pub mod imaging_study;
pub use imaging_study::*;

pub mod immunization;
pub use immunization::*;

pub mod immunization_evaluation;
pub use immunization_evaluation::*;

pub mod immunization_recommendation;
pub use immunization_recommendation::*;

pub mod implementation_guide;
pub use implementation_guide::*;

pub mod insurance_plan;
pub use insurance_plan::*;

pub mod invoice;
pub use invoice::*;

pub mod library;
pub use library::*;

pub mod linkage;
pub use linkage::*;

pub mod list;
pub use list::*;

pub mod location;
pub use location::*;

pub mod measure;
pub use measure::*;

pub mod measure_report;
pub use measure_report::*;

pub mod media;
pub use media::*;

pub mod medication;
pub use medication::*;

pub mod medication_administration;
pub use medication_administration::*;

pub mod medication_dispense;
pub use medication_dispense::*;

pub mod medication_knowledge;
pub use medication_knowledge::*;

pub mod medication_request;
pub use medication_request::*;

pub mod medication_statement;
pub use medication_statement::*;

pub mod medicinal_product;
pub use medicinal_product::*;

pub mod medicinal_product_authorization;
pub use medicinal_product_authorization::*;

pub mod medicinal_product_contraindication;
pub use medicinal_product_contraindication::*;

pub mod medicinal_product_indication;
pub use medicinal_product_indication::*;

pub mod medicinal_product_ingredient;
pub use medicinal_product_ingredient::*;

pub mod medicinal_product_interaction;
pub use medicinal_product_interaction::*;

pub mod medicinal_product_manufactured;
pub use medicinal_product_manufactured::*;

pub mod medicinal_product_packaged;
pub use medicinal_product_packaged::*;

pub mod medicinal_product_pharmaceutical;
pub use medicinal_product_pharmaceutical::*;

pub mod medicinal_product_undesirable_effect;
pub use medicinal_product_undesirable_effect::*;

pub mod message_definition;
pub use message_definition::*;

pub mod message_header;
pub use message_header::*;

pub mod molecular_sequence;
pub use molecular_sequence::*;

pub mod naming_system;
pub use naming_system::*;

pub mod nutrition_order;
pub use nutrition_order::*;

pub mod observation;
pub use observation::*;

pub mod observation_definition;
pub use observation_definition::*;

pub mod operation_definition;
pub use operation_definition::*;

pub mod operation_outcome;
pub use operation_outcome::*;

pub mod organization;
pub use organization::*;

pub mod organization_affiliation;
pub use organization_affiliation::*;

pub mod parameters;
pub use parameters::*;

pub mod patient;
pub use patient::*;

pub mod payment_notice;
pub use payment_notice::*;

pub mod payment_reconciliation;
pub use payment_reconciliation::*;

pub mod person;
pub use person::*;

pub mod plan_definition;
pub use plan_definition::*;

pub mod practitioner;
pub use practitioner::*;

pub mod practitioner_role;
pub use practitioner_role::*;

pub mod procedure;
pub use procedure::*;

pub mod provenance;
pub use provenance::*;

pub mod questionnaire;
pub use questionnaire::*;

pub mod questionnaire_response;
pub use questionnaire_response::*;

pub mod related_person;
pub use related_person::*;

pub mod request_group;
pub use request_group::*;

pub mod research_definition;
pub use research_definition::*;

pub mod research_element_definition;
pub use research_element_definition::*;

pub mod research_study;
pub use research_study::*;

pub mod research_subject;
pub use research_subject::*;

pub mod risk_assessment;
pub use risk_assessment::*;

pub mod risk_evidence_synthesis;
pub use risk_evidence_synthesis::*;

pub mod schedule;
pub use schedule::*;

pub mod search_parameter;
pub use search_parameter::*;

pub mod service_request;
pub use service_request::*;

pub mod slot;
pub use slot::*;

pub mod specimen;
pub use specimen::*;

pub mod specimen_definition;
pub use specimen_definition::*;

pub mod structure_definition;
pub use structure_definition::*;

pub mod structure_map;
pub use structure_map::*;

pub mod subscription;
pub use subscription::*;

pub mod substance;
pub use substance::*;

pub mod substance_nucleic_acid;
pub use substance_nucleic_acid::*;

pub mod substance_polymer;
pub use substance_polymer::*;

pub mod substance_protein;
pub use substance_protein::*;

pub mod substance_reference_information;
pub use substance_reference_information::*;

pub mod substance_source_material;
pub use substance_source_material::*;

pub mod substance_specification;
pub use substance_specification::*;

pub mod supply_delivery;
pub use supply_delivery::*;

pub mod supply_request;
pub use supply_request::*;

pub mod task;
pub use task::*;

pub mod terminology_capabilities;
pub use terminology_capabilities::*;

pub mod test_report;
pub use test_report::*;

pub mod test_script;
pub use test_script::*;

pub mod value_set;
pub use value_set::*;

pub mod verification_result;
pub use verification_result::*;

pub mod vision_prescription;
pub use vision_prescription::*;

crate::registry::resource_registry! {
    Account,
    ActivityDefinition,
    AdverseEvent,
    AllergyIntolerance,
    Appointment,
    AppointmentResponse,
    AuditEvent,
    Basic,
    Binary,
    BiologicallyDerivedProduct,
    BodyStructure,
    Bundle,
    CapabilityStatement,
    CarePlan,
    CareTeam,
    CatalogEntry,
    ChargeItem,
    ChargeItemDefinition,
    Claim,
    ClaimResponse,
    ClinicalImpression,
    CodeSystem,
    Communication,
    CommunicationRequest,
    CompartmentDefinition,
    Composition,
    ConceptMap,
    Condition,
    Consent,
    Contract,
    Coverage,
    CoverageEligibilityRequest,
    CoverageEligibilityResponse,
    DetectedIssue,
    Device,
    DeviceDefinition,
    DeviceMetric,
    DeviceRequest,
    DeviceUseStatement,
    DiagnosticReport,
    DocumentManifest,
    DocumentReference,
    EffectEvidenceSynthesis,
    Encounter,
    Endpoint,
    EnrollmentRequest,
    EnrollmentResponse,
    EpisodeOfCare,
    EventDefinition,
    Evidence,
    EvidenceVariable,
    ExampleScenario,
    ExplanationOfBenefit,
    FamilyMemberHistory,
    Flag,
    Goal,
    GraphDefinition,
    Group,
    GuidanceResponse,
    HealthcareService,
    ImagingStudy,
    Immunization,
    ImmunizationEvaluation,
    ImmunizationRecommendation,
    ImplementationGuide,
    InsurancePlan,
    Invoice,
    Library,
    Linkage,
    List,
    Location,
    Measure,
    MeasureReport,
    Media,
    Medication,
    MedicationAdministration,
    MedicationDispense,
    MedicationKnowledge,
    MedicationRequest,
    MedicationStatement,
    MedicinalProduct,
    MedicinalProductAuthorization,
    MedicinalProductContraindication,
    MedicinalProductIndication,
    MedicinalProductIngredient,
    MedicinalProductInteraction,
    MedicinalProductManufactured,
    MedicinalProductPackaged,
    MedicinalProductPharmaceutical,
    MedicinalProductUndesirableEffect,
    MessageDefinition,
    MessageHeader,
    MolecularSequence,
    NamingSystem,
    NutritionOrder,
    Observation,
    ObservationDefinition,
    OperationDefinition,
    OperationOutcome,
    Organization,
    OrganizationAffiliation,
    Parameters,
    Patient,
    PaymentNotice,
    PaymentReconciliation,
    Person,
    PlanDefinition,
    Practitioner,
    PractitionerRole,
    Procedure,
    Provenance,
    Questionnaire,
    QuestionnaireResponse,
    RelatedPerson,
    RequestGroup,
    ResearchDefinition,
    ResearchElementDefinition,
    ResearchStudy,
    ResearchSubject,
    RiskAssessment,
    RiskEvidenceSynthesis,
    Schedule,
    SearchParameter,
    ServiceRequest,
    Slot,
    Specimen,
    SpecimenDefinition,
    StructureDefinition,
    StructureMap,
    Subscription,
    Substance,
    SubstanceNucleicAcid,
    SubstancePolymer,
    SubstanceProtein,
    SubstanceReferenceInformation,
    SubstanceSourceMaterial,
    SubstanceSpecification,
    SupplyDelivery,
    SupplyRequest,
    Task,
    TerminologyCapabilities,
    TestReport,
    TestScript,
    ValueSet,
    VerificationResult,
    VisionPrescription,
}
