use crate::r4::*;
use crate::FhirSerde;

/// FHIR MolecularSequence type
///
/// Raw data describing a biological sequence.
///
/// See: [MolecularSequence](http://hl7.org/fhir/StructureDefinition/MolecularSequence)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MolecularSequence", kind = "domain_resource")]
pub struct MolecularSequence {
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
    /// Unique ID for this particular sequence. This is a FHIR-defined id.
    pub identifier: Option<Vec<Identifier>>,
    /// Amino Acid Sequence/ DNA Sequence / RNA Sequence
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Code>,
    /// Base number of coordinate system (0 for 0-based numbering or coordinates, inclusive start, exclusive end, 1 for 1-based numbering, inclusive start, inclusive end)
    #[fhir_serde(rename = "coordinateSystem")]
    pub coordinate_system: Integer,
    /// Who and/or what this is about
    pub patient: Option<Reference>,
    /// Specimen used for sequencing
    pub specimen: Option<Reference>,
    /// The method for sequencing
    pub device: Option<Reference>,
    /// Who should be responsible for test result
    pub performer: Option<Reference>,
    /// The number of copies of the sequence of interest. (RNASeq).
    pub quantity: Option<Quantity>,
    /// A sequence used as reference
    #[fhir_serde(rename = "referenceSeq")]
    pub reference_seq: Option<MolecularSequenceReferenceSeq>,
    /// Variant in sequence
    pub variant: Option<Vec<MolecularSequenceVariant>>,
    /// Sequence that was observed
    #[fhir_serde(rename = "observedSeq")]
    pub observed_seq: Option<String>,
    /// An set of value as quality of sequence
    pub quality: Option<Vec<MolecularSequenceQuality>>,
    /// Average number of reads representing a given nucleotide in the reconstructed sequence
    #[fhir_serde(rename = "readCoverage")]
    pub read_coverage: Option<Integer>,
    /// External repository which contains detailed report related with observedSeq in this resource
    pub repository: Option<Vec<MolecularSequenceRepository>>,
    /// Pointer to next atomic sequence
    pub pointer: Option<Vec<Reference>>,
    /// Structural variant
    #[fhir_serde(rename = "structureVariant")]
    pub structure_variant: Option<Vec<MolecularSequenceStructureVariant>>,
}

/// An set of value as quality of sequence
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MolecularSequenceQuality", kind = "backbone_element")]
pub struct MolecularSequenceQuality {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// INDEL / SNP / Undefined variant
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// Standard sequence for comparison
    #[fhir_serde(rename = "standardSequence")]
    pub standard_sequence: Option<CodeableConcept>,
    /// Start position of the sequence
    pub start: Option<Integer>,
    /// End position of the sequence
    pub end: Option<Integer>,
    /// Quality score for the comparison
    pub score: Option<Quantity>,
    /// Method to get quality
    pub method: Option<CodeableConcept>,
    /// True positives from the perspective of the truth data
    #[fhir_serde(rename = "truthTP")]
    pub truth_t_p: Option<Decimal>,
    /// True positives from the perspective of the query data
    #[fhir_serde(rename = "queryTP")]
    pub query_t_p: Option<Decimal>,
    /// False negatives
    #[fhir_serde(rename = "truthFN")]
    pub truth_f_n: Option<Decimal>,
    /// False positives
    #[fhir_serde(rename = "queryFP")]
    pub query_f_p: Option<Decimal>,
    /// False positives where the non-REF alleles in the Truth and Query Call Sets match
    #[fhir_serde(rename = "gtFP")]
    pub gt_f_p: Option<Decimal>,
    /// Precision of comparison
    pub precision: Option<Decimal>,
    /// Recall of comparison
    pub recall: Option<Decimal>,
    /// F-score
    #[fhir_serde(rename = "fScore")]
    pub f_score: Option<Decimal>,
    /// Receiver Operator Characteristic (ROC) Curve
    pub roc: Option<MolecularSequenceQualityRoc>,
}

/// Receiver Operator Characteristic (ROC) Curve
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MolecularSequenceQualityRoc", kind = "backbone_element")]
pub struct MolecularSequenceQualityRoc {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Genotype quality score
    pub score: Option<Vec<Integer>>,
    /// Roc score true positive numbers
    #[fhir_serde(rename = "numTP")]
    pub num_t_p: Option<Vec<Integer>>,
    /// Roc score false positive numbers
    #[fhir_serde(rename = "numFP")]
    pub num_f_p: Option<Vec<Integer>>,
    /// Roc score false negative numbers
    #[fhir_serde(rename = "numFN")]
    pub num_f_n: Option<Vec<Integer>>,
    /// Precision of the GQ score
    pub precision: Option<Vec<Decimal>>,
    /// Sensitivity of the GQ score
    pub sensitivity: Option<Vec<Decimal>>,
    /// FScore of the GQ score
    #[fhir_serde(rename = "fMeasure")]
    pub f_measure: Option<Vec<Decimal>>,
}

/// A sequence used as reference
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MolecularSequenceReferenceSeq", kind = "backbone_element")]
pub struct MolecularSequenceReferenceSeq {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Chromosome containing genetic finding
    pub chromosome: Option<CodeableConcept>,
    /// The Genome Build used for reference, following GRCh build versions e.g. 'GRCh 37'.
    #[fhir_serde(rename = "genomeBuild")]
    pub genome_build: Option<String>,
    /// A relative reference to a DNA strand based on gene orientation. The strand that contains the open reading frame of the gene is the "sense" strand, and the opposite complementary strand is the "antisense" strand.
    pub orientation: Option<Code>,
    /// Reference identifier
    #[fhir_serde(rename = "referenceSeqId")]
    pub reference_seq_id: Option<CodeableConcept>,
    /// A pointer to another MolecularSequence entity as reference sequence
    #[fhir_serde(rename = "referenceSeqPointer")]
    pub reference_seq_pointer: Option<Reference>,
    /// A string to represent reference sequence
    #[fhir_serde(rename = "referenceSeqString")]
    pub reference_seq_string: Option<String>,
    /// An absolute reference to a strand. The Watson strand is the strand whose 5'-end is on the short arm of the chromosome, and the Crick strand as the one whose 5'-end is on the long arm.
    pub strand: Option<Code>,
    /// Start position of the window on the reference sequence
    #[fhir_serde(rename = "windowStart")]
    pub window_start: Option<Integer>,
    /// End position of the window on the reference sequence
    #[fhir_serde(rename = "windowEnd")]
    pub window_end: Option<Integer>,
}

/// External repository which contains detailed report related with observedSeq in this resource
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MolecularSequenceRepository", kind = "backbone_element")]
pub struct MolecularSequenceRepository {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Click and see / RESTful API / Need login to see / RESTful API with authentication / Other ways to see resource
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
    /// URI of the repository
    pub url: Option<Url>,
    /// Repository's name
    pub name: Option<String>,
    /// Id of the dataset that used to call for dataset in repository
    #[fhir_serde(rename = "datasetId")]
    pub dataset_id: Option<String>,
    /// Id of the variantset that used to call for variantset in repository
    #[fhir_serde(rename = "variantsetId")]
    pub variantset_id: Option<String>,
    /// Id of the read
    #[fhir_serde(rename = "readsetId")]
    pub readset_id: Option<String>,
}

/// Structural variant
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MolecularSequenceStructureVariant", kind = "backbone_element")]
pub struct MolecularSequenceStructureVariant {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Structural variant change type
    #[fhir_serde(rename = "variantType")]
    pub variant_type: Option<CodeableConcept>,
    /// Does the structural variant have base pair resolution breakpoints?
    pub exact: Option<Boolean>,
    /// Structural variant length
    pub length: Option<Integer>,
    /// Structural variant outer
    pub outer: Option<MolecularSequenceStructureVariantOuter>,
    /// Structural variant inner
    pub inner: Option<MolecularSequenceStructureVariantInner>,
}

/// Structural variant inner
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MolecularSequenceStructureVariantInner", kind = "backbone_element")]
pub struct MolecularSequenceStructureVariantInner {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Structural variant inner start
    pub start: Option<Integer>,
    /// Structural variant inner end
    pub end: Option<Integer>,
}

/// Structural variant outer
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MolecularSequenceStructureVariantOuter", kind = "backbone_element")]
pub struct MolecularSequenceStructureVariantOuter {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Structural variant outer start
    pub start: Option<Integer>,
    /// Structural variant outer end
    pub end: Option<Integer>,
}

/// Variant in sequence
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "MolecularSequenceVariant", kind = "backbone_element")]
pub struct MolecularSequenceVariant {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Start position of the variant on the reference sequence
    pub start: Option<Integer>,
    /// End position of the variant on the reference sequence
    pub end: Option<Integer>,
    /// Allele that was observed
    #[fhir_serde(rename = "observedAllele")]
    pub observed_allele: Option<String>,
    /// Allele in the reference sequence
    #[fhir_serde(rename = "referenceAllele")]
    pub reference_allele: Option<String>,
    /// Extended CIGAR string for aligning the sequence with reference bases
    pub cigar: Option<String>,
    /// Pointer to observed variant information
    #[fhir_serde(rename = "variantPointer")]
    pub variant_pointer: Option<Reference>,
}
