use crate::r4::*;
use crate::FhirSerde;

/// FHIR SubstanceNucleicAcid type
///
/// Nucleic acids are defined by three distinct elements: the base, sugar and
/// linkage. Individual substance/moiety IDs will be created for each of these
/// elements. The nucleotide sequence will be always entered in the 5’-3’
/// direction
///
/// See: [SubstanceNucleicAcid](http://hl7.org/fhir/StructureDefinition/SubstanceNucleicAcid)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceNucleicAcid", kind = "domain_resource")]
pub struct SubstanceNucleicAcid {
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
    /// The type of the sequence shall be specified based on a controlled vocabulary
    #[fhir_serde(rename = "sequenceType")]
    pub sequence_type: Option<CodeableConcept>,
    /// The number of linear sequences of nucleotides linked through phosphodiester bonds shall be described. Subunits would be strands of nucleic acids that are tightly associated typically through Watson-Crick base pairing. NOTE: If not specified in the reference source, the assumption is that there is 1 subunit.
    #[fhir_serde(rename = "numberOfSubunits")]
    pub number_of_subunits: Option<Integer>,
    /// The area of hybridisation shall be described if applicable for double stranded RNA or DNA. The number associated with the subunit followed by the number associated to the residue shall be specified in increasing order. The underscore “” shall be used as separator as follows: “Subunitnumber Residue”.
    #[fhir_serde(rename = "areaOfHybridisation")]
    pub area_of_hybridisation: Option<String>,
    /// (TBC)
    #[fhir_serde(rename = "oligoNucleotideType")]
    pub oligo_nucleotide_type: Option<CodeableConcept>,
    /// Subunits are listed in order of decreasing length; sequences of the same length will be ordered by molecular weight; subunits that have identical sequences will be repeated multiple times
    pub subunit: Option<Vec<SubstanceNucleicAcidSubunit>>,
}

/// Subunits are listed in order of decreasing length; sequences of the same length will be ordered by molecular weight; subunits that have identical sequences will be repeated multiple times
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceNucleicAcidSubunit", kind = "backbone_element")]
pub struct SubstanceNucleicAcidSubunit {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Index of linear sequences of nucleic acids in order of decreasing length. Sequences of the same length will be ordered by molecular weight. Subunits that have identical sequences will be repeated and have sequential subscripts.
    pub subunit: Option<Integer>,
    /// Actual nucleotide sequence notation from 5' to 3' end using standard single letter codes. In addition to the base sequence, sugar and type of phosphate or non-phosphate linkage should also be captured.
    pub sequence: Option<String>,
    /// The length of the sequence shall be captured
    pub length: Option<Integer>,
    /// (TBC)
    #[fhir_serde(rename = "sequenceAttachment")]
    pub sequence_attachment: Option<Attachment>,
    /// The nucleotide present at the 5’ terminal shall be specified based on a controlled vocabulary. Since the sequence is represented from the 5' to the 3' end, the 5’ prime nucleotide is the letter at the first position in the sequence. A separate representation would be redundant.
    #[fhir_serde(rename = "fivePrime")]
    pub five_prime: Option<CodeableConcept>,
    /// The nucleotide present at the 3’ terminal shall be specified based on a controlled vocabulary. Since the sequence is represented from the 5' to the 3' end, the 5’ prime nucleotide is the letter at the last position in the sequence. A separate representation would be redundant.
    #[fhir_serde(rename = "threePrime")]
    pub three_prime: Option<CodeableConcept>,
    /// The linkages between sugar residues will also be captured
    pub linkage: Option<Vec<SubstanceNucleicAcidSubunitLinkage>>,
    /// 5.3.6.8.1 Sugar ID (Mandatory)
    pub sugar: Option<Vec<SubstanceNucleicAcidSubunitSugar>>,
}

/// The linkages between sugar residues will also be captured
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceNucleicAcidSubunitLinkage", kind = "backbone_element")]
pub struct SubstanceNucleicAcidSubunitLinkage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The entity that links the sugar residues together should also be captured for nearly all naturally occurring nucleic acid the linkage is a phosphate group. For many synthetic oligonucleotides phosphorothioate linkages are often seen. Linkage connectivity is assumed to be 3’-5’. If the linkage is either 3’-3’ or 5’-5’ this should be specified.
    pub connectivity: Option<String>,
    /// Each linkage will be registered as a fragment and have an ID
    pub identifier: Option<Identifier>,
    /// Each linkage will be registered as a fragment and have at least one name. A single name shall be assigned to each linkage.
    pub name: Option<String>,
    /// Residues shall be captured as described in 5.3.6.8.3
    #[fhir_serde(rename = "residueSite")]
    pub residue_site: Option<String>,
}

/// 5.3.6.8.1 Sugar ID (Mandatory)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_type(name = "SubstanceNucleicAcidSubunitSugar", kind = "backbone_element")]
pub struct SubstanceNucleicAcidSubunitSugar {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The Substance ID of the sugar or sugar-like component that make up the nucleotide
    pub identifier: Option<Identifier>,
    /// The name of the sugar or sugar-like component that make up the nucleotide
    pub name: Option<String>,
    /// The residues that contain a given sugar will be captured. The order of given residues will be captured in the 5‘-3‘direction consistent with the base sequences listed above.
    #[fhir_serde(rename = "residueSite")]
    pub residue_site: Option<String>,
}
