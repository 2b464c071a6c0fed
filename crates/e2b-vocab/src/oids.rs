//! Object identifiers and fixed literals of the ICH E2B(R3) message.
//!
//! These values are compared bit-for-bit by regulatory gateways. They are
//! part of the wire format, not configuration.

/// HL7 v3 default namespace.
pub const HL7_NS: &str = "urn:hl7-org:v3";

/// HL7 ITS version attribute on the batch root.
pub const ITS_VERSION: &str = "XML_1.0";

/// Batch wrapper interaction.
pub const BATCH_INTERACTION: &str = "MCCI_IN200100UV01";

/// ICSR message interaction.
pub const MESSAGE_INTERACTION: &str = "PORR_IN049016UV";

/// Control act trigger event code.
pub const CONTROL_ACT_TRIGGER: &str = "PORR_TE049016UV";

/// HL7 interaction identifier root.
pub const INTERACTION_ID_OID: &str = "2.16.840.1.113883.1.6";

/// HL7 trigger event code system.
pub const TRIGGER_EVENT_OID: &str = "2.16.840.1.113883.1.18";

/// HL7 ActCode code system (`PAT_ADV_EVNT`).
pub const ACT_CODE_OID: &str = "2.16.840.1.113883.5.4";

/// Batch number (N.1.2).
pub const BATCH_NUMBER_OID: &str = "2.16.840.1.113883.3.989.2.1.3.22";

/// Batch sender identifier (N.1.3).
pub const BATCH_SENDER_OID: &str = "2.16.840.1.113883.3.989.2.1.3.13";

/// Batch receiver identifier (N.1.4).
pub const BATCH_RECEIVER_OID: &str = "2.16.840.1.113883.3.989.2.1.3.14";

/// Message number and sender's safety report identifier (N.2.r.1, C.1.1).
pub const MESSAGE_NUMBER_OID: &str = "2.16.840.1.113883.3.989.2.1.3.1";

/// Worldwide unique case identifier (C.1.8.1).
pub const WORLDWIDE_CASE_OID: &str = "2.16.840.1.113883.3.989.2.1.3.2";

/// Message sender identifier (N.2.r.2).
pub const MESSAGE_SENDER_OID: &str = "2.16.840.1.113883.3.989.2.1.3.11";

/// Message receiver identifier (N.2.r.3).
pub const MESSAGE_RECEIVER_OID: &str = "2.16.840.1.113883.3.989.2.1.3.12";

/// Marketing authorisation number (G.k.3.1).
pub const AUTHORIZATION_NUMBER_OID: &str = "2.16.840.1.113883.3.989.2.1.3.4";

/// ICH batch/message type code system.
pub const MESSAGE_TYPE_OID: &str = "2.16.840.1.113883.3.989.2.1.1.1";

/// ICH observation code system (age, reaction, seriousness criteria, ...).
pub const OBSERVATION_CODE_OID: &str = "2.16.840.1.113883.3.989.2.1.1.19";

/// ICH organizer category code system.
pub const ORGANIZER_CATEGORY_OID: &str = "2.16.840.1.113883.3.989.2.1.1.20";

/// ICH source-report relationship code system.
pub const RELATED_INVESTIGATION_OID: &str = "2.16.840.1.113883.3.989.2.1.1.22";

/// ICH investigation characteristic code system.
pub const CHARACTERISTIC_OID: &str = "2.16.840.1.113883.3.989.2.1.1.23";

/// MedDRA.
pub const MEDDRA_OID: &str = "2.16.840.1.113883.6.163";

/// ISO 3166-1 alpha-2 country codes.
pub const ISO3166_OID: &str = "1.0.3166.1.2.2";

/// ISO 5218 sex codes.
pub const ISO5218_OID: &str = "1.0.5218";

/// Fixed sender extension used by the reference deployment.
pub const SENDER_EXTENSION: &str = "SKYVIGILANCE";

/// Fixed receiver extension (EudraVigilance production).
pub const RECEIVER_EXTENSION: &str = "EVHUMAN";

/// Sender organization name used when none is configured.
pub const DEFAULT_SENDER_ORGANIZATION: &str = "SkyVigilance";

/// Placeholder MedDRA code for reactions not yet coded.
pub const UNCODED_REACTION_CODE: &str = "10000001";

/// Codes within [`OBSERVATION_CODE_OID`].
pub mod observation {
    pub const AGE: &str = "3";
    pub const BODY_WEIGHT: &str = "7";
    pub const COMMENT: &str = "10";
    pub const CONTINUING: &str = "13";
    pub const HEIGHT: &str = "17";
    pub const INDICATION: &str = "19";
    pub const DRUG_ROLE: &str = "20";
    pub const OUTCOME: &str = "27";
    pub const REACTION: &str = "29";
    pub const RECURRENCE: &str = "31";
    pub const CAUSALITY: &str = "39";
}

/// Codes within [`ORGANIZER_CATEGORY_OID`].
pub mod organizer {
    pub const MEDICAL_HISTORY: &str = "1";
    pub const LAB_TESTS: &str = "3";
    pub const DRUG_INFORMATION: &str = "4";
}
