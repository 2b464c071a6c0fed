//! Batch envelope (ICH E2B N.1): header fields and the sender/receiver footer.

use e2b_vocab::oids::{
    BATCH_INTERACTION, BATCH_NUMBER_OID, BATCH_RECEIVER_OID, BATCH_SENDER_OID, INTERACTION_ID_OID,
    ITS_VERSION, MESSAGE_TYPE_OID, RECEIVER_EXTENSION, SENDER_EXTENSION,
};
use e2b_xml::XmlElement;

use crate::hl7::{coded, device, id};

/// Batch number derived from the case number.
pub fn batch_number(case_id: &str) -> String {
    format!("{case_id}-BATCH")
}

/// The batch root with its header children.
pub fn batch_root(case_id: &str, timestamp: &str) -> XmlElement {
    let mut root = XmlElement::new(BATCH_INTERACTION).with_attr("ITSVersion", ITS_VERSION);
    root.push(id(BATCH_NUMBER_OID, &batch_number(case_id)));
    root.child("creationTime").set_attr("value", timestamp);
    root.child("responseModeCode").set_attr("code", "D");
    root.push(
        XmlElement::new("interactionId")
            .with_attrs([("root", INTERACTION_ID_OID), ("extension", BATCH_INTERACTION)]),
    );
    root.push(coded("name", "1", MESSAGE_TYPE_OID));
    root
}

/// Batch-level receiver and sender, appended after the message.
pub fn batch_footer() -> [XmlElement; 2] {
    [
        device("receiver", "RCV", BATCH_RECEIVER_OID, RECEIVER_EXTENSION),
        device("sender", "SND", BATCH_SENDER_OID, SENDER_EXTENSION),
    ]
}
