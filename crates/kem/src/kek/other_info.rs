// File: crates/kem/src/kek/other_info.rs
//! DER encoding of the RFC 2631 `OtherInfo` structure
//!
//! ```text
//! OtherInfo ::= SEQUENCE {
//!     keyInfo     KeySpecificInfo,
//!     partyAInfo  [0] EXPLICIT OCTET STRING OPTIONAL,
//!     suppPubInfo [2] EXPLICIT OCTET STRING }
//!
//! KeySpecificInfo ::= SEQUENCE {
//!     algorithm OBJECT IDENTIFIER,
//!     counter   OCTET STRING SIZE (4..4) }
//! ```
//!
//! The `der` decoder is strict DER. Field widths the schema leaves open
//! (counter, partyAInfo) are checked here after decoding.

use super::oid::ObjectIdentifier;
use super::KekState;
use der::asn1::OctetString;
use der::{Decode, Encode, Sequence};
use dhkam_api::error::{Error, Result};
use dhkam_params::{KEK_COUNTER_SIZE, PARTY_A_INFO_SIZE};

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct KeySpecificInfo {
    algorithm: ObjectIdentifier,
    counter: OctetString,
}

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct OtherInfo {
    key_info: KeySpecificInfo,
    #[asn1(context_specific = "0", tag_mode = "EXPLICIT", optional = "true")]
    party_a_info: Option<OctetString>,
    #[asn1(context_specific = "2", tag_mode = "EXPLICIT")]
    supp_pub_info: OctetString,
}

fn malformed(context: &'static str) -> impl FnOnce(der::Error) -> Error {
    move |err| {
        tracing::debug!(%err, context, "otherInfo codec error");
        Error::InvalidKekParams { context }
    }
}

pub(crate) fn encode_other_info(state: &KekState) -> Result<Vec<u8>> {
    let other_info = OtherInfo {
        key_info: KeySpecificInfo {
            algorithm: state.algorithm,
            counter: OctetString::new(state.counter.to_vec())
                .map_err(malformed("counter does not encode"))?,
        },
        party_a_info: state
            .party_a_info
            .map(|info| OctetString::new(info.to_vec()))
            .transpose()
            .map_err(malformed("partyAInfo does not encode"))?,
        supp_pub_info: OctetString::new(state.supp_pub_info.clone())
            .map_err(malformed("suppPubInfo does not encode"))?,
    };
    other_info.to_der().map_err(malformed("otherInfo does not encode"))
}

pub(crate) fn decode_other_info(bytes: &[u8]) -> Result<KekState> {
    let other_info = OtherInfo::from_der(bytes).map_err(malformed("malformed otherInfo"))?;

    let counter: [u8; KEK_COUNTER_SIZE] = other_info
        .key_info
        .counter
        .as_bytes()
        .try_into()
        .map_err(|_| Error::InvalidKekParams {
            context: "counter is not 4 bytes",
        })?;

    let party_a_info = other_info
        .party_a_info
        .as_ref()
        .map(|info| <[u8; PARTY_A_INFO_SIZE]>::try_from(info.as_bytes()))
        .transpose()
        .map_err(|_| Error::InvalidKekParams {
            context: "partyAInfo is not 64 bytes",
        })?;

    Ok(KekState {
        algorithm: other_info.key_info.algorithm,
        party_a_info,
        supp_pub_info: other_info.supp_pub_info.as_bytes().to_vec(),
        counter,
    })
}
