//! Reversible envelope codec used by the mock SDK
//!
//! A mock "ciphertext" is a JSON document carrying the filename and the
//! base64 of the clear content. It is trivially reversible, which is all
//! the orchestration tests need; no real cryptography is involved.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sealbox_domain::{ClearFile, EncryptedEnvelope, Result, SealboxError};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct Envelope {
    filename: String,
    content_b64: String,
}

/// Seal a filename and clear content into a mock envelope.
pub fn seal(name: &str, content: &[u8]) -> Result<EncryptedEnvelope> {
    let doc = Envelope { filename: name.to_string(), content_b64: STANDARD.encode(content) };
    let bytes = serde_json::to_vec(&doc)
        .map_err(|e| SealboxError::Crypto(format!("mock seal failed: {e}")))?;
    Ok(EncryptedEnvelope(bytes))
}

/// Open a mock envelope back into the filename and clear content.
pub fn open(envelope: &EncryptedEnvelope) -> Result<ClearFile> {
    let doc: Envelope = serde_json::from_slice(&envelope.0)
        .map_err(|e| SealboxError::Crypto(format!("mock open failed: {e}")))?;
    let content = STANDARD
        .decode(doc.content_b64)
        .map_err(|e| SealboxError::Crypto(format!("mock open failed: {e}")))?;
    Ok(ClearFile { filename: doc.filename, content })
}
