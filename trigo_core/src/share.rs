//! # Share-code Codec
//!
//! Serializes a minimal problem state (mode plus the three typed input
//! values) into a copy-pasteable text token: a compact JSON body wrapped in
//! standard base64. No compression, no integrity check — the decode path
//! validates shape instead.
//!
//! Input values travel as the strings the host UI held, so a token
//! round-trips exactly even for partially-typed or locale-formatted input.
//!
//! ## Example
//!
//! ```rust
//! use trigo_core::share::{decode, encode, ShareState};
//! use trigo_core::solver::TriangleMode;
//!
//! let state = ShareState::new(TriangleMode::Sss, "3", "4", "5");
//! let token = encode(&state).unwrap();
//! let back = decode(&token).unwrap();
//! assert_eq!(back, state);
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::errors::{TrigoError, TrigoResult};
use crate::solver::TriangleMode;

/// The problem state carried by a share code.
///
/// `mode` and a non-empty `val1` are required on decode; `val2`/`val3`
/// default to empty (right-triangle modes have no third value at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareState {
    pub mode: TriangleMode,
    pub val1: String,
    #[serde(default)]
    pub val2: String,
    #[serde(default)]
    pub val3: String,
}

impl ShareState {
    pub fn new(
        mode: TriangleMode,
        val1: impl Into<String>,
        val2: impl Into<String>,
        val3: impl Into<String>,
    ) -> Self {
        ShareState {
            mode,
            val1: val1.into(),
            val2: val2.into(),
            val3: val3.into(),
        }
    }
}

/// Encode a problem state into a portable text token.
pub fn encode(state: &ShareState) -> TrigoResult<String> {
    let json = serde_json::to_string(state).map_err(|e| TrigoError::Serialization {
        reason: e.to_string(),
    })?;
    Ok(STANDARD.encode(json))
}

/// Decode a share token back into a problem state.
///
/// Any malformed input — bad base64, invalid JSON, unknown mode, missing
/// required fields — is rejected as a single decode failure the caller can
/// show to the user; nothing here panics or unwinds.
pub fn decode(token: &str) -> TrigoResult<ShareState> {
    let bytes = STANDARD
        .decode(token.trim())
        .map_err(|_| TrigoError::decode_rejected("not a valid share code"))?;
    let json = String::from_utf8(bytes)
        .map_err(|_| TrigoError::decode_rejected("share code is not text"))?;
    let state: ShareState = serde_json::from_str(&json)
        .map_err(|_| TrigoError::decode_rejected("malformed problem state"))?;
    if state.val1.trim().is_empty() {
        return Err(TrigoError::decode_rejected("missing first input value"));
    }
    Ok(state)
}
