use crate::{Result as SessionResult, SessionError, TokenClaims};

/// URL-encode claims the way a parent shell places them in the `token` parameter.
pub fn encode_token(claims: &TokenClaims) -> SessionResult<String> {
    let json = serde_json::to_string(claims)?;
    Ok(urlencoding::encode(&json).into_owned())
}

/// Undo the URL-encoding and parse the JSON payload.
///
/// Any failure, in either step, is a malformed token.
#[track_caller]
pub fn decode_token(raw: &str) -> SessionResult<TokenClaims> {
    let json = urlencoding::decode(raw)
        .map_err(|e| SessionError::malformed_token(format!("invalid encoding: {e}")))?;

    serde_json::from_str::<TokenClaims>(&json)
        .map_err(|e| SessionError::malformed_token(format!("invalid payload: {e}")))
}
