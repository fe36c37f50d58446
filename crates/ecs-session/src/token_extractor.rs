use crate::PageUrl;

pub const TOKEN_PARAM: &str = "token";
pub const SSO_PARAM: &str = "sso";
pub const SHELL_PARAM: &str = "shell";

/// Parameters removed from the visible URL once a token has been accepted.
pub const SSO_PARAMS: [&str; 3] = [TOKEN_PARAM, SSO_PARAM, SHELL_PARAM];

/// Raw, still-encoded token taken from the page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsoToken {
    raw: String,
}

impl SsoToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Find an SSO token in the page URL.
///
/// Both `token` and `sso=true` must be present; a token without the marker
/// is ignored.
pub fn extract_token(url: &PageUrl) -> Option<SsoToken> {
    let token = url.query_param(TOKEN_PARAM).filter(|t| !t.is_empty())?;

    if url.query_param(SSO_PARAM) != Some("true") {
        return None;
    }

    Some(SsoToken::new(token))
}

/// Shell origin hint carried by the launch URL, if any.
pub fn shell_hint(url: &PageUrl) -> Option<&str> {
    url.query_param(SHELL_PARAM).filter(|s| !s.is_empty())
}
