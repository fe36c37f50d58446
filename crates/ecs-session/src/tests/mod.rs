mod federated;
mod page_url;

use crate::{IdentityRecord, TokenClaims, encode_token};

pub(crate) const NOW: i64 = 1_700_000_000;
pub(crate) const APP_URL: &str = "https://simulator.example/app";

pub(crate) fn sample_record() -> IdentityRecord {
    IdentityRecord {
        uid: "u1".to_string(),
        email: "a@b.com".to_string(),
        name: "A".to_string(),
        year_of_study: "3".to_string(),
        role: "student".to_string(),
        is_admin: false,
        shell_domain: None,
        micro_app_domain: None,
    }
}

/// Launch URL carrying `claims` the way the parent shell builds it.
pub(crate) fn launch_url(claims: &TokenClaims, sso: Option<&str>) -> String {
    let token = encode_token(claims).unwrap();
    let mut url = format!("{APP_URL}?token={}", urlencoding::encode(&token));
    if let Some(sso) = sso {
        url.push_str(&format!("&sso={sso}"));
    }
    url
}
