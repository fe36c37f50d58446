use crate::{Result, SessionError};

use std::fmt;

use url::{Url, form_urlencoded};

/// A parsed page address with its query pairs decoded once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    url: Url,
    query: Vec<(String, String)>,
}

impl PageUrl {
    #[track_caller]
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input).map_err(|e| SessionError::invalid_url(input, e))?;
        Ok(Self::from(url))
    }

    /// First value of `name`, already form-decoded.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.query.iter().any(|(key, _)| key == name)
    }

    /// Copy of this URL with every occurrence of `names` removed.
    ///
    /// Remaining pairs keep their bytes exactly as the address bar had them.
    pub fn without_params(&self, names: &[&str]) -> Self {
        let kept: Vec<&str> = self
            .url
            .query()
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| !names.contains(&decoded_key(pair).as_str()))
            .collect();

        let mut url = self.url.clone();
        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&kept.join("&")));
        }
        Self::from(url)
    }

    /// Copy of this URL with `name=value` appended.
    pub fn with_param(&self, name: &str, value: &str) -> Self {
        let mut url = self.url.clone();
        url.query_pairs_mut().append_pair(name, value);
        Self::from(url)
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl From<Url> for PageUrl {
    fn from(url: Url) -> Self {
        let query = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { url, query }
    }
}

impl fmt::Display for PageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.url, f)
    }
}

fn decoded_key(pair: &str) -> String {
    form_urlencoded::parse(pair.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}
