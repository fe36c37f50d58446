use crate::{PageUrl, Result};

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::warn;

/// The parts of the hosting page the session core touches.
pub trait Browser: Send + Sync {
    /// Address currently shown.
    fn current_url(&self) -> PageUrl;

    /// Rewrite the visible address in place: no reload, no new history entry.
    fn replace_url(&self, url: PageUrl);

    /// Leave the application for `destination`.
    fn navigate(&self, destination: &str);
}

#[derive(Debug)]
struct BrowserState {
    current: PageUrl,
    replacements: Vec<PageUrl>,
    navigations: Vec<String>,
}

/// Browser stand-in that records what the core asked it to do.
#[derive(Debug)]
pub struct MemoryBrowser {
    state: Mutex<BrowserState>,
}

impl MemoryBrowser {
    pub fn new(url: PageUrl) -> Self {
        Self {
            state: Mutex::new(BrowserState {
                current: url,
                replacements: Vec::new(),
                navigations: Vec::new(),
            }),
        }
    }

    /// Browser showing `url`.
    #[track_caller]
    pub fn open(url: &str) -> Result<Self> {
        Ok(Self::new(PageUrl::parse(url)?))
    }

    /// Every in-place URL rewrite, oldest first.
    pub fn replacements(&self) -> Vec<PageUrl> {
        self.state().replacements.clone()
    }

    /// Every navigation away, oldest first.
    pub fn navigations(&self) -> Vec<String> {
        self.state().navigations.clone()
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.state().navigations.last().cloned()
    }

    fn state(&self) -> MutexGuard<'_, BrowserState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Browser for MemoryBrowser {
    fn current_url(&self) -> PageUrl {
        self.state().current.clone()
    }

    fn replace_url(&self, url: PageUrl) {
        let mut state = self.state();
        state.replacements.push(url.clone());
        state.current = url;
    }

    fn navigate(&self, destination: &str) {
        let mut state = self.state();
        state.navigations.push(destination.to_string());
        match PageUrl::parse(destination) {
            Ok(url) => state.current = url,
            Err(e) => warn!("Navigated to an unparseable address: {e}"),
        }
    }
}
