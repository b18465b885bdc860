use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use web_sys::{window, Storage};

use crate::config;

/// The two per-session booleans that gate the intro sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionFlag {
    VideoShown,
    SplashShown,
}

impl SessionFlag {
    pub fn key(self) -> &'static str {
        match self {
            SessionFlag::VideoShown => config::VIDEO_SHOWN_KEY,
            SessionFlag::SplashShown => config::SPLASH_SHOWN_KEY,
        }
    }
}

/// Read/write access to session-scoped flags. Flags can only ever be raised;
/// an unset flag reads as `false`.
pub trait SessionFlags {
    fn get(&self, flag: SessionFlag) -> bool;
    fn set(&self, flag: SessionFlag);
}

/// Flags backed by the browser's `sessionStorage`.
#[derive(Debug, Default)]
pub struct BrowserSession;

impl BrowserSession {
    fn storage() -> Option<Storage> {
        let storage = window().and_then(|w| w.session_storage().ok()).flatten();
        if storage.is_none() {
            log::warn!("sessionStorage unavailable, intro flags will not persist");
        }
        storage
    }
}

impl SessionFlags for BrowserSession {
    fn get(&self, flag: SessionFlag) -> bool {
        Self::storage()
            .and_then(|storage| storage.get_item(flag.key()).ok().flatten())
            .map(|value| value == "true")
            .unwrap_or(false)
    }

    fn set(&self, flag: SessionFlag) {
        if self.get(flag) {
            return;
        }
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(flag.key(), "true") {
                log::warn!("Failed to persist {}: {:?}", flag.key(), e);
            }
        }
    }
}

/// In-memory flags, used when `sessionStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemorySession {
    raised: RefCell<HashSet<SessionFlag>>,
    writes: Cell<usize>,
}

impl MemorySession {
    #[cfg(test)]
    pub fn with(flags: &[SessionFlag]) -> Self {
        Self {
            raised: RefCell::new(flags.iter().copied().collect()),
            writes: Cell::new(0),
        }
    }

    /// Number of `set` calls that actually changed a flag.
    #[cfg(test)]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl SessionFlags for MemorySession {
    fn get(&self, flag: SessionFlag) -> bool {
        self.raised.borrow().contains(&flag)
    }

    fn set(&self, flag: SessionFlag) {
        if self.raised.borrow_mut().insert(flag) {
            self.writes.set(self.writes.get() + 1);
        }
    }
}

/// Shared handle passed through props. Equality is identity so Yew only
/// re-renders when a different store is injected.
#[derive(Clone)]
pub struct SessionStore(pub Rc<dyn SessionFlags>);

thread_local! {
    static BROWSER_STORE: SessionStore = {
        let available = window().and_then(|w| w.session_storage().ok()).flatten().is_some();
        if available {
            SessionStore(Rc::new(BrowserSession))
        } else {
            log::warn!("sessionStorage unavailable, keeping intro flags in memory");
            SessionStore(Rc::new(MemorySession::default()))
        }
    };
}

impl SessionStore {
    /// The page-wide store. Every call returns the same handle.
    pub fn browser() -> Self {
        BROWSER_STORE.with(SessionStore::clone)
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionStore")
    }
}

impl std::ops::Deref for SessionStore {
    type Target = dyn SessionFlags;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_read_false() {
        let session = MemorySession::default();
        assert!(!session.get(SessionFlag::VideoShown));
        assert!(!session.get(SessionFlag::SplashShown));
    }

    #[test]
    fn set_is_idempotent() {
        let session = MemorySession::default();
        session.set(SessionFlag::VideoShown);
        session.set(SessionFlag::VideoShown);
        assert!(session.get(SessionFlag::VideoShown));
        assert!(!session.get(SessionFlag::SplashShown));
        assert_eq!(session.writes(), 1);

        session.set(SessionFlag::SplashShown);
        session.set(SessionFlag::VideoShown);
        assert_eq!(session.writes(), 2);
    }

    #[test]
    fn preset_flags_do_not_count_as_writes() {
        let session = MemorySession::with(&[SessionFlag::VideoShown]);
        session.set(SessionFlag::VideoShown);
        assert!(session.get(SessionFlag::VideoShown));
        assert_eq!(session.writes(), 0);
    }

    #[test]
    fn keys_match_stored_names() {
        assert_eq!(SessionFlag::VideoShown.key(), "daanveer_video_shown");
        assert_eq!(SessionFlag::SplashShown.key(), "daanveer_splash_shown");
    }

    #[test]
    fn store_equality_is_identity() {
        let a = SessionStore(Rc::new(MemorySession::default()));
        let b = a.clone();
        let c = SessionStore(Rc::new(MemorySession::default()));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
