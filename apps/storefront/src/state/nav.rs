//! # Navigation Session
//!
//! Current route and mobile drawer state for this session.

use std::sync::{Mutex, MutexGuard, PoisonError};

use glow_core::NavState;

#[derive(Debug, Default)]
pub struct SessionNav {
    nav: Mutex<NavState>,
}

impl SessionNav {
    pub fn new() -> Self {
        SessionNav::default()
    }

    pub fn with_nav<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&NavState) -> R,
    {
        f(&self.lock())
    }

    pub fn with_nav_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut NavState) -> R,
    {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, NavState> {
        self.nav.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
