//! Process-state access behind a seam.
//!
//! Resolution reads environment variables and the user's home directory.
//! Both are ambient global state, so they sit behind the [`Environment`]
//! trait: production code injects [`ProcessEnvironment`], tests inject a
//! fake and never mutate real process state.

use std::path::PathBuf;

/// Access to environment variables and the home directory.
pub trait Environment {
    /// Returns the value of the named environment variable, or `None` if
    /// it is unset or not valid Unicode.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the current user's home directory, or `None` if it cannot
    /// be determined.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// [`Environment`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}
