//! Shared library loader
//!
//! Opens the first library in an ordered list of candidate names. Candidates
//! are handed straight to the platform loader, so they follow its search
//! rules (`LD_LIBRARY_PATH`, the linker cache, absolute paths); this module
//! adds no directory search of its own.
//!
//! On Unix libraries are opened with `RTLD_LAZY | RTLD_LOCAL`: unresolved
//! symbols inside the library are tolerated until first use and nothing it
//! exports is made visible to libraries opened later.
//!
//! # Examples
//!
//! ```no_run
//! use gbind::loader::open_first;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let library = open_first("gtk", &["libgtk-4.so.1", "libgtk-4.so"])?;
//! println!("Opened {}", library.name());
//! # Ok(())
//! # }
//! ```

use libloading::Library;
use sdk::errors::BindError;
use std::fmt;

/// A shared library opened under one of its candidate names
///
/// Owns the platform handle. Dropping it unloads the library; `close` does the
/// same but reports the platform's error.
pub struct OpenedLibrary {
    /// Candidate name that opened successfully
    name: String,
    library: Library,
}

impl OpenedLibrary {
    /// Candidate name the library was opened under
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn library(&self) -> &Library {
        &self.library
    }

    /// Release the handle
    ///
    /// # Errors
    ///
    /// Returns the platform loader's error if it refuses the unload. The
    /// handle is consumed either way.
    pub fn close(self) -> Result<(), libloading::Error> {
        tracing::debug!("Closing library {}", self.name);
        self.library.close()
    }
}

impl fmt::Debug for OpenedLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenedLibrary")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Open the first candidate the platform loader accepts
///
/// Candidates are tried in order and the search stops at the first success;
/// later candidates are never attempted. Every call is an independent open:
/// the platform may or may not share one mapping between two calls with the
/// same candidates, and nothing here relies on either.
///
/// # Arguments
///
/// * `module` - Name of the module the library is for (used in errors and logs)
/// * `candidates` - Library names in preference order
///
/// # Errors
///
/// Returns `BindError::LibraryNotFound` if no candidate could be opened,
/// including when `candidates` is empty. No handle is retained in that case.
pub fn open_first<S: AsRef<str>>(
    module: &str,
    candidates: &[S],
) -> Result<OpenedLibrary, BindError> {
    for candidate in candidates {
        let name = candidate.as_ref();
        match open_lazy(name) {
            Ok(library) => {
                tracing::info!("Module '{}' opened {}", module, name);
                return Ok(OpenedLibrary {
                    name: name.to_string(),
                    library,
                });
            }
            Err(e) => {
                tracing::debug!("Module '{}': cannot open {}: {}", module, name, e);
            }
        }
    }

    let candidates: Vec<String> = candidates.iter().map(|c| c.as_ref().to_string()).collect();
    tracing::error!(
        "Unable to locate a library for module '{}' (tried: {})",
        module,
        candidates.join(", ")
    );
    Err(BindError::LibraryNotFound {
        module: module.to_string(),
        candidates,
    })
}

#[cfg(unix)]
fn open_lazy(name: &str) -> Result<Library, libloading::Error> {
    use libloading::os::unix::{Library as UnixLibrary, RTLD_LAZY, RTLD_LOCAL};

    // SAFETY: opening a library runs its initializers. Candidates name
    // libraries the caller has chosen to trust.
    unsafe { UnixLibrary::open(Some(name), RTLD_LAZY | RTLD_LOCAL) }.map(Library::from)
}

#[cfg(not(unix))]
fn open_lazy(name: &str) -> Result<Library, libloading::Error> {
    // SAFETY: see the Unix variant.
    unsafe { Library::new(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_candidates_is_not_found() {
        let candidates: [&str; 0] = [];
        match open_first("empty", &candidates) {
            Err(BindError::LibraryNotFound { module, candidates }) => {
                assert_eq!(module, "empty");
                assert!(candidates.is_empty());
            }
            other => panic!("Expected LibraryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_candidates_are_all_reported() {
        let result = open_first(
            "missing",
            &["libgbind-missing-2.so", "libgbind-missing.so"],
        );
        match result {
            Err(BindError::LibraryNotFound { candidates, .. }) => {
                assert_eq!(
                    candidates,
                    vec!["libgbind-missing-2.so", "libgbind-missing.so"]
                );
            }
            other => panic!("Expected LibraryNotFound, got {:?}", other),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_opens_later_candidate_when_earlier_missing() {
        let library = open_first("math", &["libgbind-missing-2.so", "libm.so.6"])
            .expect("libm should be loadable");
        assert_eq!(library.name(), "libm.so.6");
        assert!(library.close().is_ok());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_debug_shows_name() {
        let library = open_first("math", &["libm.so.6"]).expect("libm should be loadable");
        let debug = format!("{:?}", library);
        assert!(debug.contains("libm.so.6"));
    }
}
