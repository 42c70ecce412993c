//! Name -> insets lookup with a populate-once cache.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use boxgroup_core::{DecorationError, Insets};

use crate::theme::Theme;

/// Insets used for any decoration the catalog cannot resolve.
pub const DEFAULT_DECORATION_INSETS: Insets = Insets::uniform(5);

/// Source of decoration frame geometry.
///
/// Unknown names never fail: implementations return a fixed default so
/// that layout stays deterministic with a missing asset.
pub trait DecorationCatalog {
    /// Frame thickness (left, right, top, bottom) for `name`.
    fn insets(&self, name: &str) -> Insets;
}

impl<T: DecorationCatalog + ?Sized> DecorationCatalog for &T {
    fn insets(&self, name: &str) -> Insets {
        (**self).insets(name)
    }
}

impl<T: DecorationCatalog + ?Sized> DecorationCatalog for Box<T> {
    fn insets(&self, name: &str) -> Insets {
        (**self).insets(name)
    }
}

impl<T: DecorationCatalog + ?Sized> DecorationCatalog for Rc<T> {
    fn insets(&self, name: &str) -> Insets {
        (**self).insets(name)
    }
}

impl<T: DecorationCatalog + ?Sized> DecorationCatalog for Arc<T> {
    fn insets(&self, name: &str) -> Insets {
        (**self).insets(name)
    }
}

/// Every decoration has the same insets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformCatalog(pub Insets);

impl Default for UniformCatalog {
    fn default() -> Self {
        UniformCatalog(DEFAULT_DECORATION_INSETS)
    }
}

impl DecorationCatalog for UniformCatalog {
    fn insets(&self, _name: &str) -> Insets {
        self.0
    }
}

/// Resolves decoration names against a theme.
///
/// A name is resolved at most once. Reads after population only take the
/// shared lock; a miss takes the exclusive lock and checks again before
/// resolving, so concurrent first lookups of the same name resolve it once.
#[derive(Debug)]
pub struct ThemeCatalog {
    theme: Theme,
    library: Option<String>,
    fallback: Insets,
    cache: RwLock<HashMap<String, Insets>>,
    resolutions: AtomicUsize,
}

impl ThemeCatalog {
    /// Search every decoration library of `theme`, in declaration order.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            library: None,
            fallback: DEFAULT_DECORATION_INSETS,
            cache: RwLock::new(HashMap::new()),
            resolutions: AtomicUsize::new(0),
        }
    }

    /// Restrict lookups to a single library of `theme`.
    pub fn with_library(theme: Theme, library: &str) -> Result<Self, DecorationError> {
        theme.library(library)?;
        Ok(Self {
            library: Some(library.to_string()),
            ..Self::new(theme)
        })
    }

    /// Insets returned for unknown names.
    pub fn with_fallback(mut self, fallback: Insets) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Number of cache misses resolved so far.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::Relaxed)
    }

    /// Names this catalog can resolve to real geometry.
    pub fn known(&self) -> Vec<&str> {
        self.theme
            .decoration_libraries()
            .filter(|(name, _)| self.searches(name))
            .flat_map(|(_, lib)| lib.sets.keys().map(String::as_str))
            .collect()
    }

    fn searches(&self, library: &str) -> bool {
        self.library.as_deref().map_or(true, |only| only == library)
    }

    fn resolve(&self, name: &str) -> Insets {
        let found = self
            .theme
            .decoration_libraries()
            .filter(|(library, _)| self.searches(library))
            .find(|(_, lib)| lib.has_set(name))
            .and_then(|(library, lib)| lib.insets().map(|insets| (library, insets)));

        match found {
            Some((library, insets)) => {
                tracing::debug!(decoration = name, library, ?insets, "resolved decoration");
                insets
            }
            None => {
                tracing::warn!(
                    decoration = name,
                    theme = %self.theme.name,
                    "unknown decoration, using default insets"
                );
                self.fallback
            }
        }
    }
}

impl DecorationCatalog for ThemeCatalog {
    fn insets(&self, name: &str) -> Insets {
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(insets) = cache.get(name) {
                return *insets;
            }
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(insets) = cache.get(name) {
            return *insets;
        }
        let insets = self.resolve(name);
        self.resolutions.fetch_add(1, Ordering::Relaxed);
        cache.insert(name.to_string(), insets);
        insets
    }
}
