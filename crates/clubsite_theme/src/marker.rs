//! Root style marker
//!
//! Stylesheets key their dark rules off a class on the document root. The
//! marker is updated in the same call that changes the theme flag, so themed
//! content never renders against a stale marker.

use crate::theme::ColorScheme;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{PoisonError, RwLock};

/// Class added to the root element in dark mode
pub const DARK_CLASS: &str = "dark";

/// Attribute mirroring the active scheme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Receives the active scheme whenever it changes
pub trait StyleMarker: Send + Sync {
    fn apply(&self, scheme: ColorScheme);
}

/// Class list and attributes of the document root
#[derive(Debug, Default)]
pub struct RootClassList {
    classes: RwLock<BTreeSet<String>>,
    attributes: RwLock<BTreeMap<String, String>>,
}

impl RootClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing classes (e.g. from the page template)
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: RwLock::new(classes.into_iter().map(Into::into).collect()),
            attributes: RwLock::default(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Space-separated class attribute value
    pub fn class_attr(&self) -> String {
        let classes = self.classes.read().unwrap_or_else(PoisonError::into_inner);
        classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }

    /// Render the opening root tag
    pub fn to_html_tag(&self) -> String {
        let mut tag = String::from("<html");
        let class = self.class_attr();
        if !class.is_empty() {
            tag.push_str(&format!(" class=\"{class}\""));
        }
        let attributes = self.attributes.read().unwrap_or_else(PoisonError::into_inner);
        for (name, value) in attributes.iter() {
            tag.push_str(&format!(" {name}=\"{value}\""));
        }
        tag.push('>');
        tag
    }
}

impl StyleMarker for RootClassList {
    fn apply(&self, scheme: ColorScheme) {
        {
            let mut classes = self.classes.write().unwrap_or_else(PoisonError::into_inner);
            if scheme.is_dark() {
                classes.insert(DARK_CLASS.to_string());
            } else {
                classes.remove(DARK_CLASS);
            }
        }
        self.attributes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(THEME_ATTRIBUTE.to_string(), scheme.as_str().to_string());
    }
}
