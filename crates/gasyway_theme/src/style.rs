//! Document style-variable surface
//!
//! The surface is the namespace of `--name: value` custom properties that
//! every visual component reads. [`StyleTarget`] is the seam the applier
//! writes through; [`DocumentStyle`] is the in-process implementation, with a
//! global instance standing in for the document root.

use crate::error::{Result, StyleError};
use indexmap::IndexMap;
use std::sync::{OnceLock, RwLock};

/// Global document style instance
static DOCUMENT_STYLE: OnceLock<DocumentStyle> = OnceLock::new();

/// Something that holds named style variables
pub trait StyleTarget: Send + Sync {
    /// Write a single variable, replacing any previous value.
    fn set_property(&self, name: &str, value: &str) -> Result<()>;

    /// Read a variable back. `Ok(None)` means the variable was never written.
    fn get_property(&self, name: &str) -> Result<Option<String>>;
}

/// In-memory, insertion-ordered style variable namespace
#[derive(Debug, Default)]
pub struct DocumentStyle {
    vars: RwLock<IndexMap<String, String>>,
}

impl DocumentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide document style (created empty on first use)
    pub fn global() -> &'static DocumentStyle {
        DOCUMENT_STYLE.get_or_init(DocumentStyle::new)
    }

    /// Copy of every variable currently set, in first-write order
    pub fn snapshot(&self) -> Result<IndexMap<String, String>> {
        let vars = self
            .vars
            .read()
            .map_err(|e| StyleError::Poisoned(e.to_string()))?;
        Ok(vars.clone())
    }

    pub fn len(&self) -> usize {
        self.vars.read().map(|vars| vars.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every variable
    pub fn clear(&self) -> Result<()> {
        self.vars
            .write()
            .map_err(|e| StyleError::Poisoned(e.to_string()))?
            .clear();
        Ok(())
    }

    /// Render the namespace as a `:root` rule
    pub fn to_css(&self) -> Result<String> {
        Ok(render_root_rule(self.snapshot()?.iter()))
    }
}

impl StyleTarget for DocumentStyle {
    fn set_property(&self, name: &str, value: &str) -> Result<()> {
        let mut vars = self
            .vars
            .write()
            .map_err(|e| StyleError::Poisoned(e.to_string()))?;
        vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn get_property(&self, name: &str) -> Result<Option<String>> {
        let vars = self
            .vars
            .read()
            .map_err(|e| StyleError::Poisoned(e.to_string()))?;
        Ok(vars.get(name).cloned())
    }
}

/// Render `(name, value)` pairs as a `:root { ... }` block
pub(crate) fn render_root_rule<'a, I>(vars: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut css = String::from(":root {\n");
    for (name, value) in vars {
        css.push_str("  ");
        css.push_str(name);
        css.push_str(": ");
        css.push_str(value);
        css.push_str(";\n");
    }
    css.push_str("}\n");
    css
}
