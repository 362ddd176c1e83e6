//! Utility aggregation
//!
//! Every utility module declares a [`UtilityModule`] listing the names it
//! exports. The functions themselves are re-exported here so one import
//! reaches all of them, and [`load_all`] merges the export lists into a
//! [`Namespace`] for lookup by name.
//!
//! ```
//! use curvecast::utils::{self, PlotHistoryFn};
//!
//! let namespace = utils::namespace().unwrap();
//! assert!(namespace.get::<PlotHistoryFn>("plot_history").is_some());
//! ```

pub mod plot_history;
pub mod summary;

pub use plot_history::{plot_history, PlotHistoryFn};
pub use summary::{summarize_history, SummarizeHistoryFn};

use log::{debug, info};
use std::any::Any;
use std::collections::BTreeMap;

use crate::error::{PlotError, Result};

/// A public name and the item bound to it
#[derive(Clone, Copy)]
pub struct Export {
    pub name: &'static str,
    pub item: &'static (dyn Any + Send + Sync),
}

impl Export {
    pub const fn new(name: &'static str, item: &'static (dyn Any + Send + Sync)) -> Self {
        Export { name, item }
    }
}

impl std::fmt::Debug for Export {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Export").field("name", &self.name).finish()
    }
}

/// A utility module and its public-export list
#[derive(Debug, Clone, Copy)]
pub struct UtilityModule {
    pub name: &'static str,
    pub exports: &'static [Export],
}

/// Modules shipped with the crate
pub static MODULES: &[&UtilityModule] = &[&plot_history::MODULE, &summary::MODULE];

/// Names merged from every loaded module
#[derive(Debug, Default)]
pub struct Namespace {
    entries: BTreeMap<&'static str, (&'static str, Export)>,
}

impl Namespace {
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Look up an export, `None` when absent or of another type
    pub fn get<T: Any>(&self, name: &str) -> Option<&'static T> {
        self.entries
            .get(name)
            .and_then(|(_, export)| export.item.downcast_ref::<T>())
    }

    /// Module that declared `name`
    pub fn module_of(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).map(|(module, _)| *module)
    }

    /// Exported names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn merge(&mut self, module: &UtilityModule) -> Result<()> {
        if module.name.is_empty() {
            return Err(PlotError::module_load("<unnamed>", "module has no name"));
        }
        if module.exports.is_empty() {
            return Err(PlotError::module_load(
                module.name,
                "module declares no public exports",
            ));
        }
        for export in module.exports {
            if let Some((owner, _)) = self.entries.get(export.name) {
                return Err(PlotError::ModuleLoad {
                    module: module.name.to_string(),
                    reason: format!("'{}' is already exported by '{}'", export.name, owner),
                });
            }
            debug!("binding '{}' from '{}'", export.name, module.name);
            self.entries.insert(export.name, (module.name, *export));
        }
        Ok(())
    }
}

/// Merge the export lists of `modules` into one namespace.
///
/// Modules are visited in name order. The first module that fails to load
/// aborts the scan.
pub fn load_all(modules: &[&UtilityModule]) -> Result<Namespace> {
    let mut ordered = modules.to_vec();
    ordered.sort_by_key(|m| m.name);

    let mut namespace = Namespace::default();
    for module in ordered {
        namespace.merge(module)?;
    }
    info!(
        "loaded {} utilities from {} modules",
        namespace.len(),
        modules.len()
    );
    Ok(namespace)
}

/// Namespace of the crate's own utilities
pub fn namespace() -> Result<Namespace> {
    load_all(MODULES)
}
