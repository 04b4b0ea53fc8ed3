//! Template store adapters.

mod bundled;
mod directory;

pub use bundled::{BundledTemplates, DEFAULT_TEMPLATE};
pub use directory::DirectoryTemplateStore;

use docforge_core::{application::ApplicationError, error::DocforgeError};

fn store_error(reason: impl Into<String>) -> DocforgeError {
    ApplicationError::StoreError {
        reason: reason.into(),
    }
    .into()
}
