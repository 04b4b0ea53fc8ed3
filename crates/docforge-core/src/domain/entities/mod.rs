pub mod destination;
pub mod request;
pub mod template;

pub use destination::{
    BENIGN_ENTRIES, ProjectPath, ResolvedDestination, is_benign_entry, resolve_project_path,
};
pub use request::{ProjectRequest, RawInput};
pub use template::{EntryKind, TemplateDescriptor, TemplateEntry};
