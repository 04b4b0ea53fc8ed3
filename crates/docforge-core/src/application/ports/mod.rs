//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `docforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: destination inspection and writes
//!   - `TemplateStore`: template lookup and traversal
//!   - `CommandExecutor`: blocking subprocesses
//!   - `Prompter`: interactive questions

pub mod output;

pub use output::{
    CommandExecutor, CommandStatus, Filesystem, Prompter, SelectItem, SelectPrompt, TemplateStore,
    TextPrompt,
};
