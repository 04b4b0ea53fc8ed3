//! Manifest Patcher - names the generated project.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{MANIFEST_FILE, Manifest, ResolvedDestination},
    error::DocforgeResult,
};

/// Templates ship their ignore file without the leading dot, since package
/// registries drop `.gitignore` from published tarballs.
pub const GITIGNORE_SOURCE: &str = "gitignore";

const GITIGNORE_TARGET: &str = ".gitignore";

/// Rewrites `package.json`'s `name` and restores `.gitignore`.
pub struct ManifestPatcher<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ManifestPatcher<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Set the manifest's `name` to the destination's base name and rename
    /// `gitignore` if the template shipped one.
    #[instrument(skip_all, fields(name = %destination.base_name))]
    pub fn patch(&self, destination: &ResolvedDestination) -> DocforgeResult<Manifest> {
        let manifest_path = destination.absolute_path.join(MANIFEST_FILE);
        if !self.filesystem.exists(&manifest_path) {
            return Err(ApplicationError::ManifestMissing {
                path: manifest_path,
            }
            .into());
        }

        let text = self.filesystem.read_to_string(&manifest_path)?;
        let mut manifest = Manifest::parse(&text)?;
        debug!(previous = %manifest.name(), "Renaming manifest");
        manifest.set_name(destination.base_name.as_str());
        self.filesystem
            .write_file(&manifest_path, manifest.to_pretty_string().as_bytes())?;

        let ignore_source = destination.absolute_path.join(GITIGNORE_SOURCE);
        if self.filesystem.exists(&ignore_source) {
            self.filesystem
                .rename(&ignore_source, &destination.absolute_path.join(GITIGNORE_TARGET))?;
            debug!("Renamed gitignore");
        }

        info!("Manifest patched");
        Ok(manifest)
    }
}
