//! Boundary source providers: explicit file, or on-disk cache backed by a download.

use anyhow::{bail, Context, Result};
use skybound::{BoundaryError, BoundarySource};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// IAU constellation boundaries, FK4 B1875 (CDS catalog VI/49).
pub const CDS_BOUNDARIES_URL: &str = "https://cdsarc.cds.unistra.fr/ftp/VI/49/constbnd.dat";
pub const CACHE_FILENAME: &str = "constbnd.dat";
/// Shared with the star-catalog loaders, so an existing download is reused.
pub const DEFAULT_CACHE_DIR: &str = "skyfield_data";
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads a local boundary file as-is.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BoundarySource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> Result<String, BoundaryError> {
        fs::read_to_string(&self.path)
            .map_err(|e| BoundaryError::source(format!("reading {}: {e}", self.path.display())))
    }
}

/// Serves `<cache_dir>/constbnd.dat`, downloading it first when missing.
pub struct CachedSource {
    cache_path: PathBuf,
    url: String,
    timeout: Duration,
    refresh: bool,
}

impl CachedSource {
    pub fn new(cache_dir: &Path, url: impl Into<String>) -> Self {
        Self {
            cache_path: cache_dir.join(CACHE_FILENAME),
            url: url.into(),
            timeout: HTTP_TIMEOUT,
            refresh: false,
        }
    }

    /// Ignore an existing cache file and download again.
    pub fn refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Path of a readable cache file, fetching it if necessary.
    pub fn ensure_cached(&self) -> Result<&Path> {
        if self.cache_path.exists() && !self.refresh {
            tracing::info!(path = %self.cache_path.display(), "using cached boundary data");
            return Ok(&self.cache_path);
        }
        tracing::info!(url = %self.url, "downloading boundaries");
        let body = self.download()?;
        if let Some(parent) = self.cache_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating cache dir {}", parent.display()))?;
            }
        }
        fs::write(&self.cache_path, &body)
            .with_context(|| format!("writing {}", self.cache_path.display()))?;
        tracing::info!(path = %self.cache_path.display(), bytes = body.len(), "saved boundary data");
        Ok(&self.cache_path)
    }

    fn download(&self) -> Result<Vec<u8>> {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .build()
            .into();
        let response = agent
            .get(&self.url)
            .call()
            .with_context(|| format!("fetching {}", self.url))?;
        if response.status() != 200 {
            bail!("fetching {}: HTTP status {}", self.url, response.status());
        }
        let text = response
            .into_body()
            .read_to_string()
            .with_context(|| format!("reading body of {}", self.url))?;
        Ok(text.into_bytes())
    }
}

impl BoundarySource for CachedSource {
    fn describe(&self) -> String {
        format!("{} (cache of {})", self.cache_path.display(), self.url)
    }

    fn read_text(&self) -> Result<String, BoundaryError> {
        let path = self
            .ensure_cached()
            .map_err(|e| BoundaryError::source(format!("{e:#}")))?;
        fs::read_to_string(path)
            .map_err(|e| BoundaryError::source(format!("reading {}: {e}", path.display())))
    }
}
