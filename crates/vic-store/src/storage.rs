use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::models::StateKey;
use crate::store::StateStore;
use crate::{StoreError, StoreResult};

/// One pretty-printed JSON file per slot under `root`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn init(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    pub fn path_for(&self, key: StateKey) -> PathBuf {
        self.root.join(key.file_name())
    }

    /// Open `path` for overwrite. Sensitive files are owner-only before any
    /// bytes are written, including files left behind with wider modes.
    #[cfg_attr(not(unix), allow(unused_variables))]
    async fn open_for_write(path: &Path, sensitive: bool) -> StoreResult<fs::File> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        if sensitive {
            options.mode(0o600);
        }
        let file = options.open(path).await?;

        #[cfg(unix)]
        if sensitive {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600)).await?;
        }
        Ok(file)
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn read_raw(&self, key: StateKey) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    async fn write_raw(&self, key: StateKey, contents: String) -> StoreResult<()> {
        self.init().await?;
        let path = self.path_for(key);
        let mut file = Self::open_for_write(&path, key.is_sensitive()).await?;
        file.write_all(contents.as_bytes()).await?;
        file.flush().await?;
        debug!(key = key.as_str(), path = %path.display(), "saved state");
        Ok(())
    }

    async fn remove(&self, key: StateKey) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}
