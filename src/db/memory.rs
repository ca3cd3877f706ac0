use super::BlobStore;
use anyhow::Result;

/// Blob slot held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blob: Option<String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `blob` already stored.
    pub fn with_blob(blob: &str) -> Self {
        Self {
            blob: Some(blob.to_string()),
        }
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn set(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.blob = None;
        Ok(())
    }
}
