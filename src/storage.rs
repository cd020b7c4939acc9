use crate::study::Study;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge une étude depuis un support.
    fn load(&self) -> anyhow::Result<Study>;
    /// Sauvegarde de manière atomique.
    fn save(&self, study: &Study) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Study> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let study: Study = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        study.validate()?;
        #[cfg(feature = "logging")]
        tracing::debug!(path = %self.path.display(), rotations = study.rotations.len(), "study loaded");
        Ok(study)
    }

    fn save(&self, study: &Study) -> anyhow::Result<()> {
        study.validate()?;
        let json = serde_json::to_vec_pretty(study)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        #[cfg(feature = "logging")]
        tracing::debug!(path = %self.path.display(), "study saved");
        Ok(())
    }
}
