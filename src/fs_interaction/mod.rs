mod errors;
pub use self::errors::*;
pub mod virtual_fs;


use std::path::{Path, PathBuf};

const RECEIPT_PREFIX: &str = "receipt_";
const RECEIPT_EXTENSION: &str = "pdf";

/// Access to the directory receipts are written to.
///
/// Every student name maps to exactly one file in this directory,
/// regenerating a receipt for the same name replaces that file.
pub struct FSInteraction<FS: virtual_fs::FS> {
    root_path: PathBuf,
    fs: FS,
}
pub type DefaultFSInteraction = FSInteraction<virtual_fs::WrapperFS>;

impl<FS: virtual_fs::FS> FSInteraction<FS> {
    /// Same as open_with_fs, but uses the default FS abstraction (OS native calls).
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_fs(path, FS::default())
    }

    /// Opens the receipt directory at the given path, creating it if it does not exist yet.
    pub fn open_with_fs(path: &Path, fs: FS) -> Result<Self> {
        fs.create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => FSInteractionError::NotADirectory {
                path: path.to_string_lossy().into_owned(),
            },
            _ => FSInteractionError::from(e),
        })?;

        Ok(Self {
            root_path: path.to_path_buf(),
            fs,
        })
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn receipt_path(&self, name: &str) -> PathBuf {
        self.root_path.join(receipt_file_name(name))
    }

    /// Writes (or replaces) the receipt file for the given student name.
    pub fn write_receipt(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.receipt_path(name);
        let replaces_existing = self.fs.exists(&path);
        self.fs.write_file(&path, content)?;
        log::info!(
            "{} receipt '{}' ({} bytes)",
            if replaces_existing { "Replaced" } else { "Wrote" },
            path.display(),
            content.len()
        );

        Ok(path)
    }

    pub fn read_receipt(&self, name: &str) -> Result<Vec<u8>> {
        Ok(self.fs.read_file(self.receipt_path(name))?)
    }

    /// Lists the paths of all receipt files currently present.
    pub fn list_receipts(&self) -> Result<Vec<PathBuf>> {
        let mut result: Vec<_> = self
            .fs
            .list_dir(&self.root_path)?
            .into_iter()
            .map(|entry| entry.path)
            .filter(|path| {
                let is_receipt_name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map_or(false, |name| name.starts_with(RECEIPT_PREFIX));
                let is_pdf = path
                    .extension()
                    .map_or(false, |extension| extension == RECEIPT_EXTENSION);

                is_receipt_name && is_pdf
            })
            .collect();
        result.sort();

        Ok(result)
    }
}

/// Deterministic file name of the receipt belonging to a student name.
/// Spaces (and path separators) are replaced by underscores.
pub fn receipt_file_name(name: &str) -> String {
    let escaped: String = name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();

    format!("{}{}.{}", RECEIPT_PREFIX, escaped, RECEIPT_EXTENSION)
}
