use super::*;
use std::fs;
use std::io::Write;

#[derive(Clone)]
pub struct WrapperFS {}
impl FS for WrapperFS {
    fn default() -> Self {
        Self {}
    }

    fn create_dir_all<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::DirBuilder::new().recursive(true).create(&path)
    }
    fn list_dir<P: AsRef<Path>>(&self, path: P) -> io::Result<Vec<DirEntry>> {
        let result: io::Result<Vec<_>> = fs::read_dir(path)?
            .map(|entry| entry.map(|entry| DirEntry { path: entry.path() }))
            .collect();

        result
    }
    fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().exists()
    }

    fn write_file<P: AsRef<Path>>(&self, path: P, content: &[u8]) -> io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Stage the content next to the target, so the final rename stays on one file system.
        let mut staged = tempfile::NamedTempFile::new_in(parent)?;
        staged.write_all(content)?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
    fn read_file<P: AsRef<Path>>(&self, path: P) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}
