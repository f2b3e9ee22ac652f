use std::io;
use std::path::{Path, PathBuf};

/// Virtual abstraction layer above the actual FS implementation and API.
///
/// Two implementations exist:
/// 1) thin wrapper around actual FS API providing all functionality we require
/// 2) in-memory mock that allows testing receipt output without touching the disk
///
/// We only wrap/implement functions we actually require in our code.
pub trait FS: Clone {
    fn default() -> Self;

    fn create_dir_all<P: AsRef<Path>>(&self, path: P) -> io::Result<()>;
    fn list_dir<P: AsRef<Path>>(&self, path: P) -> io::Result<Vec<DirEntry>>;
    fn exists<P: AsRef<Path>>(&self, path: P) -> bool;

    /// Replaces the file at path with the given content.
    /// Readers either see the old or the new content, never a partial write.
    fn write_file<P: AsRef<Path>>(&self, path: P, content: &[u8]) -> io::Result<()>;
    fn read_file<P: AsRef<Path>>(&self, path: P) -> io::Result<Vec<u8>>;
}

/// Represents a single entry in a directory.
/// Has the bare minimum information it needs attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct DirEntry {
    pub path: PathBuf,
}

// Actual Implementations in Sub-Modules
mod wrapper_fs;
pub use self::wrapper_fs::WrapperFS;

mod in_memory_fs;
pub use self::in_memory_fs::InMemoryFS;
