use super::*;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// In-memory FS used in tests.
/// Clones share the same content, mirroring how clones of the wrapper FS see the same disk.
#[derive(Clone)]
pub struct InMemoryFS {
    // A FS is not mutable to the outside, all its actions manifest as side effects
    // (similar to e.g. a database connection being non mut).
    state: Rc<RefCell<InMemoryState>>,
}

#[derive(Default)]
struct InMemoryState {
    dirs: HashSet<PathBuf>,
    files: HashMap<PathBuf, Vec<u8>>,
}

impl InMemoryFS {
    pub fn new() -> InMemoryFS {
        let mut state = InMemoryState::default();
        state.dirs.insert(PathBuf::from(""));

        InMemoryFS {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn file_count(&self) -> usize {
        self.state.borrow().files.len()
    }

    fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
        let path = path.as_ref();
        if path == Path::new(".") {
            PathBuf::from("")
        } else {
            path.strip_prefix("./").unwrap_or(path).to_path_buf()
        }
    }

    fn parent_exists(&self, path: &Path) -> bool {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        self.state.borrow().dirs.contains(parent)
    }
}

impl FS for InMemoryFS {
    fn default() -> Self {
        Self::new()
    }

    fn create_dir_all<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = Self::normalize(path);
        if self.state.borrow().files.contains_key(&path) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        if path
            .ancestors()
            .skip(1)
            .any(|ancestor| self.state.borrow().files.contains_key(ancestor))
        {
            return Err(io::Error::new(io::ErrorKind::Other, "Not a directory"));
        }

        let mut state = self.state.borrow_mut();
        for ancestor in path.ancestors() {
            state.dirs.insert(ancestor.to_path_buf());
        }

        Ok(())
    }
    fn list_dir<P: AsRef<Path>>(&self, path: P) -> io::Result<Vec<DirEntry>> {
        let path = Self::normalize(path);
        let state = self.state.borrow();
        if !state.dirs.contains(&path) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }

        let mut entries: Vec<_> = state
            .dirs
            .iter()
            .filter(|dir| dir.as_path() != path.as_path())
            .chain(state.files.keys())
            .filter(|item| item.parent() == Some(path.as_path()))
            .map(|item| DirEntry { path: item.clone() })
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(entries)
    }
    fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = Self::normalize(path);
        let state = self.state.borrow();

        state.dirs.contains(&path) || state.files.contains_key(&path)
    }

    fn write_file<P: AsRef<Path>>(&self, path: P, content: &[u8]) -> io::Result<()> {
        let path = Self::normalize(path);
        if !self.parent_exists(&path) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        if self.state.borrow().dirs.contains(&path) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }

        self.state
            .borrow_mut()
            .files
            .insert(path, content.to_vec());

        Ok(())
    }
    fn read_file<P: AsRef<Path>>(&self, path: P) -> io::Result<Vec<u8>> {
        let path = Self::normalize(path);

        self.state
            .borrow()
            .files
            .get(&path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}
