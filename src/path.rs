//! Resource locations and the byte streams they yield.
//!
//! Locating resources is the caller's business. The reader only needs a
//! `ResourcePath` that can open one stream per request and a name for
//! diagnostics.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use crate::output::display_path;

/// A readable resource stream.
///
/// `close` is called once after a successful parse. Its failure is logged,
/// never propagated. Streams dropped on error paths are released by `Drop`.
pub trait ResourceStream: BufRead {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ResourceStream for BufReader<File> {}
impl ResourceStream for Cursor<Vec<u8>> {}
impl ResourceStream for &[u8] {}

impl<S: ResourceStream + ?Sized> ResourceStream for Box<S> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Handle that yields one input stream per request.
pub trait ResourcePath {
    /// Name used in diagnostics.
    fn name(&self) -> String;

    /// Open a fresh stream over the resource contents.
    fn open(&self) -> io::Result<Box<dyn ResourceStream + '_>>;
}

/// A resource stored in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath {
    path: PathBuf,
}

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for FilePath {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl ResourcePath for FilePath {
    fn name(&self) -> String {
        display_path(&self.path)
    }

    fn open(&self) -> io::Result<Box<dyn ResourceStream + '_>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// A named resource held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPath {
    name: String,
    bytes: Vec<u8>,
}

impl MemoryPath {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl ResourcePath for MemoryPath {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn open(&self) -> io::Result<Box<dyn ResourceStream + '_>> {
        Ok(Box::new(self.bytes.as_slice()))
    }
}
