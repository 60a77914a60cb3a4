//! Dynamic loading of the native library
//!
//! The same routines that `Linked` reaches through the static archive can be
//! resolved from a shared library at runtime (for example a build of
//! `native/calc.c` with `-shared`). Resolution uses platform naming
//! conventions and a list of search paths; every symbol is looked up when the
//! library is opened, so a missing routine is reported before the first call.

use crate::backend::Arithmetic;
use crate::error::{CalcError, CalcResult};
use crate::operation::Operation;
use libloading::Library;
use std::os::raw::{c_int, c_longlong};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Library loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Library file not found in search paths
    #[error("Library not found: {0}")]
    LibraryNotFound(String),

    /// Symbol not found in library
    #[error("Symbol '{symbol}' not found in library '{library}'")]
    SymbolNotFound { library: String, symbol: String },

    /// The dynamic loader rejected the file
    #[error("Failed to load library: {0}")]
    LoadFailed(String),
}

/// Resolves library names to files on disk
#[derive(Debug, Clone)]
pub struct LibraryLoader {
    search_paths: Vec<PathBuf>,
}

impl LibraryLoader {
    /// Create a loader with the platform default search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::default_search_paths(),
        }
    }

    /// Current directory first, then the usual system library directories
    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd);
        }

        #[cfg(target_os = "linux")]
        {
            paths.push(PathBuf::from("/usr/local/lib"));
            paths.push(PathBuf::from("/usr/lib"));
            paths.push(PathBuf::from("/lib"));
            if cfg!(target_pointer_width = "64") {
                paths.push(PathBuf::from("/usr/lib64"));
                paths.push(PathBuf::from("/lib64"));
            }
        }

        #[cfg(target_os = "macos")]
        {
            paths.push(PathBuf::from("/usr/local/lib"));
            paths.push(PathBuf::from("/opt/homebrew/lib"));
            paths.push(PathBuf::from("/usr/lib"));
        }

        #[cfg(target_os = "windows")]
        {
            if let Ok(system_root) = std::env::var("SystemRoot") {
                paths.push(PathBuf::from(format!("{}\\System32", system_root)));
            }
        }

        paths
    }

    /// Add a search path ahead of the existing ones
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.insert(0, path.into());
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Resolve a library name or path to an existing file
    ///
    /// A name containing a path separator is taken as a path. A bare name is
    /// tried as `lib{name}.{ext}` and `{name}.{ext}` in every search path.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = Path::new(name);
        if path.components().count() > 1 || path.is_absolute() {
            return path.is_file().then(|| path.to_path_buf());
        }

        let extensions: &[&str] = if cfg!(target_os = "windows") {
            &["dll"]
        } else if cfg!(target_os = "macos") {
            &["dylib", "so"]
        } else {
            &["so"]
        };
        let prefixes: &[&str] = if cfg!(target_os = "windows") {
            &["", "lib"]
        } else {
            &["lib", ""]
        };

        for dir in &self.search_paths {
            for prefix in prefixes {
                for ext in extensions {
                    let candidate = dir.join(format!("{}{}.{}", prefix, name, ext));
                    if candidate.is_file() {
                        return Some(candidate);
                    }
                }
            }
        }
        None
    }

    /// Open a library and resolve every arithmetic routine from it
    pub fn open(&self, name: &str) -> Result<Dynamic, LoadError> {
        let path = self
            .resolve(name)
            .ok_or_else(|| LoadError::LibraryNotFound(name.to_string()))?;
        Dynamic::open(&path)
    }
}

impl Default for LibraryLoader {
    fn default() -> Self {
        Self::new()
    }
}

type IntUnary = unsafe extern "C" fn(c_int) -> c_int;
type IntBinary = unsafe extern "C" fn(c_int, c_int) -> c_int;
type IntChecked = unsafe extern "C" fn(c_int, c_int, *mut c_int) -> c_int;
type LongBinary = unsafe extern "C" fn(c_longlong, c_longlong) -> c_longlong;

/// Arithmetic routines resolved from a shared library
///
/// The function pointers stay valid for as long as `_library` is alive, and
/// they are dropped with it.
pub struct Dynamic {
    path: PathBuf,
    add: IntBinary,
    subtract: IntBinary,
    multiply: IntBinary,
    divide: IntBinary,
    add_with_overflow_check: IntChecked,
    add_long: LongBinary,
    abs_value: IntUnary,
    max_value: IntBinary,
    min_value: IntBinary,
    _library: Library,
}

impl Dynamic {
    /// Open the library at `path` and resolve all routines
    ///
    /// Loading runs the library's initialisers; only open trusted files. The
    /// exported symbols must have the signatures declared in `calc.h`.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let library = unsafe { Library::new(path) }.map_err(|e| {
            warn!(path = %path.display(), error = %e, "dynamic load failed");
            LoadError::LoadFailed(e.to_string())
        })?;

        unsafe {
            let dynamic = Self {
                path: path.to_path_buf(),
                add: symbol(&library, path, Operation::Add)?,
                subtract: symbol(&library, path, Operation::Subtract)?,
                multiply: symbol(&library, path, Operation::Multiply)?,
                divide: symbol(&library, path, Operation::Divide)?,
                add_with_overflow_check: symbol(&library, path, Operation::AddWithOverflowCheck)?,
                add_long: symbol(&library, path, Operation::AddLong)?,
                abs_value: symbol(&library, path, Operation::AbsValue)?,
                max_value: symbol(&library, path, Operation::MaxValue)?,
                min_value: symbol(&library, path, Operation::MinValue)?,
                _library: library,
            };
            info!(path = %path.display(), "loaded native arithmetic library");
            Ok(dynamic)
        }
    }

    /// Path the library was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Copy a function pointer out of the library
///
/// # Safety
///
/// `T` must match the exported symbol's real signature.
unsafe fn symbol<T: Copy>(library: &Library, path: &Path, op: Operation) -> Result<T, LoadError> {
    library
        .get::<T>(op.symbol().as_bytes())
        .map(|sym| *sym)
        .map_err(|_| LoadError::SymbolNotFound {
            library: path.display().to_string(),
            symbol: op.symbol().to_string(),
        })
}

impl std::fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dynamic").field("path", &self.path).finish()
    }
}

impl Arithmetic for Dynamic {
    fn name(&self) -> &'static str {
        "dynamic"
    }

    fn add(&self, a: i32, b: i32) -> i32 {
        let result = unsafe { (self.add)(a as c_int, b as c_int) } as i32;
        debug!(op = "add", a, b, result, "dynamic call");
        result
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        let result = unsafe { (self.subtract)(a as c_int, b as c_int) } as i32;
        debug!(op = "subtract", a, b, result, "dynamic call");
        result
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        let result = unsafe { (self.multiply)(a as c_int, b as c_int) } as i32;
        debug!(op = "multiply", a, b, result, "dynamic call");
        result
    }

    fn divide(&self, a: i32, b: i32) -> CalcResult<i32> {
        if b == 0 {
            warn!(op = "divide", a, "division by zero");
            return Err(CalcError::DivisionByZero);
        }
        let result = unsafe { (self.divide)(a as c_int, b as c_int) } as i32;
        debug!(op = "divide", a, b, result, "dynamic call");
        Ok(result)
    }

    fn add_with_overflow_check(&self, a: i32, b: i32) -> CalcResult<i32> {
        let mut has_overflow: c_int = 0;
        let result =
            unsafe { (self.add_with_overflow_check)(a as c_int, b as c_int, &mut has_overflow) };
        if has_overflow != 0 {
            warn!(op = "add_with_overflow_check", a, b, "integer overflow");
            return Err(CalcError::Overflow { a, b });
        }
        debug!(op = "add_with_overflow_check", a, b, result, "dynamic call");
        Ok(result as i32)
    }

    fn add_long(&self, a: i64, b: i64) -> i64 {
        let result = unsafe { (self.add_long)(a as c_longlong, b as c_longlong) } as i64;
        debug!(op = "add_long", a, b, result, "dynamic call");
        result
    }

    fn abs_value(&self, a: i32) -> i32 {
        let result = unsafe { (self.abs_value)(a as c_int) } as i32;
        debug!(op = "abs_value", a, result, "dynamic call");
        result
    }

    fn max_value(&self, a: i32, b: i32) -> i32 {
        let result = unsafe { (self.max_value)(a as c_int, b as c_int) } as i32;
        debug!(op = "max_value", a, b, result, "dynamic call");
        result
    }

    fn min_value(&self, a: i32, b: i32) -> i32 {
        let result = unsafe { (self.min_value)(a as c_int, b as c_int) } as i32;
        debug!(op = "min_value", a, b, result, "dynamic call");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_search_paths_start_with_cwd() {
        let loader = LibraryLoader::new();
        assert!(!loader.search_paths().is_empty());
        if let Ok(cwd) = std::env::current_dir() {
            assert_eq!(loader.search_paths()[0], cwd);
        }
    }

    #[test]
    fn test_add_custom_search_path() {
        let mut loader = LibraryLoader::new();
        loader.add_search_path("/custom/path");
        assert_eq!(loader.search_paths()[0], PathBuf::from("/custom/path"));
    }

    #[test]
    fn test_library_not_found() {
        let loader = LibraryLoader::new();
        let result = loader.open("nonexistent_library_xyz");
        assert!(matches!(result, Err(LoadError::LibraryNotFound(_))));
    }

    #[test]
    fn test_resolve_uses_platform_naming() {
        let dir = TempDir::new().unwrap();
        let file = if cfg!(target_os = "windows") {
            "calcfake.dll"
        } else {
            "libcalcfake.so"
        };
        fs::write(dir.path().join(file), b"").unwrap();

        let mut loader = LibraryLoader::new();
        loader.add_search_path(dir.path());
        assert_eq!(loader.resolve("calcfake"), Some(dir.path().join(file)));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.bin");
        fs::write(&path, b"").unwrap();

        let loader = LibraryLoader::new();
        let name = path.to_str().unwrap();
        assert_eq!(loader.resolve(name), Some(path.clone()));
        assert_eq!(loader.resolve(&format!("{}.missing", name)), None);
    }

    #[test]
    fn test_open_rejects_non_library_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not_a_library.so");
        fs::write(&path, b"definitely not an object file").unwrap();

        let result = Dynamic::open(&path);
        assert!(matches!(result, Err(LoadError::LoadFailed(_))));
    }
}
