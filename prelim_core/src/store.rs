//! # Project Persistence
//!
//! File-backed persistence for [`Project`] snapshots with safety features:
//! - **Atomic saves**: write to .tmp, sync, rename to prevent corruption
//! - **File locking**: prevent concurrent edits on shared drives
//! - **Version validation**: ensure schema compatibility on load
//!
//! Two surfaces are provided:
//! - [`save_project`]/[`load_project`] for single `.plm` files (JSON)
//! - [`ProjectStore`], a CRUD store keeping many projects in one JSON array
//!   file, the shape used by the project browser
//!
//! ## Example
//!
//! ```rust,no_run
//! use prelim_core::project::{Project, ProjectData};
//! use prelim_core::store::{save_project, load_project, FileLock};
//! use std::path::Path;
//!
//! let project = Project::new("Residential block", ProjectData::default());
//! let path = Path::new("block.plm");
//!
//! // Acquire lock before saving
//! let lock = FileLock::acquire(path, "engineer@company.com")?;
//! save_project(&project, path)?;
//! drop(lock); // releases lock
//! # Ok::<(), prelim_core::errors::DesignError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DesignError, DesignResult};
use crate::project::{Project, ProjectData, SCHEMA_VERSION};

/// Lock file metadata stored in .plm.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

/// Get the hostname of the current machine
fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Uses both:
/// 1. OS-level file locking (via fs2) for process safety
/// 2. .lock file with metadata for user visibility
pub struct FileLock {
    /// Path to the locked file
    target_path: PathBuf,
    /// Path to the lock file
    lock_path: PathBuf,
    /// The underlying file handle (keeps OS lock)
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a project or store file.
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - Lock acquired successfully
    /// * `Err(DesignError::FileLocked)` - Another process holds the lock
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> DesignResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        // Check if lock file exists and contains a live lock
        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !is_lock_stale(&existing) {
                    return Err(DesignError::file_locked(
                        path.display().to_string(),
                        format!("{} ({})", existing.user_id, existing.machine),
                        existing.locked_at.to_rfc3339(),
                    ));
                }
                // Lock is stale, we can take it over
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                DesignError::file_error(
                    "create lock",
                    lock_path.display().to_string(),
                    e.to_string(),
                )
            })?;

        // Try to acquire exclusive OS-level lock (non-blocking)
        lock_file.try_lock_exclusive().map_err(|_| {
            DesignError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json = serde_json::to_string_pretty(&info)
            .map_err(|e| DesignError::SerializationError {
                reason: e.to_string(),
            })?;

        lock_file.write_all(lock_json.as_bytes()).map_err(|e| {
            DesignError::file_error("write lock", lock_path.display().to_string(), e.to_string())
        })?;

        lock_file.sync_all().map_err(|e| {
            DesignError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            target_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check if a file is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if locked, `None` if available.
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        if lock_path.exists() {
            if let Ok(info) = read_lock_info(&lock_path) {
                if !is_lock_stale(&info) {
                    return Some(info);
                }
            }
        }
        None
    }

    /// Get the path to the locked file
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Remove the lock file
        let _ = fs::remove_file(&self.lock_path);
        // OS lock is released when _lock_file is dropped
    }
}

/// Get the lock file path for a target file
fn lock_path_for(path: &Path) -> PathBuf {
    let mut lock_path = path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

/// Read lock info from a lock file
fn read_lock_info(lock_path: &Path) -> DesignResult<LockInfo> {
    let contents = read_to_string(lock_path, "read lock")?;
    serde_json::from_str(&contents).map_err(|e| DesignError::SerializationError {
        reason: e.to_string(),
    })
}

/// Check if a lock is stale (the process that created it is no longer
/// running, or the lock is older than a day)
fn is_lock_stale(info: &LockInfo) -> bool {
    if let Some(our_machine) = hostname() {
        if info.machine == our_machine {
            #[cfg(unix)]
            {
                if fs::metadata(format!("/proc/{}", info.pid)).is_err() {
                    return true;
                }
            }
            #[cfg(windows)]
            {
                use std::process::Command;
                let output = Command::new("tasklist")
                    .args(["/FI", &format!("PID eq {}", info.pid), "/NH"])
                    .output();
                if let Ok(output) = output {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    if stdout.contains("No tasks") || !stdout.contains(&info.pid.to_string()) {
                        return true;
                    }
                }
            }
        }
    }

    let age = Utc::now() - info.locked_at;
    age.num_hours() > 24
}

fn read_to_string(path: &Path, operation: &str) -> DesignResult<String> {
    let mut file = File::open(path)
        .map_err(|e| DesignError::file_error(operation, path.display().to_string(), e.to_string()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| DesignError::file_error(operation, path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Write JSON to `path` atomically: temp file, fsync, rename.
fn write_atomic(path: &Path, json: &str) -> DesignResult<()> {
    let tmp_path = match path.extension() {
        Some(ext) => path.with_extension(format!("{}.tmp", ext.to_string_lossy())),
        None => path.with_extension("tmp"),
    };

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        DesignError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        DesignError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.sync_all().map_err(|e| {
        DesignError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        DesignError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Save a single project to a `.plm` file with atomic write semantics.
pub fn save_project(project: &Project, path: &Path) -> DesignResult<()> {
    let json = serde_json::to_string_pretty(project)
        .map_err(|e| DesignError::SerializationError {
            reason: e.to_string(),
        })?;
    write_atomic(path, &json)
}

/// Load a single project from a `.plm` file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(DesignError::VersionMismatch)` - File version is incompatible
/// * `Err(DesignError::SerializationError)` - Invalid JSON
/// * `Err(DesignError::FileError)` - I/O error
pub fn load_project(path: &Path) -> DesignResult<Project> {
    let contents = read_to_string(path, "open")?;
    let project: Project =
        serde_json::from_str(&contents).map_err(|e| DesignError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;
    validate_version(&project.meta.version)?;
    Ok(project)
}

/// Load a project, returning whether it's read-only due to a lock.
pub fn load_project_with_lock_check(path: &Path) -> DesignResult<(Project, Option<LockInfo>)> {
    let project = load_project(path)?;
    let lock_info = FileLock::check(path);
    Ok((project, lock_info))
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> DesignResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let mismatch = || DesignError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor than ours is unreadable
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

/// File-backed CRUD store keeping all projects in one JSON array file.
///
/// The file is created on first use; every mutation rewrites it atomically.
///
/// ## Example
///
/// ```rust,no_run
/// use prelim_core::project::ProjectData;
/// use prelim_core::store::ProjectStore;
///
/// let store = ProjectStore::new("projects.json");
/// let created = store.create("Residential block", ProjectData::default())?;
/// let loaded = store.get(created.id)?;
/// assert_eq!(loaded.meta.name, "Residential block");
/// # Ok::<(), prelim_core::errors::DesignError>(())
/// ```
pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    /// Open a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProjectStore { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List all stored projects.
    pub fn list(&self) -> DesignResult<Vec<Project>> {
        self.read_all()
    }

    /// Create and persist a new project wrapping `data`.
    pub fn create(&self, name: impl Into<String>, data: ProjectData) -> DesignResult<Project> {
        data.validate()?;
        let project = Project::new(name, data);
        let mut all = self.read_all()?;
        all.push(project.clone());
        self.write_all(&all)?;
        Ok(project)
    }

    /// Fetch a project by id.
    pub fn get(&self, id: Uuid) -> DesignResult<Project> {
        self.read_all()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DesignError::project_not_found(id.to_string()))
    }

    /// Replace the data snapshot of a stored project, refreshing its
    /// modified timestamp.
    pub fn update(&self, id: Uuid, data: ProjectData) -> DesignResult<Project> {
        data.validate()?;
        let mut all = self.read_all()?;
        let project = all
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DesignError::project_not_found(id.to_string()))?;
        project.data = data;
        project.touch();
        let updated = project.clone();
        self.write_all(&all)?;
        Ok(updated)
    }

    /// Delete a project by id, returning the removed record.
    pub fn delete(&self, id: Uuid) -> DesignResult<Project> {
        let mut all = self.read_all()?;
        let idx = all
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DesignError::project_not_found(id.to_string()))?;
        let removed = all.remove(idx);
        self.write_all(&all)?;
        Ok(removed)
    }

    fn read_all(&self) -> DesignResult<Vec<Project>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = read_to_string(&self.path, "read store")?;
        serde_json::from_str(&contents).map_err(|e| DesignError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", self.path.display(), e),
        })
    }

    fn write_all(&self, projects: &[Project]) -> DesignResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    DesignError::file_error(
                        "create store dir",
                        parent.display().to_string(),
                        e.to_string(),
                    )
                })?;
            }
        }
        let json = serde_json::to_string_pretty(projects)
            .map_err(|e| DesignError::SerializationError {
                reason: e.to_string(),
            })?;
        write_atomic(&self.path, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("prelim_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_lock_path_generation() {
        assert_eq!(
            lock_path_for(Path::new("/path/to/project.plm")),
            Path::new("/path/to/project.plm.lock")
        );
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("test@example.com");
        assert_eq!(info.user_id, "test@example.com");
        assert!(info.pid > 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_dir().join(format!("prelim_test_roundtrip_{}.plm", std::process::id()));

        let project = Project::new("Roundtrip", ProjectData::default());
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded, project);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_dir().join(format!("prelim_test_version_{}.plm", std::process::id()));

        let mut project = Project::new("Future", ProjectData::default());
        project.meta.version = "0.99.0".to_string();
        save_project(&project, &path).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_validate_version_rules() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.0.1").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_store_crud_cycle() {
        let path = temp_path("crud");
        let _ = fs::remove_file(&path);
        let store = ProjectStore::new(&path);

        assert!(store.list().unwrap().is_empty());

        let created = store.create("First", ProjectData::default()).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, created);

        let mut data = ProjectData::default();
        data.building.floors = 8;
        let updated = store.update(created.id, data).unwrap();
        assert_eq!(updated.data.building.floors, 8);
        assert!(updated.meta.modified >= created.meta.modified);

        let removed = store.delete(created.id).unwrap();
        assert_eq!(removed.id, created.id);
        assert!(store.list().unwrap().is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_store_missing_id_errors() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);
        let store = ProjectStore::new(&path);

        let err = store.get(Uuid::new_v4()).unwrap_err();
        assert_eq!(err.error_code(), "PROJECT_NOT_FOUND");

        let err = store.update(Uuid::new_v4(), ProjectData::default()).unwrap_err();
        assert_eq!(err.error_code(), "PROJECT_NOT_FOUND");

        let err = store.delete(Uuid::new_v4()).unwrap_err();
        assert_eq!(err.error_code(), "PROJECT_NOT_FOUND");
    }

    #[test]
    fn test_store_rejects_invalid_data() {
        let path = temp_path("invalid");
        let _ = fs::remove_file(&path);
        let store = ProjectStore::new(&path);

        let mut data = ProjectData::default();
        data.building.floors = 0;
        assert!(store.create("Bad", data).is_err());
        assert!(store.list().unwrap().is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_exclusion() {
        let path = temp_path("lock");
        let _ = fs::remove_file(&path);

        let lock = FileLock::acquire(&path, "first@user").unwrap();
        assert!(FileLock::check(&path).is_some());

        // A second acquire is refused by the live lock file
        match FileLock::acquire(&path, "second@user") {
            Err(e) => assert!(e.is_recoverable()),
            Ok(_) => panic!("expected lock to be refused"),
        }

        drop(lock);
        assert!(FileLock::check(&path).is_none());

        let lock = FileLock::acquire(&path, "third@user").unwrap();
        assert_eq!(lock.info.user_id, "third@user");
        drop(lock);
    }
}
