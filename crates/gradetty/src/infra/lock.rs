use std::fs::{self, File, OpenOptions, TryLockError};
use std::io::{self, Read, Seek, Write};
use std::path::Path;

/// Failure to become the single running gradetty instance.
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("Another gradetty instance is already running (PID: {pid})")]
    AlreadyRunning { pid: String },
    #[error("Failed to acquire instance lock: {0}")]
    Io(#[from] io::Error),
}

/// Acquires the exclusive single-instance lock at `path`.
///
/// The returned handle must stay alive for the whole process; the OS drops
/// the lock when the process exits or crashes, so stale lock files never
/// block a restart.
///
/// # Errors
/// Returns [`LockError::AlreadyRunning`] when another instance holds the
/// lock, or an I/O error when the lock file cannot be created or written.
pub fn acquire_lock(path: &Path) -> Result<File, LockError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    match file.try_lock() {
        Ok(()) => {}
        Err(TryLockError::WouldBlock) => {
            return Err(LockError::AlreadyRunning {
                pid: read_holder_pid(&file),
            });
        }
        Err(TryLockError::Error(error)) => return Err(error.into()),
    }

    // Record the holder PID for the error message of the next instance
    file.set_len(0)?;
    file.seek(io::SeekFrom::Start(0))?;
    write!(&file, "{}", std::process::id())?;

    Ok(file)
}

/// Best-effort read of the PID the current holder wrote into the lock file.
fn read_holder_pid(file: &File) -> String {
    let mut pid = String::new();
    let mut reader = file;
    let _ = reader.read_to_string(&mut pid);

    pid.trim().to_string()
}
