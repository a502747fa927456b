//! Attaching the failing path and operation to I/O results

use super::types::{AppError, AppResult};
use std::path::PathBuf;

/// Turns any `Result<T, E: Error>` into an [`AppError::Io`] naming the path
pub trait IoResultExt<T> {
    fn in_file_operation(self, path: impl Into<PathBuf>, operation: &str) -> AppResult<T>;
}

impl<T, E> IoResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn in_file_operation(self, path: impl Into<PathBuf>, operation: &str) -> AppResult<T> {
        self.map_err(|e| AppError::io_with_source(path, operation, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_in_file_operation_keeps_path_and_source() {
        let result: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = result
            .in_file_operation("/tmp/hooks.json", "write hooks config")
            .unwrap_err();

        assert!(std::error::Error::source(&err).is_some());
        match err {
            AppError::Io { path, operation, .. } => {
                assert_eq!(path, PathBuf::from("/tmp/hooks.json"));
                assert_eq!(operation, "write hooks config");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
