use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrganizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Error scanning path: {0}")]
    Scan(String),

    #[error("Error saving data: {0}")]
    Persistence(String),

    #[error("Corrupt data file {path}: {reason}")]
    CorruptData { path: String, reason: String },

    #[error("Unknown status: {0}")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = OrganizerError::PathNotFound("/tmp/nope".into());
        assert_eq!(err.to_string(), "Path not found: /tmp/nope");

        let err = OrganizerError::CorruptData {
            path: "project_data.json".into(),
            reason: "expected value".into(),
        };
        assert!(err.to_string().contains("project_data.json"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: OrganizerError = io.into();
        assert!(matches!(err, OrganizerError::Io(_)));
    }
}
