use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Preferences error: {0}")]
    Preferences(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Image error: {0}")]
    Image(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only profile");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("read-only profile"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Preferences("no config directory".to_string());
        assert_eq!(err.to_string(), "Preferences error: no config directory");

        let err = AppError::Catalog("project 'x' has no images".to_string());
        assert_eq!(err.to_string(), "Catalog error: project 'x' has no images");

        let err = AppError::Image("assets/img/missing.jpg".to_string());
        assert_eq!(err.to_string(), "Image error: assets/img/missing.jpg");
    }
}
