//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: missing required fields: {0}")]
    Validation(String),

    #[error("image error: {0}")]
    Image(String),

    #[cfg(feature = "excel")]
    #[error("excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error = Error::Validation("Site Name, Tech Name".to_string());
        let display = format!("{}", error);
        assert!(display.contains("validation error"));
        assert!(display.contains("Site Name"));
    }

    #[test]
    fn test_error_display_image() {
        let error = Error::Image("not a data URL".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "image error: not a data URL");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Image("壊れたdata URL".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Image"));
    }
}
