//! Site Documentation Common Library
//!
//! Web(WASM)とネイティブテストで共有される型とユーティリティ

pub mod types;
pub mod labels;
pub mod image;
pub mod error;
#[cfg(feature = "excel")]
pub mod export;

pub use types::{SessionRecord, PhotoSet, CapturedPhoto, Stage, CameraFacing, AntennaLocation};
pub use labels::{PHOTO_LABELS, PHOTO_LABEL_COUNT};
pub use image::{fit_within, decode_data_url, JPEG_QUALITY, MAX_PHOTO_WIDTH, MAX_PHOTO_HEIGHT};
pub use error::{Error, Result};
#[cfg(feature = "excel")]
pub use export::{build_report, report_file_name, REPORT_MIME_TYPE};
