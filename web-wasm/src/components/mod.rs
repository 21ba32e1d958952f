//! UIコンポーネント

pub mod capture_stage;
pub mod export_stage;
pub mod form_stage;
pub mod header;
pub mod photo_gallery;
