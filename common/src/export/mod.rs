//! レポート出力モジュール

pub mod excel;

pub use excel::{build_report, report_file_name, REPORT_MIME_TYPE};
