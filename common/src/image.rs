//! 画像サイズ計算とdata URLデコード
//!
//! 実際のリサイズ・JPEGエンコードはブラウザのcanvasが行う。
//! ここではcanvasに渡す縮小後サイズの計算と、canvasが返す
//! data URLからのバイト列取り出しだけを受け持つ。

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};

/// 保存写真の最大幅（px）
pub const MAX_PHOTO_WIDTH: u32 = 800;

/// 保存写真の最大高さ（px）
pub const MAX_PHOTO_HEIGHT: u32 = 600;

/// JPEGエンコード品質（canvas toDataURLに渡す値）
pub const JPEG_QUALITY: f64 = 0.85;

/// アスペクト比を維持したまま枠内に収まるサイズを返す
///
/// 枠より小さい画像は拡大しない（PILのthumbnailと同じ挙動）。
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale_w = max_width as f64 / width as f64;
    let scale_h = max_height as f64 / height as f64;
    let scale = scale_w.min(scale_h);

    let fitted_w = ((width as f64 * scale).round() as u32).max(1);
    let fitted_h = ((height as f64 * scale).round() as u32).max(1);
    (fitted_w, fitted_h)
}

/// data URL（`data:image/jpeg;base64,...`）からバイト列を取り出す
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let payload = data_url
        .split_once(";base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| Error::Image(format!("not a base64 data URL: {:.32}", data_url)))?;

    STANDARD
        .decode(payload)
        .map_err(|e| Error::Image(format!("base64 decode failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within_no_upscale() {
        // 枠より小さい画像はそのまま
        assert_eq!(fit_within(400, 300, 800, 600), (400, 300));
        assert_eq!(fit_within(800, 600, 800, 600), (800, 600));
    }

    #[test]
    fn test_fit_within_landscape() {
        assert_eq!(fit_within(1600, 1200, 800, 600), (800, 600));
        assert_eq!(fit_within(1920, 1080, 800, 600), (800, 450));
    }

    #[test]
    fn test_fit_within_portrait() {
        // 縦長は高さ側が制約になる
        assert_eq!(fit_within(1080, 1920, 800, 600), (338, 600));
    }

    #[test]
    fn test_fit_within_zero() {
        assert_eq!(fit_within(0, 1080, 800, 600), (0, 0));
    }

    #[test]
    fn test_decode_data_url_ok() {
        let data_url = "data:image/jpeg;base64,AQID";
        let bytes = decode_data_url(data_url).expect("デコード失敗");
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_data_url_missing_header() {
        let err = decode_data_url("AQID").unwrap_err();
        assert!(format!("{}", err).contains("not a base64 data URL"));
    }

    #[test]
    fn test_decode_data_url_bad_payload() {
        let err = decode_data_url("data:image/jpeg;base64,@@@@").unwrap_err();
        assert!(format!("{}", err).contains("base64 decode failed"));
    }
}
