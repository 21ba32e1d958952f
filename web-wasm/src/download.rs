//! ブラウザダウンロード
//!
//! バイト列をBlobにしてオブジェクトURL経由でダウンロードさせる。

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use sitedoc_common::REPORT_MIME_TYPE;

/// xlsxバイト列をファイルとしてダウンロードさせる
pub fn save_report(data: &[u8], file_name: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(data).buffer());

    let options = BlobPropertyBag::new();
    options.set_type(REPORT_MIME_TYPE);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Blob creation failed: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("object URL creation failed: {:?}", e))?;

    let document = web_sys::window()
        .ok_or("no window")?
        .document()
        .ok_or("no document")?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("anchor creation failed: {:?}", e))?
        .dyn_into()
        .map_err(|_| "anchor creation failed".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_save_report_succeeds() {
        let bytes = [0x50, 0x4B, 0x03, 0x04];
        save_report(&bytes, "test_VZW_documentation.xlsx").expect("ダウンロード起動に失敗");
    }
}
