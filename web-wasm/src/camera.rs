//! カメラストリーム制御とフレーム取得
//!
//! getUserMediaで映像のみのストリームを取得し<video>に接続する。
//! 撮影時は現在フレームをcanvasに縮小描画してJPEGのdata URLにする。
//! フレームが用意できるまで一定時間ポーリングし、タイムアウトは
//! 警告扱い（状態は変更せず、ストリームも停止しない）。

use gloo::timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

use sitedoc_common::{fit_within, CameraFacing, JPEG_QUALITY, MAX_PHOTO_HEIGHT, MAX_PHOTO_WIDTH};

/// フレーム待ちの上限（ms）
pub const FRAME_TIMEOUT_MS: u32 = 10_000;

/// フレーム待ちのポーリング間隔（ms）
const POLL_INTERVAL_MS: u32 = 200;

/// HAVE_CURRENT_DATA: 現在位置のフレームがデコード済み
const READY_STATE_HAVE_CURRENT_DATA: u16 = 2;

/// getUserMediaに渡す映像制約
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoConstraints {
    facing_mode: &'static str,
}

/// カメラストリームを開始して<video>に接続する
///
/// 既存のストリームがあればトラックを停止してから再ネゴシエーションする
/// （カメラ切り替え時）。音声は要求しない。
pub async fn start_camera(video: &HtmlVideoElement, facing: CameraFacing) -> Result<(), String> {
    stop_camera(video);

    let media_devices = web_sys::window()
        .ok_or("no window")?
        .navigator()
        .media_devices()
        .map_err(|e| format!("MediaDevices unavailable: {:?}", e))?;

    let video_constraint = serde_wasm_bindgen::to_value(&VideoConstraints {
        facing_mode: facing.constraint_value(),
    })
    .map_err(|e| format!("constraint build failed: {}", e))?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video_constraint);
    constraints.set_audio(&JsValue::FALSE);

    let promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| format!("getUserMedia rejected: {:?}", e))?;

    let stream: MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| format!("camera permission denied or unavailable: {:?}", e))?
        .dyn_into()
        .map_err(|_| "getUserMedia did not return a MediaStream".to_string())?;

    video.set_src_object(Some(&stream));
    let _ = video.play();
    Ok(())
}

/// 接続中のストリームのトラックを停止して<video>から外す
pub fn stop_camera(video: &HtmlVideoElement) {
    if let Some(stream) = video.src_object() {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        video.set_src_object(None);
    }
}

/// 現在フレームを取得してJPEGのdata URLを返す
///
/// フレームがまだ無い場合はタイムアウトまで待つ。
pub async fn grab_frame(video: &HtmlVideoElement) -> Result<String, String> {
    wait_for_frame(video).await?;
    capture_frame(video)
}

/// フレームがデコード済みになるまでポーリングで待つ
async fn wait_for_frame(video: &HtmlVideoElement) -> Result<(), String> {
    let mut waited = 0;
    loop {
        if video.ready_state() >= READY_STATE_HAVE_CURRENT_DATA && video.video_width() > 0 {
            return Ok(());
        }
        if waited >= FRAME_TIMEOUT_MS {
            return Err("No frame received from the camera. Please try again.".to_string());
        }
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
        waited += POLL_INTERVAL_MS;
    }
}

/// 現在フレームを縮小してJPEGエンコードする
fn capture_frame(video: &HtmlVideoElement) -> Result<String, String> {
    let (width, height) = fit_within(
        video.video_width(),
        video.video_height(),
        MAX_PHOTO_WIDTH,
        MAX_PHOTO_HEIGHT,
    );
    if width == 0 || height == 0 {
        return Err("No frame received from the camera. Please try again.".to_string());
    }

    let document = web_sys::window()
        .ok_or("no window")?
        .document()
        .ok_or("no document")?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| format!("canvas creation failed: {:?}", e))?
        .dyn_into()
        .map_err(|_| "canvas creation failed".to_string())?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| format!("2d context unavailable: {:?}", e))?
        .ok_or("2d context unavailable")?
        .dyn_into()
        .map_err(|_| "2d context unavailable".to_string())?;

    context
        .draw_image_with_html_video_element_and_dw_and_dh(
            video,
            0.0,
            0.0,
            width as f64,
            height as f64,
        )
        .map_err(|e| format!("frame draw failed: {:?}", e))?;

    canvas
        .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(JPEG_QUALITY))
        .map_err(|e| format!("JPEG encode failed: {:?}", e))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_video_constraints_serialize_camel_case() {
        let value = serde_wasm_bindgen::to_value(&VideoConstraints {
            facing_mode: CameraFacing::Back.constraint_value(),
        })
        .expect("constraint serialization failed");

        let facing = js_sys::Reflect::get(&value, &JsValue::from_str("facingMode"))
            .expect("facingMode key missing");
        assert_eq!(facing.as_string().as_deref(), Some("environment"));
    }
}
