//! 写真撮影ステージ
//!
//! ラベル選択・カメラ切り替え・ライブプレビュー・撮影・ギャラリー表示。
//! 撮影失敗（フレーム未着・タイムアウト）は警告表示のみで状態は変えない。

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use sitedoc_common::{CameraFacing, PHOTO_LABELS};

use crate::app::PhotoItem;
use crate::camera;
use crate::components::photo_gallery::PhotoGallery;

/// ステータス表示の種類
#[derive(Clone, Copy, PartialEq)]
enum StatusKind {
    Success,
    Warning,
}

impl StatusKind {
    fn as_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Warning => "warning",
        }
    }
}

#[component]
pub fn CaptureStage<FC, FB, FE>(
    photos: ReadSignal<Vec<PhotoItem>>,
    on_capture: FC,
    on_back: FB,
    on_export: FE,
) -> impl IntoView
where
    FC: Fn(String, String) + 'static + Clone + Send,
    FB: Fn(()) + 'static + Clone + Send,
    FE: Fn(()) + 'static + Clone + Send + Sync,
{
    let (selected_label, set_selected_label) = signal(PHOTO_LABELS[0].to_string());
    let (facing, set_facing) = signal(CameraFacing::default());
    let (camera_ready, set_camera_ready) = signal(false);
    let (status, set_status) = signal(None::<(StatusKind, String)>);

    let video_ref = NodeRef::<html::Video>::new();

    // マウント時とカメラ切り替え時にストリームを(再)ネゴシエーション
    Effect::new(move |_| {
        let facing = facing.get();
        if let Some(video) = video_ref.get() {
            set_camera_ready.set(false);
            spawn_local(async move {
                match camera::start_camera(&video, facing).await {
                    Ok(()) => set_camera_ready.set(true),
                    Err(err) => {
                        leptos::logging::warn!("camera start failed: {}", err);
                        set_status.set(Some((
                            StatusKind::Warning,
                            "Camera not ready. Please wait for the video stream to start."
                                .to_string(),
                        )));
                    }
                }
            });
        }
    });

    on_cleanup(move || {
        if let Some(video) = video_ref.get_untracked() {
            camera::stop_camera(&video);
        }
    });

    let on_capture_click = {
        let on_capture = on_capture.clone();
        move |_| {
            let label = selected_label.get_untracked();
            let Some(video) = video_ref.get_untracked() else {
                set_status.set(Some((
                    StatusKind::Warning,
                    "Camera not ready. Please wait for the video stream to start.".to_string(),
                )));
                return;
            };

            let on_capture = on_capture.clone();
            spawn_local(async move {
                match camera::grab_frame(&video).await {
                    Ok(data_url) => {
                        on_capture(label.clone(), data_url);
                        set_status.set(Some((
                            StatusKind::Success,
                            format!("'{}' captured successfully!", label),
                        )));
                    }
                    Err(err) => {
                        set_status.set(Some((StatusKind::Warning, err)));
                    }
                }
            });
        }
    };

    view! {
        <section class="capture-stage">
            <h2>"Capture Photos"</h2>

            <div class="form-group">
                <label for="photo-label">"Select a photo to capture:"</label>
                <select
                    id="photo-label"
                    on:change=move |ev| {
                        set_selected_label.set(event_target_value(&ev));
                    }
                >
                    {PHOTO_LABELS
                        .iter()
                        .map(|label| {
                            let label = *label;
                            view! {
                                <option
                                    value=label
                                    selected=move || selected_label.get() == label
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group radio-row">
                <label>"Select Camera"</label>
                <label class="radio-option">
                    <input
                        type="radio"
                        name="camera-facing"
                        prop:checked=move || facing.get() == CameraFacing::Front
                        on:change=move |_| set_facing.set(CameraFacing::Front)
                    />
                    "Front"
                </label>
                <label class="radio-option">
                    <input
                        type="radio"
                        name="camera-facing"
                        prop:checked=move || facing.get() == CameraFacing::Back
                        on:change=move |_| set_facing.set(CameraFacing::Back)
                    />
                    "Back"
                </label>
            </div>

            <video
                node_ref=video_ref
                class="camera-preview"
                autoplay=true
                playsinline=true
                muted=true
            />

            <Show when=move || !camera_ready.get()>
                <p class="text-muted">"Initializing camera..."</p>
            </Show>

            <button class="btn btn-primary" on:click=on_capture_click>
                "Capture Image"
            </button>

            {move || {
                status
                    .get()
                    .map(|(kind, text)| {
                        view! { <div class=format!("status {}", kind.as_class())>{text}</div> }
                    })
            }}

            <Show when=move || !photos.get().is_empty()>
                <h3>"Captured Photos"</h3>
                <PhotoGallery photos=photos />
            </Show>

            <hr />

            <div class="nav-buttons">
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_back = on_back.clone();
                        move |_| on_back(())
                    }
                >
                    "Back to Form"
                </button>

                <Show when=move || !photos.get().is_empty()>
                    <button
                        class="btn btn-primary"
                        on:click={
                            let on_export = on_export.clone();
                            move |_| on_export(())
                        }
                    >
                        "Generate and Download Excel"
                    </button>
                </Show>
            </div>
        </section>
    }
}
