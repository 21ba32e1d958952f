//! メインアプリケーションコンポーネント
//!
//! 3段階ワークフロー（フォーム入力 → 写真撮影 → Excel出力）を
//! Stageシグナル1本で切り替える。撮影済み写真とフォーム内容は
//! セッション中ずっとシグナルに保持され、Start Overでのみ消える。

use leptos::prelude::*;

use sitedoc_common::{SessionRecord, Stage};

use crate::components::{
    capture_stage::CaptureStage,
    export_stage::ExportStage,
    form_stage::FormStage,
    header::Header,
};

/// 撮影済み写真1件（表示用）
///
/// ギャラリーと<img>表示のためdata URLのまま持ち、
/// Excel出力時にのみバイト列へデコードする。
#[derive(Clone, PartialEq)]
pub struct PhotoItem {
    pub label: String,
    pub data_url: String,
}

/// 同一ラベルは位置を保ったまま上書き、新規ラベルは末尾に追加
fn upsert_photo(photos: &mut Vec<PhotoItem>, label: String, data_url: String) {
    if let Some(existing) = photos.iter_mut().find(|p| p.label == label) {
        existing.data_url = data_url;
    } else {
        photos.push(PhotoItem { label, data_url });
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (stage, set_stage) = signal(Stage::Form);
    let (record, set_record) = signal(SessionRecord::default());
    let (photos, set_photos) = signal(Vec::<PhotoItem>::new());

    // フォーム確定ハンドラ（検証済みの内容のみ受け取る）
    let on_form_submit = move |submitted: SessionRecord| {
        set_record.set(submitted);
        set_stage.set(Stage::Capture);
    };

    // 撮影ハンドラ
    let on_capture = move |label: String, data_url: String| {
        set_photos.update(|photos| upsert_photo(photos, label, data_url));
    };

    // ナビゲーション（フォームへ戻っても状態は保持）
    let on_back_to_form = move |_: ()| set_stage.set(Stage::Form);
    let on_proceed_to_export = move |_: ()| set_stage.set(Stage::Export);

    // Start Over: 全状態を初期化してフォームへ
    let on_start_over = move |_: ()| {
        set_record.set(SessionRecord::default());
        set_photos.set(Vec::new());
        set_stage.set(Stage::Form);
    };

    view! {
        <div class="container">
            <Header />

            {move || match stage.get() {
                Stage::Form => view! {
                    <FormStage record=record on_submit=on_form_submit />
                }
                .into_any(),
                Stage::Capture => view! {
                    <CaptureStage
                        photos=photos
                        on_capture=on_capture
                        on_back=on_back_to_form
                        on_export=on_proceed_to_export
                    />
                }
                .into_any(),
                Stage::Export => view! {
                    <ExportStage
                        record=record
                        photos=photos
                        on_start_over=on_start_over
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_photo_appends_new_labels() {
        let mut photos = Vec::new();
        upsert_photo(&mut photos, "Pre-Installation Site Photo".to_string(), "data:a".to_string());
        upsert_photo(&mut photos, "Sector A Pre-Installation".to_string(), "data:b".to_string());

        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].label, "Pre-Installation Site Photo");
        assert_eq!(photos[1].label, "Sector A Pre-Installation");
    }

    #[test]
    fn test_upsert_photo_overwrites_in_place() {
        let mut photos = Vec::new();
        upsert_photo(&mut photos, "Sector A Pre-Installation".to_string(), "data:a".to_string());
        upsert_photo(&mut photos, "Sector B Pre-Installation".to_string(), "data:b".to_string());
        upsert_photo(&mut photos, "Sector A Pre-Installation".to_string(), "data:new".to_string());

        // 再撮影しても件数と順序は変わらない
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].label, "Sector A Pre-Installation");
        assert_eq!(photos[0].data_url, "data:new");
        assert_eq!(photos[1].data_url, "data:b");
    }
}
