//! 撮影済み写真ギャラリーコンポーネント

use leptos::prelude::*;

use crate::app::PhotoItem;

/// Forのキー: ラベルと画像内容の組
///
/// 同一ラベルの再撮影で差し替わり、別ラベルが同一フレームを
/// 撮っても衝突しないキーにする。
fn gallery_key(photo: &PhotoItem) -> (String, String) {
    (photo.label.clone(), photo.data_url.clone())
}

#[component]
pub fn PhotoGallery(photos: ReadSignal<Vec<PhotoItem>>) -> impl IntoView {
    view! {
        <div class="photo-gallery">
            <For
                each=move || photos.get()
                key=|photo| gallery_key(photo)
                children=move |photo| {
                    view! {
                        <div class="photo-card">
                            <img src=photo.data_url.clone() alt=photo.label.clone() />
                            <p class="photo-caption">{photo.label.clone()}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
