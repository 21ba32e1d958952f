//! Excel出力ステージ
//!
//! 確定済みのフォーム内容と撮影写真からワークブックを組み立てて
//! ダウンロードさせる。ここではセッション状態を一切変更しない
//! （Start Overのみが初期化を行う）。

use leptos::prelude::*;

use sitedoc_common::{build_report, decode_data_url, report_file_name, PhotoSet, SessionRecord};

use crate::app::PhotoItem;
use crate::download;

/// data URLの写真をデコードしてワークブックを生成する
fn assemble_report(
    record: &SessionRecord,
    photos: &[PhotoItem],
) -> Result<(Vec<u8>, String), String> {
    let mut set = PhotoSet::new();
    for item in photos {
        let bytes = decode_data_url(&item.data_url).map_err(|e| e.to_string())?;
        set.insert(&item.label, bytes);
    }
    let bytes = build_report(record, &set).map_err(|e| e.to_string())?;
    Ok((bytes, report_file_name(record)))
}

#[component]
pub fn ExportStage<F>(
    record: ReadSignal<SessionRecord>,
    photos: ReadSignal<Vec<PhotoItem>>,
    on_start_over: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    let report = assemble_report(&record.get_untracked(), &photos.get_untracked());
    if let Err(err) = &report {
        leptos::logging::error!("report generation failed: {}", err);
    }

    let (download_error, set_download_error) = signal(None::<String>);

    view! {
        <section class="export-stage">
            <h2>"Download Your Report"</h2>

            {match report {
                Ok((bytes, file_name)) => view! {
                    <div class="status success">"Your Excel report has been generated!"</div>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| {
                            if let Err(err) = download::save_report(&bytes, &file_name) {
                                leptos::logging::error!("download failed: {}", err);
                                set_download_error.set(Some(err));
                            }
                        }
                    >
                        "Download Excel Report"
                    </button>
                }
                .into_any(),
                Err(err) => view! {
                    <div class="status error">
                        {format!("Report generation failed: {}", err)}
                    </div>
                }
                .into_any(),
            }}

            {move || {
                download_error
                    .get()
                    .map(|err| view! { <div class="status error">{err}</div> })
            }}

            <button
                class="btn btn-secondary"
                on:click={
                    let on_start_over = on_start_over.clone();
                    move |_| on_start_over(())
                }
            >
                "Start Over"
            </button>
        </section>
    }
}
