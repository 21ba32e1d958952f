//! フォーム入力ステージ
//!
//! 現場メタデータを集めて検証し、合格時のみ撮影ステージへ進める。
//! 入力値はローカルシグナルに持ち、Nextボタンでまとめて確定する。

use leptos::prelude::*;

use sitedoc_common::{AntennaLocation, SessionRecord};

/// 提出内容の検証
///
/// 合格なら確定する内容をそのまま返し、失格なら画面表示用の
/// メッセージを返す。ステージを進めてよいかの判定はここだけが行う。
fn review_submission(submitted: SessionRecord) -> Result<SessionRecord, String> {
    match submitted.validate() {
        Ok(()) => Ok(submitted),
        Err(_) => Err(
            "Please fill in all required fields (Site Name, Tech Name).".to_string(),
        ),
    }
}

/// 今日の日付（ISO形式 YYYY-MM-DD）
fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year() as u32,
        now.get_month() as u32 + 1,
        now.get_date() as u32
    )
}

#[component]
pub fn FormStage<F>(record: ReadSignal<SessionRecord>, on_submit: F) -> impl IntoView
where
    F: Fn(SessionRecord) + 'static + Clone + Send,
{
    // 戻ってきた場合に備えて既存の入力内容から初期化
    let initial = record.get_untracked();

    let (antenna_location, set_antenna_location) = signal(initial.antenna_location);
    let (antenna_location_other, set_antenna_location_other) =
        signal(initial.antenna_location_other.clone());
    let (installation, set_installation) = signal(initial.installation.clone());
    let (site_name, set_site_name) = signal(initial.site_name.clone());
    let (contractor, set_contractor) = signal(initial.contractor.clone());
    let (tech_name, set_tech_name) = signal(initial.tech_name.clone());
    let (date, set_date) = signal(if initial.date.is_empty() {
        today_iso()
    } else {
        initial.date.clone()
    });
    let (project, set_project) = signal(initial.project.clone());
    let (additional_notes, set_additional_notes) = signal(initial.additional_notes.clone());

    let (validation_error, set_validation_error) = signal(None::<String>);

    let on_next = {
        let on_submit = on_submit.clone();
        move |_| {
            let submitted = SessionRecord {
                antenna_location: antenna_location.get_untracked(),
                antenna_location_other: antenna_location_other.get_untracked(),
                installation: installation.get_untracked(),
                site_name: site_name.get_untracked(),
                contractor: contractor.get_untracked(),
                tech_name: tech_name.get_untracked(),
                date: date.get_untracked(),
                project: project.get_untracked(),
                additional_notes: additional_notes.get_untracked(),
            };

            match review_submission(submitted) {
                Ok(record) => {
                    set_validation_error.set(None);
                    on_submit(record);
                }
                Err(message) => {
                    set_validation_error.set(Some(message));
                }
            }
        }
    };

    view! {
        <section class="form-stage">
            <div class="title-row">
                <h2>"Gen 4 BB Conversion"</h2>
                <img
                    class="brand-logo"
                    src="https://upload.wikimedia.org/wikipedia/commons/a/a7/Ericsson_logo.svg"
                    alt="Ericsson"
                />
            </div>

            <div class="form-columns">
                <div class="form-column">
                    <div class="form-group">
                        <label>"Antenna Location:"</label>
                        {AntennaLocation::ALL
                            .iter()
                            .map(|location| {
                                let location = *location;
                                view! {
                                    <label class="radio-option">
                                        <input
                                            type="radio"
                                            name="antenna-location"
                                            value=location.as_str()
                                            prop:checked=move || antenna_location.get() == location
                                            on:change=move |_| set_antenna_location.set(location)
                                        />
                                        {location.as_str()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Show when=move || antenna_location.get() == AntennaLocation::Other>
                        <div class="form-group">
                            <label for="antenna-location-other">"Please specify other location:"</label>
                            <input
                                type="text"
                                id="antenna-location-other"
                                prop:value=move || antenna_location_other.get()
                                on:input=move |ev| {
                                    set_antenna_location_other.set(event_target_value(&ev));
                                }
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="installation">"Installation:"</label>
                        <input
                            type="text"
                            id="installation"
                            prop:value=move || installation.get()
                            on:input=move |ev| {
                                set_installation.set(event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <div class="form-column">
                    <div class="form-group">
                        <label for="site-name">"Site Name:"</label>
                        <input
                            type="text"
                            id="site-name"
                            prop:value=move || site_name.get()
                            on:input=move |ev| {
                                set_site_name.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="contractor">"Contractor:"</label>
                        <input
                            type="text"
                            id="contractor"
                            prop:value=move || contractor.get()
                            on:input=move |ev| {
                                set_contractor.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="tech-name">"Tech Name:"</label>
                        <input
                            type="text"
                            id="tech-name"
                            prop:value=move || tech_name.get()
                            on:input=move |ev| {
                                set_tech_name.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="date">"Date:"</label>
                        <input
                            type="date"
                            id="date"
                            prop:value=move || date.get()
                            on:input=move |ev| {
                                set_date.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="project">"Project:"</label>
                        <input
                            type="text"
                            id="project"
                            prop:value=move || project.get()
                            on:input=move |ev| {
                                set_project.set(event_target_value(&ev));
                            }
                        />
                    </div>
                </div>
            </div>

            <div class="form-group">
                <label for="additional-notes">"Additional Notes"</label>
                <textarea
                    id="additional-notes"
                    rows="6"
                    prop:value=move || additional_notes.get()
                    on:input=move |ev| {
                        set_additional_notes.set(event_target_value(&ev));
                    }
                />
            </div>

            <Show when=move || validation_error.get().is_some()>
                <div class="status error">
                    {move || validation_error.get().unwrap_or_default()}
                </div>
            </Show>

            <button class="btn btn-primary" on:click=on_next>
                "Next: Capture Photos"
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_submission_ok_commits_unchanged() {
        let submitted = SessionRecord {
            site_name: "PHO_TEST".to_string(),
            tech_name: "Alice".to_string(),
            ..Default::default()
        };

        let record = review_submission(submitted).expect("検証に落ちた");
        assert_eq!(record.site_name, "PHO_TEST");
        assert_eq!(record.tech_name, "Alice");
    }

    #[test]
    fn test_review_submission_missing_site_name_blocks() {
        let submitted = SessionRecord {
            site_name: "".to_string(),
            ..Default::default()
        };

        let message = review_submission(submitted).unwrap_err();
        assert_eq!(
            message,
            "Please fill in all required fields (Site Name, Tech Name)."
        );
    }

    #[test]
    fn test_review_submission_whitespace_tech_name_blocks() {
        // 空白のみは未入力扱いでステージを進めない
        let submitted = SessionRecord {
            tech_name: "   ".to_string(),
            ..Default::default()
        };

        assert!(review_submission(submitted).is_err());
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_today_iso_format() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
        assert!(today[..4].chars().all(|c| c.is_ascii_digit()));
    }
}
