//! Product-image upload form.
//!
//! Holds exactly one pending file; submission hands the file to the caller
//! and leaves the input untouched so the user can re-select to scan again.

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use web_sys::File;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct UploadFormProps {
    pub busy: bool,
    pub on_upload: Callback<File>,
}

#[function_component(UploadForm)]
pub(crate) fn upload_form(props: &UploadFormProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let file = use_state(|| None as Option<File>);

    let on_change = {
        let file = file.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                file.set(input.files().and_then(|files| files.item(0)));
            }
        })
    };

    let on_submit = {
        let file = file.clone();
        let on_upload = props.on_upload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Some(pending) = (*file).clone() {
                on_upload.emit(pending);
            }
        })
    };

    html! {
        <form class="card upload-form" onsubmit={on_submit}>
            <label class="stack">
                <span>{t("upload.title")}</span>
                <input
                    type="file"
                    accept="image/jpeg,image/png"
                    onchange={on_change}
                    disabled={props.busy} />
            </label>
            <button type="submit" class="solid" disabled={props.busy || file.is_none()}>
                {if props.busy { t("upload.busy") } else { t("upload.submit") }}
            </button>
        </form>
    }
}
