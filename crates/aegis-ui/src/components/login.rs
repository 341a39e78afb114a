//! Sign-in prompt shown while no session is held.

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoginPromptProps {
    pub busy: bool,
    pub error: Option<String>,
    pub on_submit: Callback<(String, String)>,
}

#[function_component(LoginPrompt)]
pub(crate) fn login_prompt(props: &LoginPromptProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let email = use_state(String::new);
    let password = use_state(String::new);
    let local_error = use_state(|| None as Option<String>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let submit = {
        let email = email.clone();
        let password = password.clone();
        let local_error = local_error.clone();
        let on_submit = props.on_submit.clone();
        let required = t("auth.error_required");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if email.trim().is_empty() || password.trim().is_empty() {
                local_error.set(Some(required.clone()));
                return;
            }
            local_error.set(None);
            on_submit.emit(((*email).clone(), (*password).clone()));
        })
    };

    let message = local_error.as_ref().or(props.error.as_ref());

    html! {
        <div class="auth-overlay" role="dialog" aria-modal="true">
            <form class="card" onsubmit={submit}>
                <header>
                    <h3>{t("auth.title")}</h3>
                </header>
                <p class="muted">{t("auth.body")}</p>
                <label class="stack">
                    <span>{t("auth.email_label")}</span>
                    <input
                        type="email"
                        placeholder={t("auth.email_placeholder")}
                        value={(*email).clone()}
                        oninput={on_email}
                        disabled={props.busy} />
                </label>
                <label class="stack">
                    <span>{t("auth.password_label")}</span>
                    <input
                        type="password"
                        placeholder={t("auth.password_placeholder")}
                        value={(*password).clone()}
                        oninput={on_password}
                        disabled={props.busy} />
                </label>
                {if let Some(err) = message {
                    html! { <p class="error-text">{err.clone()}</p> }
                } else { html! {} }}
                <div class="actions">
                    <button type="submit" class="solid" disabled={props.busy}>
                        {if props.busy { t("auth.busy") } else { t("auth.submit") }}
                    </button>
                </div>
            </form>
        </div>
    }
}
