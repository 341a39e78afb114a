//! App shell: owns the store, the request orchestration, and the top-level
//! layout. Components stay presentational.

use crate::app::api::ApiCtx;
use crate::components::login::LoginPrompt;
use crate::components::privacy::PrivacyAlerts;
use crate::components::results::ScanResults;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::components::upload::UploadForm;
use crate::core::auth::SessionState;
use crate::core::logic::TakedownBatch;
use crate::core::scan::{
    MatchId, clear_matches, clear_selection, set_matches, set_report, toggle_match,
};
use crate::core::store::{AppStore, establish_session, reset_session, set_privacy_alerts};
use crate::core::theme::ThemeMode;
use crate::i18n::{LocaleCode, TranslationBundle};
use crate::models::{ApiError, Toast, ToastKind};
use aegis_api_models::{Claimant, TakedownNotice};
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use preferences::{
    LOCALE_KEY, THEME_KEY, api_base_url, clear_session_storage, load_locale, load_session,
    load_theme, persist_session,
};
use std::rc::Rc;
use web_sys::File;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;

#[function_component(AegisApp)]
pub(crate) fn aegis_app() -> Html {
    let theme = use_state(load_theme);
    let locale = use_state(load_locale);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_state(|| 0u64);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    let session = use_selector(|store: &AppStore| store.session.clone());
    let busy = use_selector(|store: &AppStore| store.busy);
    let error = use_selector(|store: &AppStore| store.error.clone());
    let scan_rows = use_selector(|store: &AppStore| store.scan.rows.clone());
    let has_results = use_selector(|store: &AppStore| store.scan.has_results);
    let selected = use_selector(|store: &AppStore| store.scan.selected.clone());
    let report = use_selector(|store: &AppStore| store.scan.report.clone());
    let privacy = use_selector(|store: &AppStore| store.privacy.alerts.clone());

    let authenticated = session.is_authenticated();
    let busy_value = *busy;
    let error_value = (*error).clone();
    let scan_rows_value = (*scan_rows).clone();
    let has_results_value = *has_results;
    let selected_value = (*selected).clone();
    let report_value = (*report).clone();
    let privacy_value = (*privacy).clone();

    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                LocalStorage::set(THEME_KEY, theme.as_str()).ok();
                || ()
            },
            theme,
        );
    }
    {
        let locale = locale.clone();
        use_effect_with_deps(
            move |locale| {
                LocalStorage::set(LOCALE_KEY, locale.code()).ok();
                || ()
            },
            locale.clone(),
        );
    }
    // Restore a persisted session so a reload keeps the user signed in.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(token) = load_session() {
                    dispatch.reduce_mut(|store| establish_session(store, token));
                }
                || ()
            },
            (),
        );
    }
    // Keep the client credential in sync and fetch privacy alerts on mount
    // and whenever the token changes. Without a token no request is issued.
    {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let expired = bundle.text("auth.expired", "");
        use_effect_with_deps(
            move |session: &Rc<SessionState>| {
                let token = session.token().map(ToString::to_string);
                api_ctx.client.set_token(token.clone());
                if token.is_some() {
                    let client = api_ctx.client.clone();
                    let dispatch = dispatch.clone();
                    let expired = expired.clone();
                    yew::platform::spawn_local(async move {
                        match client.fetch_privacy().await {
                            Ok(fetched) => dispatch.reduce_mut(|store| {
                                set_privacy_alerts(store, fetched.alerts);
                            }),
                            Err(err) => {
                                let message = err.to_string();
                                apply_failure(&dispatch, &err, message, expired);
                            }
                        }
                    });
                }
                || ()
            },
            session.clone(),
        );
    }

    let handle_login = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        let bundle = (*bundle).clone();
        Callback::from(move |(email, password): (String, String)| {
            if dispatch.get().busy {
                return;
            }
            dispatch.reduce_mut(|store| {
                store.busy = true;
                store.error = None;
            });
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let toasts = toasts.clone();
            let toast_id = toast_id.clone();
            let failed = bundle.text("auth.failed", "Login failed");
            let signed_in = bundle.text("toast.signed_in", "");
            yew::platform::spawn_local(async move {
                match client.login(&email, &password).await {
                    Ok(response) => {
                        persist_session(&response.access_token);
                        dispatch.reduce_mut(|store| {
                            establish_session(store, response.access_token);
                        });
                        push_toast(&toasts, &toast_id, ToastKind::Success, signed_in);
                    }
                    Err(_) => {
                        dispatch.reduce_mut(|store| store.error = Some(failed));
                    }
                }
                dispatch.reduce_mut(|store| store.busy = false);
            });
        })
    };

    let handle_upload = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let bundle = (*bundle).clone();
        Callback::from(move |file: File| {
            let snapshot = dispatch.get();
            if snapshot.busy || !snapshot.session.is_authenticated() {
                return;
            }
            dispatch.reduce_mut(|store| {
                store.busy = true;
                store.error = None;
                clear_matches(&mut store.scan);
            });
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let expired = bundle.text("auth.expired", "");
            yew::platform::spawn_local(async move {
                match client.upload_scan(&file).await {
                    Ok(response) => dispatch.reduce_mut(|store| {
                        set_matches(&mut store.scan, response.matches);
                    }),
                    Err(err) => {
                        let message = err.to_string();
                        apply_failure(&dispatch, &err, message, expired);
                    }
                }
                dispatch.reduce_mut(|store| store.busy = false);
            });
        })
    };

    let handle_takedown = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        let bundle = (*bundle).clone();
        Callback::from(move |()| {
            let snapshot = dispatch.get();
            if snapshot.busy || snapshot.scan.selected.is_empty() {
                return;
            }
            let mut batch = TakedownBatch::new(&snapshot.scan.rows, &snapshot.scan.selected);
            dispatch.reduce_mut(|store| {
                store.busy = true;
                store.error = None;
            });
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let toasts = toasts.clone();
            let toast_id = toast_id.clone();
            let failed_for = bundle.text("error.takedown_failed_for", "Takedown failed for");
            let success = bundle.text("toast.takedown_success", "");
            let expired = bundle.text("auth.expired", "");
            let claimant = Claimant::placeholder();
            yew::platform::spawn_local(async move {
                let mut unauthorized = false;
                while let Some(planned) = batch.next_pending() {
                    let notice = TakedownNotice::new(
                        &planned.platform,
                        &planned.listing_url,
                        planned.confidence,
                        &claimant,
                    );
                    match client.submit_takedown(&notice).await {
                        Ok(()) => batch.record(Ok(())),
                        Err(err) => {
                            unauthorized = unauthorized || err.is_unauthorized();
                            batch.record(Err(err.to_string()));
                        }
                    }
                }
                let disclosure = batch.finish();
                let failed_platform = disclosure
                    .first_failure()
                    .map(|item| item.platform.clone());
                dispatch.reduce_mut(|store| {
                    if let Some(platform) = &failed_platform {
                        store.error = Some(format!("{failed_for} {platform}"));
                    } else {
                        clear_selection(&mut store.scan);
                    }
                    set_report(&mut store.scan, disclosure);
                    store.busy = false;
                });
                if failed_platform.is_none() {
                    push_toast(&toasts, &toast_id, ToastKind::Success, success);
                }
                if unauthorized {
                    clear_session_storage();
                    dispatch.reduce_mut(|store| {
                        reset_session(store);
                        store.error = Some(expired);
                    });
                }
            });
        })
    };

    let handle_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: MatchId| {
            dispatch.reduce_mut(|store| toggle_match(&mut store.scan, id));
        })
    };

    let handle_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            clear_session_storage();
            dispatch.reduce_mut(|store| {
                reset_session(store);
                store.error = None;
            });
        })
    };

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggled()))
    };

    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            toasts.set(
                (*toasts)
                    .iter()
                    .cloned()
                    .filter(|toast| toast.id != id)
                    .collect(),
            );
        })
    };

    let locale_selector = {
        let locale = locale.clone();
        html! {
            <select value={locale.code().to_string()} onchange={{
                let locale = locale.clone();
                Callback::from(move |event: Event| {
                    if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                        if let Some(next) = LocaleCode::from_lang_tag(&target.value()) {
                            locale.set(next);
                        }
                    }
                })
            }}>
                {for LocaleCode::all().iter().map(|lc| html! {
                    <option value={lc.code()} selected={*lc == *locale}>{lc.label()}</option>
                })}
            </select>
        }
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <AppShell
                    theme={*theme}
                    on_toggle_theme={toggle_theme}
                    locale_selector={locale_selector}
                    authenticated={authenticated}
                    on_logout={handle_logout}
                >
                    <UploadForm busy={busy_value} on_upload={handle_upload} />
                    {match error_value.clone() {
                        // While signed out the login prompt owns the error slot.
                        Some(err) if authenticated => {
                            html! { <p class="error-text banner">{err}</p> }
                        }
                        _ => html! {},
                    }}
                    {if has_results_value {
                        html! {
                            <ScanResults
                                rows={scan_rows_value.clone()}
                                selected={selected_value.clone()}
                                busy={busy_value}
                                report={report_value.clone()}
                                on_toggle={handle_toggle}
                                on_takedown={handle_takedown}
                            />
                        }
                    } else { html! {} }}
                    <PrivacyAlerts alerts={privacy_value.clone()} />
                </AppShell>
                <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
                {if authenticated {
                    html! {}
                } else {
                    html! {
                        <LoginPrompt
                            busy={busy_value}
                            error={error_value}
                            on_submit={handle_login}
                        />
                    }
                }}
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

/// Surface a request failure; a 401 additionally tears the session down so
/// the user is not left silently stuck with a dead token.
fn apply_failure(
    dispatch: &Dispatch<AppStore>,
    err: &ApiError,
    message: String,
    expired_message: String,
) {
    if err.is_unauthorized() {
        clear_session_storage();
        dispatch.reduce_mut(|store| {
            reset_session(store);
            store.error = Some(expired_message);
        });
    } else {
        dispatch.reduce_mut(|store| store.error = Some(message));
    }
}

fn push_toast(
    toasts: &UseStateHandle<Vec<Toast>>,
    next_id: &UseStateHandle<u64>,
    kind: ToastKind,
    message: String,
) {
    let id = **next_id + 1;
    next_id.set(id);
    let mut list = (**toasts).clone();
    list.push(Toast { id, message, kind });
    if list.len() > 4 {
        let drain = list.len() - 4;
        list.drain(0..drain);
    }
    toasts.set(list);
}

fn apply_theme(theme: ThemeMode) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AegisApp>::with_root(root).render();
    } else {
        yew::Renderer::<AegisApp>::new().render();
    }
}
