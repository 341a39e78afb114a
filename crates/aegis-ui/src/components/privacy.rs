//! Privacy-alert panel.
//!
//! Pure rendering of the alert list; the only re-scan affordance is a full
//! page reload, which re-runs the fetch-on-mount path.

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::utils::window;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PrivacyAlertsProps {
    pub alerts: Option<Vec<String>>,
}

#[function_component(PrivacyAlerts)]
pub(crate) fn privacy_alerts(props: &PrivacyAlertsProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    let Some(alerts) = props.alerts.as_ref() else {
        return html! { <p class="muted">{t("privacy.loading")}</p> };
    };

    let on_rescan = Callback::from(|_| {
        let _ = window().location().reload();
    });

    html! {
        <section class="card privacy">
            <h2>{t("privacy.title")}</h2>
            {if alerts.is_empty() {
                html! { <p class="empty-state positive">{t("privacy.empty")}</p> }
            } else {
                html! {
                    <ul class="alert-list">
                        {for alerts.iter().enumerate().map(|(idx, alert)| html! {
                            <li class="alert-row" key={idx}>{alert.clone()}</li>
                        })}
                    </ul>
                }
            }}
            <button class="ghost" onclick={on_rescan}>{t("privacy.rescan")}</button>
        </section>
    }
}
