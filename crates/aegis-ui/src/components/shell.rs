//! Page chrome: header with product identity, theme toggle, locale
//! selector, and logout.

use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
    pub locale_selector: Html,
    pub authenticated: bool,
    pub on_logout: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_| on_toggle_theme.emit(()))
    };
    let logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };
    let theme_glyph = match props.theme {
        ThemeMode::Light => "☾",
        ThemeMode::Dark => "☀",
    };

    html! {
        <div class="shell">
            <header class="shell-head">
                <div>
                    <h1>{t("app.title")}</h1>
                    <p class="muted">{t("app.tagline")}</p>
                </div>
                <div class="shell-controls">
                    {props.locale_selector.clone()}
                    <button
                        class="ghost"
                        aria-label={t("theme.toggle")}
                        onclick={toggle_theme}>
                        {theme_glyph}
                    </button>
                    {if props.authenticated {
                        html! {
                            <button class="ghost" onclick={logout}>{t("auth.logout")}</button>
                        }
                    } else { html! {} }}
                </div>
            </header>
            <main class="shell-body">
                {for props.children.iter()}
            </main>
        </div>
    }
}
