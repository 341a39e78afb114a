//! Scan-results list with per-match selection and the takedown trigger.
//!
//! Pure rendering: selection state and submission live in the app shell.

use crate::core::logic::{confidence_label, takedown_enabled};
use crate::core::scan::{BatchItem, BatchReport, MatchId, MatchRow, SelectionSet, TakedownOutcome};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ScanResultsProps {
    pub rows: Vec<MatchRow>,
    pub selected: SelectionSet,
    pub busy: bool,
    pub report: Option<BatchReport>,
    pub on_toggle: Callback<MatchId>,
    pub on_takedown: Callback<()>,
}

#[function_component(ScanResults)]
pub(crate) fn scan_results(props: &ScanResultsProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    if props.rows.is_empty() {
        return html! { <p class="empty-state positive">{t("results.empty")}</p> };
    }

    let on_takedown = {
        let on_takedown = props.on_takedown.clone();
        Callback::from(move |_| on_takedown.emit(()))
    };

    html! {
        <section class="card results">
            <h2>{t("results.title")}</h2>
            <ul class="match-list">
                {for props.rows.iter().map(|row| render_row(
                    row,
                    props.selected.contains(&row.id),
                    props.busy,
                    props.on_toggle.clone(),
                    t("results.platform"),
                    t("results.confidence"),
                    t("results.view_listing"),
                ))}
            </ul>
            {match props.report.as_ref() {
                Some(report) => render_report(report, &t),
                None => html! {},
            }}
            <button
                class="danger"
                onclick={on_takedown}
                disabled={!takedown_enabled(&props.selected, props.busy)}>
                {if props.busy { t("results.takedown_busy") } else { t("results.takedown") }}
            </button>
        </section>
    }
}

fn render_row(
    row: &MatchRow,
    selected: bool,
    busy: bool,
    on_toggle: Callback<MatchId>,
    platform_label: String,
    confidence_title: String,
    view_label: String,
) -> Html {
    let id = row.id;
    let on_change = Callback::from(move |_: Event| on_toggle.emit(id));
    html! {
        <li class="match-row" key={row.id}>
            <input type="checkbox" checked={selected} onchange={on_change} disabled={busy} />
            <img class="thumb" src={row.image_url.clone()} alt={row.platform.clone()} />
            <div class="match-meta">
                <p><strong>{platform_label}{": "}</strong>{row.platform.clone()}</p>
                <p><strong>{confidence_title}{": "}</strong>{confidence_label(row.confidence)}</p>
                <a href={row.listing_url.clone()} target="_blank" rel="noopener noreferrer">
                    {view_label}
                </a>
            </div>
        </li>
    }
}

/// Disclose the latest batch so partial successes stay visible after a
/// mid-batch failure.
fn render_report(report: &BatchReport, t: &impl Fn(&str) -> String) -> Html {
    html! {
        <div class="report">
            <h3>{t("results.report_title")}</h3>
            <ul class="report-list">
                {for report.items.iter().map(|item| render_report_item(item, t))}
            </ul>
        </div>
    }
}

fn render_report_item(item: &BatchItem, t: &impl Fn(&str) -> String) -> Html {
    let (tone, label) = match &item.outcome {
        TakedownOutcome::Submitted => ("ok", t("results.submitted")),
        TakedownOutcome::Failed(message) => {
            ("error", format!("{} ({message})", t("results.failed")))
        }
        TakedownOutcome::Skipped => ("subtle", t("results.skipped")),
    };
    html! {
        <li class="report-row" key={item.id}>
            <span>{item.platform.clone()}</span>
            <span class={classes!("pill", tone)}>{label}</span>
        </li>
    }
}
