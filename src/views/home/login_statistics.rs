// ============================================================================
// LOGIN STATISTICS VIEW - Resumen + barras de logins por día
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, clear_children, on_click, set_style, text_element, toggle_class, ElementBuilder};
use crate::services::statistics_service::{self, bar_width_percent, StatisticsSummary};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::shared::button;

const RANGES: [u32; 3] = [7, 30, 90];

pub fn render_login_statistics(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("page page-statistics").build();
    append_child(&section, &text_element("h2", "page-title", "Estadísticas de acceso")?)?;

    let api = Rc::new(ApiClient::new(state.auth.clone()));
    let content = ElementBuilder::new("div")?.class("statistics-content").build();

    let ranges = ElementBuilder::new("div")?.class("range-selector").build();
    let mut range_buttons = Vec::new();
    for days in RANGES {
        let btn = button("btn-secondary", &format!("{} días", days), "button")?;
        append_child(&ranges, &btn)?;
        range_buttons.push((days, btn));
    }
    let range_buttons = Rc::new(range_buttons);

    for (days, btn) in range_buttons.iter() {
        let days = *days;
        let api = api.clone();
        let content = content.clone();
        let all = range_buttons.clone();
        on_click(btn, move |_| {
            mark_active(&all, days);
            load(api.clone(), content.clone(), days);
        })?;
    }

    append_child(&section, &ranges)?;
    append_child(&section, &content)?;

    mark_active(&range_buttons, RANGES[0]);
    load(api, content, RANGES[0]);
    Ok(section)
}

fn mark_active(buttons: &[(u32, Element)], selected: u32) {
    for (days, btn) in buttons {
        if let Err(e) = toggle_class(btn, "active", *days == selected) {
            log::warn!("⚠️ {:?}", e);
        }
    }
}

fn load(api: Rc<ApiClient>, content: Element, days: u32) {
    spawn_local(async move {
        log::info!("📊 [STATS] Cargando últimos {} días", days);
        let rendered = match statistics_service::login_statistics(&api, days).await {
            Ok(envelope) if envelope.is_success() => {
                let summary = StatisticsSummary::from_records(envelope.payload.data);
                render_summary(&content, &summary)
            }
            Ok(envelope) => render_notice(&content, &envelope.message_or("Sin datos")),
            Err(e) => render_notice(&content, &e.to_string()),
        };
        if let Err(e) = rendered {
            log::error!("❌ [STATS] {:?}", e);
        }
    });
}

fn render_summary(content: &Element, summary: &StatisticsSummary) -> Result<(), JsValue> {
    clear_children(content);

    let peak = summary
        .peak
        .as_ref()
        .map(|p| format!("{} ({})", p.count, p.date))
        .unwrap_or_else(|| "-".to_string());

    let cards = ElementBuilder::new("div")?
        .class("summary-cards")
        .child(card("Total de accesos", &summary.total.to_string())?)?
        .child(card("Día pico", &peak)?)?
        .child(card("Media diaria", &format!("{:.1}", summary.daily_average))?)?
        .build();
    append_child(content, &cards)?;

    if summary.records.is_empty() {
        return append_child(content, &text_element("p", "page-hint", "No hay accesos en este periodo")?);
    }

    let bars = ElementBuilder::new("div")?.class("bar-chart").build();
    let max = summary.max_count();
    for record in &summary.records {
        let fill = ElementBuilder::new("div")?.class("bar-fill").build();
        set_style(&fill, "width", &format!("{}%", bar_width_percent(record.count, max)))?;

        let row = ElementBuilder::new("div")?
            .class("bar-row")
            .child(text_element("span", "bar-label", &record.date)?)?
            .child(ElementBuilder::new("div")?.class("bar-track").child(fill)?.build())?
            .child(text_element("span", "bar-value", &record.count.to_string())?)?
            .build();
        append_child(&bars, &row)?;
    }
    append_child(content, &bars)
}

fn card(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("summary-card")
        .child(text_element("span", "card-label", label)?)?
        .child(text_element("strong", "card-value", value)?)?
        .build())
}

fn render_notice(content: &Element, message: &str) -> Result<(), JsValue> {
    clear_children(content);
    append_child(content, &text_element("p", "page-hint", message)?)
}
