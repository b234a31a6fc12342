use crate::i18n::{fmt_usd, t};
use petpat_core::{CostCategory, CostItem, DonutLayout, pie_slices, truncate_label};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<CostItem>,
    pub total: u64,
    #[prop_or_default]
    pub selected: Option<CostCategory>,
    pub on_select: Callback<CostCategory>,
    #[prop_or(160.0)]
    pub size: f64,
    #[prop_or_default]
    pub show_total: bool,
    #[prop_or_default]
    pub show_slice_labels: bool,
}

#[function_component(PieChart)]
pub fn pie_chart(p: &Props) -> Html {
    let hovered = use_state(|| None::<CostCategory>);
    let layout = DonutLayout::new(p.size);
    let slices = pie_slices(&p.items, p.total);
    let view_box = format!("0 0 {0} {0}", p.size);

    let paths = slices.iter().enumerate().map(|(i, slice)| {
        let category = slice.category;
        let is_selected = p.selected == Some(category);
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_| cb.emit(category))
        };
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_| hovered.set(Some(category)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_| hovered.set(None))
        };
        html! {
            <path
                d={layout.arc_path(slice.start_deg, slice.end_deg)}
                fill={format!("url(#pie-grad-{i})")}
                class={classes!("pie-slice", is_selected.then_some("pie-slice-selected"))}
                data-category={category.as_str()}
                stroke={if is_selected { "rgba(255,255,255,0.95)" } else { "rgba(255,255,255,0.12)" }}
                stroke-width={if is_selected { "2.5" } else { "0.5" }}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                <title>{ format!("{} {}", t(&category.i18n_key()), fmt_usd(slice.value)) }</title>
            </path>
        }
    });

    let labels = p.show_slice_labels.then(|| {
        let font_size = format!("{}px", layout.font_size());
        html! {
            <>
            { for slices.iter().map(|slice| {
                let pos = layout.label_point(slice);
                let full = t(&slice.category.i18n_key());
                let text = if *hovered == Some(slice.category) { full } else { truncate_label(&full) };
                html! {
                    <text
                        x={pos.x.to_string()}
                        y={pos.y.to_string()}
                        text-anchor="middle"
                        dominant-baseline="middle"
                        pointer-events="none"
                        class="pie-label"
                        style={format!("font-size: {font_size}")}
                    >
                        { text }
                    </text>
                }
            }) }
            </>
        }
    });

    html! {
        <div class="pie-chart">
            <svg width={p.size.to_string()} height={p.size.to_string()} viewBox={view_box} role="img">
                <defs>
                    { for slices.iter().enumerate().map(|(i, slice)| html! {
                        <linearGradient id={format!("pie-grad-{i}")} x1="0%" y1="0%" x2="100%" y2="100%">
                            <stop offset="0%" stop-color={slice.color} stop-opacity="1" />
                            <stop offset="100%" stop-color={slice.color} stop-opacity="0.75" />
                        </linearGradient>
                    }) }
                </defs>
                { for paths }
                { labels.unwrap_or_default() }
            </svg>
            if p.show_total && p.total > 0 {
                <div class="pie-total">
                    <span class="pie-total-label">{ t("chart.total") }</span>
                    <span class="pie-total-value">{ fmt_usd(p.total) }</span>
                </div>
            }
        </div>
    }
}
