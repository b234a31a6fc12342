use crate::dom::event_value;
use crate::i18n::{fmt_grouped, t, tr1};
use petpat_core::{CostCategory, SessionAction};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub category: CostCategory,
    pub computed: u64,
    #[prop_or_default]
    pub text: Option<AttrValue>,
    pub overridden: bool,
    pub on_action: Callback<SessionAction>,
}

/// Manual monthly amount that replaces the computed value everywhere.
#[function_component(OverrideEditor)]
pub fn override_editor(p: &Props) -> Html {
    let category = p.category;
    let on_input = {
        let cb = p.on_action.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(text) = event_value(&e) {
                cb.emit(SessionAction::SetOverride { category, text });
            }
        })
    };
    let computed = fmt_grouped(p.computed);
    let on_clear = {
        let cb = p.on_action.clone();
        Callback::from(move |_| cb.emit(SessionAction::ClearOverride { category }))
    };

    html! {
        <div class={classes!("override-editor", p.overridden.then_some("override-active"))}>
            <label class="control">
                <span class="control-label">{ t("detail.override.title") }</span>
                <span class="override-input">
                    <span aria-hidden="true">{"$"}</span>
                    <input
                        id={format!("override-{category}")}
                        type="text"
                        inputmode="decimal"
                        placeholder={computed.clone()}
                        aria-label={t("detail.override.placeholder")}
                        value={p.text.clone().unwrap_or_default()}
                        oninput={on_input}
                    />
                    if p.text.is_some() {
                        <button type="button" class="link-btn" onclick={on_clear}>{ t("detail.override.clear") }</button>
                    }
                </span>
            </label>
            if p.overridden {
                <p class="hint">{ tr1("detail.override.active", "computed", &computed) }</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn active_override_shows_the_computed_value() {
        crate::i18n::set_lang("en");
        let props = Props {
            category: CostCategory::Food,
            computed: 42,
            text: Some("50".into()),
            overridden: true,
            on_action: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<OverrideEditor>::with_props(props).render());
        assert!(html.contains("Computed estimate: $42."));
        assert!(html.contains("Clear"));
    }

    #[test]
    fn empty_override_has_no_clear_button() {
        crate::i18n::set_lang("en");
        let props = Props {
            category: CostCategory::Grooming,
            computed: 30,
            text: None,
            overridden: false,
            on_action: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<OverrideEditor>::with_props(props).render());
        assert!(html.contains("Use your own amount"));
        assert!(html.contains("placeholder=\"30\""));
        assert!(!html.contains("Clear"));
    }
}
