use crate::i18n::{t, tr1};
use once_cell::sync::Lazy;
use petpat_core::{Breed, BreedCatalog, Lang, WeightUnit};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

static CATALOG: Lazy<BreedCatalog> = Lazy::new(BreedCatalog::load_from_static);

const FULLSCREEN_CLASS: &str = "fullscreen";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub weight_unit: WeightUnit,
    pub on_select: Callback<Breed>,
    pub on_skip: Callback<()>,
    /// Start with the list open; the page keeps it collapsed.
    #[prop_or_default]
    pub expanded: bool,
}

fn breed_row(breed: &Breed, lang: Lang, unit: WeightUnit, on_select: &Callback<Breed>) -> Html {
    let (primary, secondary) = match lang {
        Lang::En => (breed.name_en.as_str(), breed.name_zh.as_str()),
        Lang::Zh => (breed.display_name(lang.as_str()), breed.name_en.as_str()),
    };
    let avg = tr1("calc.breed.avg_weight", "weight", &unit.format(breed.average_weight()));
    let onclick = {
        let cb = on_select.clone();
        let breed = breed.clone();
        Callback::from(move |_| cb.emit(breed.clone()))
    };
    html! {
        <li>
            <button type="button" class="breed-row" {onclick}>
                <span class="breed-names">
                    <span class="breed-name">{ primary }</span>
                    <span class="breed-sub">{ secondary }{" · "}{ avg }</span>
                </span>
                <span class="breed-meta">
                    <span class="breed-range">{ unit.format_range(breed.weight_min, breed.weight_max) }</span>
                    <span class="size-chip">{ t(breed.size().i18n_key()) }</span>
                </span>
            </button>
        </li>
    }
}

#[function_component(BreedSelect)]
pub fn breed_select(p: &Props) -> Html {
    let query = use_state(String::new);
    let expanded = use_state(|| p.expanded);
    let background = use_state(|| None::<String>);

    {
        let background = background.clone();
        use_effect_with((), move |()| {
            crate::dom::set_body_class(FULLSCREEN_CLASS, true);
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_image_list().await {
                    Ok(images) => {
                        let mut rng = crate::api::background_rng();
                        background.set(crate::api::pick_background(&images, &mut rng));
                    }
                    Err(err) => log::warn!("no background image: {err}"),
                }
            });
            #[cfg(not(target_arch = "wasm32"))]
            let _ = background;
            || crate::dom::set_body_class(FULLSCREEN_CLASS, false)
        });
    }

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };
    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                query.set(input.value());
            }
        })
    };
    let on_skip = {
        let cb = p.on_skip.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let matches = CATALOG.search(&query);

    html! {
        <section class="breed-select">
            <div class="breed-bg" aria-hidden="true">
                if let Some(src) = (*background).clone() {
                    <img src={src} alt="" class="breed-bg-img" />
                }
                <div class="breed-bg-overlay" />
            </div>
            <div class="breed-select-inner">
                <header class="breed-header">
                    <h1>{ t("calc.breed.title") }</h1>
                    <p>{ t("calc.breed.subtitle") }</p>
                </header>
                <div class="breed-panel">
                    <button type="button" class="breed-toggle" aria-expanded={(*expanded).to_string()} onclick={on_toggle}>
                        <span>{ t("calc.breed.search_placeholder") }</span>
                        <span class={classes!("chevron", (*expanded).then_some("chevron-open"))} aria-hidden="true">{"⌄"}</span>
                    </button>
                    if *expanded {
                        <div class="breed-body">
                            <input
                                type="search"
                                class="breed-search"
                                placeholder={t("calc.breed.search_placeholder")}
                                value={(*query).clone()}
                                oninput={on_input}
                            />
                            <ul class="breed-list">
                                if matches.is_empty() {
                                    <li class="breed-empty">{ t("calc.breed.no_results") }</li>
                                }
                                { for matches.iter().map(|b| breed_row(b, p.lang, p.weight_unit, &p.on_select)) }
                            </ul>
                        </div>
                    }
                </div>
                <div class="breed-skip">
                    <button type="button" class="skip-btn" onclick={on_skip}>
                        { t("calc.breed.skip") }{" →"}
                    </button>
                    <p>{ t("calc.breed.skip_desc") }</p>
                </div>
            </div>
        </section>
    }
}
