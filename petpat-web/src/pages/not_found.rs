use yew::prelude::*;

/// Shown when no route matches.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="mx-auto max-w-xl px-6 py-24 text-center not-found" aria-live="assertive">
            <h1 class="text-3xl font-bold">{ crate::i18n::t("not_found.title") }</h1>
            <p class="mt-4 text-muted">{ crate::i18n::t("not_found.message") }</p>
            <button type="button" class="btn-primary mt-8" onclick={go_home}>
                { crate::i18n::t("not_found.back") }
            </button>
        </section>
    }
}
