#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod state;
pub mod view;

pub use view::{ShellProps, render_shell};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    let on_navigate = Callback::from(move |target: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&target);
        }
    });

    render_shell(&ShellProps {
        route,
        lang: *app_state.lang,
        weight_unit: *app_state.weight_unit,
        on_navigate,
        on_lang_change: app_state.lang_change(),
        on_unit_change: app_state.unit_change(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;
    use futures::executor::block_on;
    use petpat_core::{Lang, WeightUnit};
    use yew::prelude::*;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        route: Route,
    }

    #[function_component(ShellHarness)]
    fn shell_harness(props: &HarnessProps) -> Html {
        render_shell(&ShellProps {
            route: props.route,
            lang: Lang::En,
            weight_unit: WeightUnit::Lbs,
            on_navigate: Callback::noop(),
            on_lang_change: Callback::noop(),
            on_unit_change: Callback::noop(),
        })
    }

    fn render(route: Route) -> String {
        crate::i18n::set_lang("en");
        block_on(LocalServerRenderer::<ShellHarness>::with_props(HarnessProps { route }).render())
    }

    #[test]
    fn every_route_renders_inside_the_shell() {
        let home = render(Route::Home);
        assert!(home.contains("real cost"));
        assert!(home.contains("<footer"));
        assert!(render(Route::Method).contains("How we calculate"));
        assert!(render(Route::Calculator).contains("Which dog are you considering?"));
        assert!(render(Route::NotFound).contains("Page not found"));
    }
}
