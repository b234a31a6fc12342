use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub to: Route,
    pub on_navigate: Callback<Route>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor with a real href that routes in place on plain clicks.
#[function_component(NavLink)]
pub fn nav_link(props: &Props) -> Html {
    let onclick = {
        let cb = props.on_navigate.clone();
        let to = props.to;
        Callback::from(move |e: MouseEvent| {
            if e.ctrl_key() || e.meta_key() || e.shift_key() {
                return;
            }
            e.prevent_default();
            cb.emit(to);
        })
    };
    html! {
        <a href={props.to.href()} class={props.class.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}
