use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/calculator")]
    Calculator,
    #[at("/method")]
    Method,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Pages linked from the navbar and footer.
    pub const NAV: [Self; 2] = [Self::Calculator, Self::Method];

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Calculator => "nav.calculator",
            Self::Method => "nav.method",
            Self::NotFound => "not_found.title",
        }
    }

    /// Full href including the deployment base path.
    #[must_use]
    pub fn href(self) -> String {
        crate::paths::asset_path(&self.to_path())
    }
}
