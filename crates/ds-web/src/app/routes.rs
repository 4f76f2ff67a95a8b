use dioxus::prelude::*;

use crate::pages::{DashboardPage, NotFoundPage};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Routes {
    #[route("/")]
    DashboardPage {},
    #[route("/:..route")]
    NotFoundPage { route: Vec<String> },
}
