use dioxus::prelude::*;

pub mod home;

use home::Home;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}
