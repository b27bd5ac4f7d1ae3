use leptos::prelude::LeptosOptions;
use leptos_axum::AxumRouteListing;
use state::server::AppState;

pub struct AppStateRes {
    pub app_state: AppState,
}

pub struct AppStateBuilder {
    leptos_options: LeptosOptions,
    routes: Vec<AxumRouteListing>,
}

impl AppStateBuilder {
    pub fn new(leptos_options: LeptosOptions, routes: Vec<AxumRouteListing>) -> Self {
        Self {
            leptos_options,
            routes,
        }
    }

    pub fn build(self) -> AppStateRes {
        AppStateRes {
            app_state: AppState {
                leptos_options: self.leptos_options,
                routes: self.routes,
            },
        }
    }
}
