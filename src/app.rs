//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{require_auth::RequireAuth, require_data::RequireData};
use crate::config::AppConfig;
use crate::pages::{admin::AdminPage, board::BoardPage, login::LoginPage};
use crate::services::admin::{AdminService, AppAdminService};
use crate::state::{
    auth::AuthState,
    session::SessionStore,
    tasks::{TasksState, local_tasks},
    users::UserStore,
};
use crate::util::storage::{LocalStorage, SharedStorage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the stores and the admin service once, provides them as context,
/// and sets up client-side routing with guarded routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let storage: SharedStorage = Arc::new(LocalStorage);

    let users = RwSignal::new(UserStore::load(storage.clone()));
    let session = RwSignal::new(SessionStore::load(storage));
    let auth = RwSignal::new(AuthState::default());
    let tasks = RwSignal::new(TasksState::default());
    if !config.data_source.is_remote() {
        tasks.update(|t| t.load_local(local_tasks()));
    }
    let admin: AppAdminService = AdminService::new(users, session);

    // Auth stays `Loading` until the client has mounted, then follows the
    // session and account list.
    Effect::new(move || {
        let next = session.with(|s| users.with(|u| AuthState::resolved(s, u)));
        if auth.get_untracked() != next {
            auth.set(next);
        }
    });

    provide_context(config);
    provide_context(users);
    provide_context(session);
    provide_context(auth);
    provide_context(tasks);
    provide_context(admin);

    view! {
        <Stylesheet id="leptos" href="/pkg/taskgate.css"/>
        <Title text="Taskgate"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! {
                        <RequireAuth>
                            <RequireData>
                                <BoardPage/>
                            </RequireData>
                        </RequireAuth>
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! {
                        <RequireAuth>
                            <AdminPage/>
                        </RequireAuth>
                    }
                />
            </Routes>
        </Router>
    }
}
