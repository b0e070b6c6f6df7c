//! Task board: the main protected page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::state::tasks::TasksState;
use crate::state::users::UserStore;
use crate::util::auth::LOGIN_PATH;

#[component]
pub fn BoardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = expect_context::<RwSignal<UserStore>>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let tasks = expect_context::<RwSignal<TasksState>>();
    let navigate = use_navigate();

    let display_name = move || {
        let user_id = auth.get().user_id;
        users.with(|u| user_id.and_then(|id| u.get_by_id(&id).map(|user| user.name.clone())))
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        session.update(SessionStore::clear);
        navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <div class="board-page">
            <header class="board-page__header">
                <h1>"Tasks"</h1>
                <span class="board-page__user">{display_name}</span>
                <a class="btn" href="/admin">"Admin"</a>
                <button class="btn" on:click=on_sign_out>"Sign Out"</button>
            </header>
            <ul class="board-page__tasks">
                <For
                    each=move || tasks.get().items
                    key=|task| task.id.clone()
                    children=|task| {
                        view! {
                            <li class="task-card" class:task-card--done=task.done>
                                {task.title}
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
