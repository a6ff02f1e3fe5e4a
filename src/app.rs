//! Page shell and the echo readout component.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;
use tracing::error;

use crate::api::{EchoApi, EchoBackend};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-container">
            <EchoView api=EchoApi::same_origin()/>
        </div>
    }
}

/// Static header block that fires one echo request when it mounts and shows
/// whatever came back. A failed request is logged and the readout stays empty.
#[component]
pub fn EchoView<Backend>(api: Backend) -> impl IntoView
where
    Backend: EchoBackend,
{
    let (echo_result, set_echo_result) = create_signal(String::new());

    // A response landing after unmount must not touch the signal.
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = Rc::clone(&alive);
        move || alive.set(false)
    });

    spawn_local(async move {
        match api.fetch_echo().await {
            Ok(text) if alive.get() => set_echo_result.set(text),
            Ok(_) => {}
            Err(err) => error!("echo request failed: {err}"),
        }
    });

    view! {
        <header class="echo-header">
            <img src="logo.svg" class="echo-logo" alt="logo"/>
            <p>
                "Edit " <code>"src/app.rs"</code> " and save to reload. "
                "echo results: " {echo_result}
            </p>
            <a
                class="echo-link"
                href="https://leptos.dev"
                target="_blank"
                rel="noopener noreferrer"
            >
                "Learn Leptos"
            </a>
        </header>
    }
}
