//! Root application component and the SSR HTML shell.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::chat_view::{ChatView, TITLE};
use crate::config::GatewayConfig;
use crate::net::api::HttpChatGateway;
use crate::net::gateway::ChatGateway;

/// HTML shell for hosts that server-render the app before hydration.
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
/// Provides the chat gateway to the view as an explicit dependency.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gateway: Arc<dyn ChatGateway> = Arc::new(HttpChatGateway::new(GatewayConfig::from_build_env()));
    provide_context(gateway);

    view! {
        <Stylesheet id="leptos" href="/pkg/stats-assistant.css"/>
        <Title text=TITLE/>

        <main class="app">
            <ChatView/>
        </main>
    }
}
