//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpIdentityService;
use crate::net::identity::{IdentityHandle, IdentityService};
use crate::pages::panel::AuthPanel;
use crate::state::session::SessionFeed;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The server provides a [`ClientConfig`] through context; it is written into
/// `<meta>` tags so the hydrated app reads the same values.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let config_tags = config
        .meta_tags()
        .into_iter()
        .map(|(name, content)| view! { <meta name=name content=content/> })
        .collect_view();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {config_tags}
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

/// Configuration for this render: server context during SSR, `<meta>` tags
/// in the browser.
fn resolve_config() -> ClientConfig {
    #[cfg(feature = "hydrate")]
    {
        ClientConfig::from_document()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use_context::<ClientConfig>().unwrap_or_default()
    }
}

/// Root application component.
///
/// Provides the client config and the identity service handle, then routes
/// everything to the auth panel.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = resolve_config();
    let service: Rc<dyn IdentityService> = Rc::new(HttpIdentityService::new(&config.api_base, SessionFeed::new()));
    let identity: IdentityHandle = StoredValue::new_local(service);

    provide_context(config);
    provide_context(identity);

    view! {
        <Stylesheet id="leptos" href="/pkg/keygate.css"/>
        <Title text="Keygate"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AuthPanel/>
            </Routes>
        </Router>
    }
}
