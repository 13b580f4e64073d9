//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::net::api;
use crate::pages::{
    analyzer::AnalyzerPage, history::HistoryPage, home::HomePage, login::LoginPage, profile::ProfilePage,
    proposal::ProposalPage, signup::SignUpPage, upload::UploadPage,
};
use crate::state::auth::AuthContext;
use crate::state::language::{self, tr};

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
/// Provides the language and auth contexts and sets up client-side routing.
/// Without a Supabase configuration baked into the build there is nothing to
/// talk to, so only a notice is rendered.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let language = language::install();

    let config = match api::config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("sphere is not configured: {e}");
            return view! {
                <Title text="Sphere"/>
                <div class="page-placeholder">
                    <p>{tr(language, "common.notConfigured")}</p>
                </div>
            }
            .into_any();
        }
    };
    AuthContext::install(&config);

    view! {
        <Stylesheet id="leptos" href="/pkg/sphere.css"/>
        <Title text="Sphere"/>

        <Router>
            <Routes fallback=move || {
                view! {
                    <Layout active="">
                        <p class="page-placeholder">{tr(language, "common.notFound")}</p>
                    </Layout>
                }
            }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("upload") view=UploadPage/>
                <Route path=StaticSegment("analyzer") view=AnalyzerPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
                <Route path=(StaticSegment("proposal"), ParamSegment("document_id")) view=ProposalPage/>
            </Routes>
        </Router>
    }
    .into_any()
}
