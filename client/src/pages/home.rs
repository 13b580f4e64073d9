//! Public landing page.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::state::language::{tr, use_language};

const STEPS: [(&str, &str); 3] = [
    ("home.step1.title", "home.step1.desc"),
    ("home.step2.title", "home.step2.desc"),
    ("home.step3.title", "home.step3.desc"),
];

const FEATURES: [(&str, &str); 4] = [
    ("home.feature1.title", "home.feature1.desc"),
    ("home.feature2.title", "home.feature2.desc"),
    ("home.feature3.title", "home.feature3.desc"),
    ("home.feature4.title", "home.feature4.desc"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let language = use_language();
    let card = move |class: &'static str, (title, desc): (&'static str, &'static str)| {
        view! {
            <div class=class>
                <h3>{tr(language, title)}</h3>
                <p>{tr(language, desc)}</p>
            </div>
        }
    };

    view! {
        <Layout active="/">
            <section class="hero">
                <span class="hero__badge">{tr(language, "home.badge")}</span>
                <h1 class="hero__title">
                    <strong>{tr(language, "home.title.sphere")}</strong>
                    {tr(language, "home.title.reads")}
                    <br />
                    {tr(language, "home.title.uncovers")}
                    <br />
                    <strong>{tr(language, "home.title.ready")}</strong>
                    {tr(language, "home.title.ai")}
                </h1>
                <a href="/upload" class="hero__cta">{tr(language, "home.tryFree")}</a>
                <p class="hero__secure">{tr(language, "home.secure")}</p>
            </section>
            <section class="steps">
                <h2>{tr(language, "home.steps.title")}</h2>
                <p>{tr(language, "home.steps.subtitle")}</p>
                <div class="steps__grid">
                    {STEPS.into_iter().map(|step| card("steps__card", step)).collect_view()}
                </div>
            </section>
            <section class="features">
                <span class="features__badge">{tr(language, "home.premium")}</span>
                <h2>{tr(language, "home.features.title")}</h2>
                <div class="features__grid">
                    {FEATURES.into_iter().map(|feature| card("features__card", feature)).collect_view()}
                </div>
            </section>
        </Layout>
    }
}
