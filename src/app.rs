use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::{
    About, Contact, ExperienceTimeline, Footer, Header, Hero, Portfolio, Services, Skills,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/jdcosta.css"/>

        <Title text="Julian D Costa"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// The whole site is one page: fixed nav, then the sections in their
/// anchor order, then the footer.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Header />
            <Hero />
            <About />
            <Skills />
            <Services />
            <Portfolio />
            <ExperienceTimeline />
            <Contact />
            <Footer />
        </div>
    }
}
