mod about;
mod animate;
mod contact;
mod footer;
mod header;
mod home;
mod services;
mod skills;
mod stack;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use about::AboutPage;
use contact::ContactPage;
use footer::Footer;
use header::Header;
use home::HomePage;
use services::ServicesPage;
use skills::SkillsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-slate-950 text-slate-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Ali Youssef - {title}") />

        <Router>
            <ScrollToTop />
            <Header />
            <main class="flex flex-col flex-grow w-full min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/skills") view=SkillsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Reset the window scroll position on every route change.
#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();
    Effect::new(move |_| {
        location.pathname.track();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}


