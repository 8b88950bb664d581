use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/skills", "Skills"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);

    // Route changes collapse the mobile menu.
    Effect::new(move |_| {
        pathname.track();
        set_menu_open.set(false);
    });

    let link_class = move |href: &'static str| {
        if pathname.get() == href {
            "text-cyan-400 font-semibold"
        } else {
            "text-slate-300 hover:text-cyan-300 transition-colors duration-200"
        }
    };

    let nav_items = move || {
        NAV_LINKS
            .into_iter()
            .map(|(href, label)| {
                view! {
                    <li>
                        <A href=href attr:class=move || link_class(href)>
                            {label}
                        </A>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class="sticky top-0 z-40 bg-slate-950/80 backdrop-blur border-b border-slate-800">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <A href="/" attr:class="text-xl font-bold tracking-tight">
                    <span class="text-cyan-400">"ali"</span>
                    <span class="text-slate-100">"youssef"</span>
                    <span class="text-cyan-400">".tech"</span>
                </A>
                <nav class="hidden md:block">
                    <ul class="flex items-center gap-8">{nav_items}</ul>
                </nav>
                <button
                    class="md:hidden text-slate-300 hover:text-slate-100 text-2xl"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            {move || {
                menu_open.get().then(|| {
                    view! {
                        <nav class="md:hidden border-t border-slate-800 px-4 pb-4">
                            <ul class="flex flex-col gap-3 pt-3">{nav_items}</ul>
                        </nav>
                    }
                })
            }}
        </header>
    }
}
