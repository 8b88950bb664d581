use leptos::prelude::*;
use leptos_router::components::A;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    // BUILD_TIME is RFC 3339, so the year is the first four characters.
    let year = &BUILD_TIME[..4];

    view! {
        <footer class="border-t border-slate-800 mt-16">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <p class="text-sm text-slate-400">
                    "© " {year.to_string()} " Ali Youssef. Built with Rust and Leptos."
                </p>
                <div class="flex items-center gap-6">
                    <a
                        href="https://github.com/Ali-ysf-dev"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-slate-400 hover:text-slate-100 transition-colors duration-200"
                        aria-label="GitHub Profile"
                    >
                        "GitHub"
                    </a>
                    <a
                        href="mailto:contact@aliyoussef.tech"
                        class="text-slate-400 hover:text-slate-100 transition-colors duration-200"
                    >
                        "Email"
                    </a>
                    <A
                        href="/contact"
                        attr:class="text-cyan-400 hover:text-cyan-300 transition-colors duration-200"
                    >
                        "Work with me"
                    </A>
                </div>
            </div>
        </footer>
    }
}
