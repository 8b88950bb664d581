use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::animate::FadeIn;

struct TimelineEntry {
    period: &'static str,
    role: &'static str,
    place: &'static str,
    summary: &'static str,
}

const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        period: "2023 — now",
        role: "Freelance Front-End Developer",
        place: "Remote",
        summary: "Building marketing sites, dashboards and storefronts for small \
                  businesses, owning everything from design handoff to deployment.",
    },
    TimelineEntry {
        period: "2021 — 2023",
        role: "Junior Web Developer",
        place: "Digital agency",
        summary: "Shipped client sites on tight weekly deadlines and learned to care \
                  about performance budgets, accessibility audits and CMS handover docs.",
    },
    TimelineEntry {
        period: "2019 — 2021",
        role: "Computer Science Studies",
        place: "University",
        summary: "Where side projects took over: game jams, a campus events app and the \
                  first of many personal-site rewrites.",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="mx-auto max-w-4xl px-4 sm:px-6 lg:px-8 py-16">
            <FadeIn>
                <h1 class="text-4xl font-bold mb-6">"About me"</h1>
                <p class="text-slate-300 leading-relaxed mb-4">
                    "I'm Ali, a front-end developer who likes the web best when it's "
                    "fast, readable and a little playful. Most of my work sits where "
                    "design meets engineering: taking a layout and making it feel "
                    "effortless on every screen size."
                </p>
                <p class="text-slate-300 leading-relaxed mb-12">
                    "Away from the keyboard I photograph street markets, over-engineer "
                    "my espresso routine and keep a growing shelf of unfinished side "
                    "projects that taught me more than any course did."
                </p>
            </FadeIn>

            <h2 class="text-2xl font-bold mb-8">"The road so far"</h2>
            <ol class="relative border-l border-slate-800 space-y-10 pl-6">
                {TIMELINE
                    .iter()
                    .map(|entry| {
                        view! {
                            <li>
                                <FadeIn>
                                    <div class="absolute -left-1.5 mt-2 h-3 w-3 rounded-full bg-cyan-400"></div>
                                    <p class="text-sm text-cyan-400 font-medium">{entry.period}</p>
                                    <h3 class="text-lg font-semibold mt-1">
                                        {entry.role} <span class="text-slate-400">" · " {entry.place}</span>
                                    </h3>
                                    <p class="text-slate-400 mt-2 leading-relaxed">{entry.summary}</p>
                                </FadeIn>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <FadeIn class="mt-16">
                <div class="rounded-lg border border-slate-800 bg-slate-900/60 p-6 text-center">
                    <p class="text-lg mb-4">
                        "Curious whether we'd work well together?"
                    </p>
                    <A
                        href="/contact"
                        attr:class="inline-block px-6 py-3 rounded-md bg-cyan-500/20 text-cyan-300 border border-cyan-500/40 hover:bg-cyan-500/30 transition-all duration-200 font-medium"
                    >
                        "Say hello"
                    </A>
                </div>
            </FadeIn>
        </div>
    }
}
