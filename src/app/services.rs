use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::animate::FadeIn;
use super::stack::{ScrollStack, ScrollStackItem};
use crate::scroll_stack::{Anchor, ScrollSource, StackConfig};

struct Service {
    title: &'static str,
    pitch: &'static str,
    bullets: [&'static str; 3],
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Web Development",
        pitch: "Complete sites from first wireframe to DNS cutover.",
        bullets: [
            "Responsive, mobile-first layouts",
            "Semantic, accessible markup",
            "Deployment and hosting setup",
        ],
    },
    Service {
        title: "UI Implementation",
        pitch: "Pixel-faithful builds of your Figma or Sketch designs.",
        bullets: [
            "Design-system friendly components",
            "Smooth, restrained animation",
            "Dark mode and theming support",
        ],
    },
    Service {
        title: "Performance Tuning",
        pitch: "Existing site feeling sluggish? I find out why.",
        bullets: [
            "Core Web Vitals audits",
            "Image and bundle diet plans",
            "Caching and CDN configuration",
        ],
    },
    Service {
        title: "API Integration",
        pitch: "Wiring your front end to the services it needs.",
        bullets: [
            "Third-party API plumbing",
            "Contact and checkout flows",
            "Graceful error and retry handling",
        ],
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    let stack_config = StackConfig {
        card_gap_px: 80.0,
        stacked_offset_px: 28.0,
        pin_anchor: Anchor::Percent(15.0),
        scale_completion_anchor: Anchor::Percent(8.0),
        base_scale: 0.88,
        scroll_source: ScrollSource::Window,
        ..StackConfig::default()
    };

    view! {
        <Title text="Services" />
        <div class="mx-auto max-w-4xl px-4 sm:px-6 lg:px-8 py-16">
            <FadeIn>
                <h1 class="text-4xl font-bold mb-4">"Services"</h1>
                <p class="text-slate-400 mb-12 max-w-2xl">
                    "Four ways I can help — keep scrolling and they'll stack up for you."
                </p>
            </FadeIn>

            <section>
                <ScrollStack
                    config=stack_config
                    on_stack_complete=Callback::new(|_| {
                        log::debug!("service stack fully pinned");
                    })
                >
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <ScrollStackItem>
                                    <div class="rounded-xl border border-slate-700 bg-slate-900 shadow-xl p-8">
                                        <h2 class="text-2xl font-bold mb-2">{service.title}</h2>
                                        <p class="text-slate-400 mb-6">{service.pitch}</p>
                                        <ul class="space-y-2">
                                            {service
                                                .bullets
                                                .iter()
                                                .map(|bullet| {
                                                    view! {
                                                        <li class="flex items-start gap-2 text-slate-300">
                                                            <span class="text-cyan-400 mt-0.5">"▹"</span>
                                                            {*bullet}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </ScrollStackItem>
                            }
                        })
                        .collect_view()}
                </ScrollStack>
            </section>

            <FadeIn class="mt-16">
                <div class="text-center">
                    <p class="text-slate-300 mb-4">
                        "Not sure which of these you need? That's what the first call is for."
                    </p>
                    <A
                        href="/contact"
                        attr:class="inline-block px-6 py-3 rounded-md bg-cyan-500/20 text-cyan-300 border border-cyan-500/40 hover:bg-cyan-500/30 transition-all duration-200 font-medium"
                    >
                        "Start a project"
                    </A>
                </div>
            </FadeIn>
        </div>
    }
}
