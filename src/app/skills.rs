use leptos::prelude::*;
use leptos_meta::Title;

use super::animate::FadeIn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    All,
    Frontend,
    Backend,
    Tools,
    Soft,
}

impl Category {
    fn label(self) -> &'static str {
        match self {
            Category::All => "All Skills",
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Tools => "Tools",
            Category::Soft => "Soft Skills",
        }
    }
}

const FILTERS: [Category; 5] = [
    Category::All,
    Category::Frontend,
    Category::Backend,
    Category::Tools,
    Category::Soft,
];

struct Skill {
    name: &'static str,
    detail: &'static str,
    category: Category,
}

const SKILLS: [Skill; 12] = [
    Skill {
        name: "HTML & CSS",
        detail: "Semantic markup, grid and flex layouts, animations",
        category: Category::Frontend,
    },
    Skill {
        name: "JavaScript / TypeScript",
        detail: "Modern ES, typed component APIs",
        category: Category::Frontend,
    },
    Skill {
        name: "React & Leptos",
        detail: "Component architecture, signals and hooks",
        category: Category::Frontend,
    },
    Skill {
        name: "Tailwind CSS",
        detail: "Design systems without the stylesheet sprawl",
        category: Category::Frontend,
    },
    Skill {
        name: "Rust",
        detail: "WASM front ends and small backend services",
        category: Category::Backend,
    },
    Skill {
        name: "Node.js",
        detail: "REST APIs, scripting, build tooling",
        category: Category::Backend,
    },
    Skill {
        name: "SQL & SQLite",
        detail: "Schema design and query tuning for small apps",
        category: Category::Backend,
    },
    Skill {
        name: "Git & GitHub",
        detail: "Branch discipline, reviews, Actions pipelines",
        category: Category::Tools,
    },
    Skill {
        name: "Figma",
        detail: "Reading and occasionally fixing design files",
        category: Category::Tools,
    },
    Skill {
        name: "Lighthouse & DevTools",
        detail: "Performance profiling and accessibility audits",
        category: Category::Tools,
    },
    Skill {
        name: "Communication",
        detail: "Plain-language updates, honest estimates",
        category: Category::Soft,
    },
    Skill {
        name: "Self-direction",
        detail: "Years of freelancing: nobody chases my deadlines but me",
        category: Category::Soft,
    },
];

#[component]
pub fn SkillsPage() -> impl IntoView {
    let (active, set_active) = signal(Category::All);

    view! {
        <Title text="Skills" />
        <div class="mx-auto max-w-5xl px-4 sm:px-6 lg:px-8 py-16">
            <FadeIn>
                <h1 class="text-4xl font-bold mb-4">"Skills"</h1>
                <p class="text-slate-400 mb-10 max-w-2xl">
                    "The tools I reach for, filtered however you like."
                </p>
            </FadeIn>

            <div class="flex flex-wrap gap-3 mb-10">
                {FILTERS
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == category {
                                        "px-4 py-2 rounded-md bg-cyan-500/20 text-cyan-300 border border-cyan-500/40 font-medium"
                                    } else {
                                        "px-4 py-2 rounded-md border border-slate-700 text-slate-300 hover:border-slate-500 transition-colors duration-200"
                                    }
                                }
                                on:click=move |_| set_active.set(category)
                            >
                                {category.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {move || {
                    let selected = active.get();
                    SKILLS
                        .iter()
                        .filter(|skill| {
                            selected == Category::All || skill.category == selected
                        })
                        .map(|skill| {
                            view! {
                                <div class="rounded-lg border border-slate-800 bg-slate-900/60 p-5 hover:border-slate-600 transition-colors duration-200">
                                    <h3 class="font-semibold mb-1">{skill.name}</h3>
                                    <p class="text-sm text-slate-400">{skill.detail}</p>
                                    <span class="inline-block mt-3 text-xs px-2 py-1 rounded-md bg-slate-700/40 text-slate-300">
                                        {skill.category.label()}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
