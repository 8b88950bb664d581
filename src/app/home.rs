use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use server_fn::codec::GetUrl;

use super::animate::FadeIn;
use crate::github::{feed_cache_key, Project, RepoSort, GLOBAL_FEED_CACHE};

const FEED_LIMIT: u8 = 6;

#[server(input = GetUrl)]
pub async fn fetch_projects_server(
    limit: u8,
    sort: RepoSort,
) -> Result<Vec<Project>, ServerFnError> {
    Ok(crate::github::fetch_projects(limit, sort).await)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let projects = Resource::new(
        || (),
        |_| async {
            let cache = &*GLOBAL_FEED_CACHE;
            let key = feed_cache_key(FEED_LIMIT, RepoSort::Updated);
            if let Some(cached) = cache.get(&key) {
                return (*cached).clone();
            }
            let feed = fetch_projects_server(FEED_LIMIT, RepoSort::Updated)
                .await
                .unwrap_or_default();
            // only cache on the browser
            #[cfg(feature = "hydrate")]
            cache.insert(key, feed.clone());
            feed
        },
    );

    view! {
        <Title text="Home" />
        <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">
            <section class="flex flex-col justify-center min-h-[60vh] py-16">
                <FadeIn>
                    <p class="text-cyan-400 font-medium mb-4">"Hi, my name is"</p>
                    <h1 class="text-4xl sm:text-6xl font-bold mb-4">"Ali Youssef."</h1>
                    <h2 class="text-2xl sm:text-4xl font-bold text-slate-400 mb-6">
                        "I build things for the web."
                    </h2>
                    <p class="max-w-xl text-slate-300 leading-relaxed mb-8">
                        "Front-end developer focused on fast, accessible interfaces. "
                        "I turn designs into pixel-faithful, production-ready sites and "
                        "enjoy the last 10% of polish most people skip."
                    </p>
                    <div class="flex gap-4">
                        <A
                            href="/contact"
                            attr:class="px-6 py-3 rounded-md bg-cyan-500/20 text-cyan-300 border border-cyan-500/40 hover:bg-cyan-500/30 transition-all duration-200 font-medium"
                        >
                            "Get in touch"
                        </A>
                        <A
                            href="/services"
                            attr:class="px-6 py-3 rounded-md border border-slate-700 text-slate-300 hover:border-slate-500 transition-all duration-200 font-medium"
                        >
                            "What I do"
                        </A>
                    </div>
                </FadeIn>
            </section>

            <section class="py-16">
                <FadeIn>
                    <h2 class="text-3xl font-bold mb-2">"Projects"</h2>
                    <p class="text-slate-400 mb-10">
                        "Pulled live from GitHub — most recently updated first."
                    </p>
                </FadeIn>
                <Transition fallback=move || {
                    view! {
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {(0..FEED_LIMIT)
                                .map(|_| {
                                    view! {
                                        <div class="loading-skeleton h-64 rounded-lg"></div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        let feed = projects.await;
                        if feed.is_empty() {
                            view! {
                                <p class="text-slate-400">
                                    "Couldn't load projects right now — check back soon, or browse "
                                    <a
                                        class="text-cyan-400 hover:text-cyan-300"
                                        href="https://github.com/Ali-ysf-dev"
                                    >
                                        "my GitHub"
                                    </a> " directly."
                                </p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                                    {feed
                                        .into_iter()
                                        .map(|project| view! { <ProjectCard project=project /> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    })}
                </Transition>
            </section>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="group rounded-lg border border-slate-800 bg-slate-900/60 overflow-hidden hover:border-slate-600 hover:-translate-y-1 transition-all duration-200">
            <img
                src=project.image
                alt=format!("{} preview", project.title)
                loading="lazy"
                class="w-full h-40 object-cover border-b border-slate-800"
            />
            <div class="p-5">
                <div class="flex items-center justify-between mb-2">
                    <h3 class="font-semibold text-lg">{project.title.clone()}</h3>
                    {project
                        .featured
                        .then(|| {
                            view! {
                                <span class="text-xs text-amber-300">
                                    "★ " {project.stars}
                                </span>
                            }
                        })}
                </div>
                <p class="text-sm text-slate-400 mb-4 line-clamp-2">
                    {project.short_description}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class=format!(
                                    "text-xs px-2 py-1 rounded-md {}",
                                    tag_color(tag),
                                )>{tag.to_string()}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4 text-sm">
                    <a
                        href=project.code_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-cyan-400 hover:text-cyan-300"
                    >
                        "Code"
                    </a>
                    {project
                        .live_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-cyan-400 hover:text-cyan-300"
                                >
                                    "Live demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}

fn tag_color(tag: &str) -> &'static str {
    match tag {
        "rust" | "typescript" | "react" => "bg-cyan-500/15 text-cyan-300",
        "javascript" | "html" | "css" => "bg-amber-500/15 text-amber-300",
        "python" | "go" => "bg-emerald-500/15 text-emerald-300",
        _ => "bg-slate-700/40 text-slate-300",
    }
}
