use leptos::{html, prelude::*, task::spawn_local};
use leptos_meta::Title;

use super::animate::FadeIn;
use crate::email::{validate, ContactForm, Field};

#[server]
pub async fn send_contact_email(form: ContactForm) -> Result<(), ServerFnError> {
    if !crate::email::validate(&form).is_empty() {
        return Err(ServerFnError::new("invalid contact form"));
    }
    crate::email::send(&form).await.map_err(|err| {
        log::error!("contact email delivery failed: {err}");
        ServerFnError::new("couldn't deliver the message")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed,
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let company_ref = NodeRef::<html::Input>::new();
    let project_type_ref = NodeRef::<html::Select>::new();
    let budget_ref = NodeRef::<html::Select>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let (errors, set_errors) = signal(Vec::<(Field, &'static str)>::new());
    let (state, set_state) = signal(SubmitState::Idle);

    let field_error = move |field: Field| {
        errors
            .get()
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| {
                view! { <p class="text-sm text-red-400 mt-1">{*message}</p> }
            })
    };

    let read_form = move || -> Option<ContactForm> {
        Some(ContactForm {
            name: name_ref.get_untracked()?.value(),
            email: email_ref.get_untracked()?.value(),
            company: company_ref.get_untracked()?.value(),
            project_type: project_type_ref.get_untracked()?.value(),
            budget: budget_ref.get_untracked()?.value(),
            message: message_ref.get_untracked()?.value(),
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked() == SubmitState::Sending {
            return;
        }
        let Some(form) = read_form() else {
            set_state.set(SubmitState::Failed);
            return;
        };
        let problems = validate(&form);
        if !problems.is_empty() {
            set_errors.set(problems);
            return;
        }
        set_errors.set(Vec::new());
        set_state.set(SubmitState::Sending);
        spawn_local(async move {
            match send_contact_email(form).await {
                Ok(()) => set_state.set(SubmitState::Sent),
                Err(err) => {
                    log::error!("contact form submission failed: {err}");
                    set_state.set(SubmitState::Failed);
                }
            }
        });
    };

    let input_class = "w-full px-4 py-2 rounded-md border border-slate-700 bg-slate-900 \
                       text-slate-100 placeholder-slate-500 focus:outline-none \
                       focus:ring-2 focus:ring-cyan-500 focus:border-cyan-500 \
                       transition-all duration-200";

    view! {
        <Title text="Contact" />
        <div class="mx-auto max-w-3xl px-4 sm:px-6 lg:px-8 py-16">
            <FadeIn>
                <h1 class="text-4xl font-bold mb-4">"Let's talk"</h1>
                <p class="text-slate-400 mb-10">
                    "Tell me a little about your project and I'll get back to you "
                    "within two working days."
                </p>
            </FadeIn>

            {move || match state.get() {
                SubmitState::Sent => {
                    view! {
                        <div class="rounded-lg border border-emerald-500/40 bg-emerald-500/10 p-6 text-emerald-300">
                            "Thanks — your message is on its way. I'll be in touch soon."
                        </div>
                    }
                        .into_any()
                }
                _ => {
                    view! {
                        <form class="space-y-6" on:submit=on_submit>
                            <div class="grid sm:grid-cols-2 gap-6">
                                <div>
                                    <label for="name" class="block text-sm font-medium mb-2">
                                        "Name *"
                                    </label>
                                    <input
                                        id="name"
                                        node_ref=name_ref
                                        type="text"
                                        placeholder="Your name"
                                        class=input_class
                                    />
                                    {move || field_error(Field::Name)}
                                </div>
                                <div>
                                    <label for="email" class="block text-sm font-medium mb-2">
                                        "Email *"
                                    </label>
                                    <input
                                        id="email"
                                        node_ref=email_ref
                                        type="email"
                                        placeholder="you@example.com"
                                        class=input_class
                                    />
                                    {move || field_error(Field::Email)}
                                </div>
                            </div>
                            <div class="grid sm:grid-cols-3 gap-6">
                                <div>
                                    <label for="company" class="block text-sm font-medium mb-2">
                                        "Company"
                                    </label>
                                    <input
                                        id="company"
                                        node_ref=company_ref
                                        type="text"
                                        placeholder="Optional"
                                        class=input_class
                                    />
                                </div>
                                <div>
                                    <label for="project_type" class="block text-sm font-medium mb-2">
                                        "Project type"
                                    </label>
                                    <select id="project_type" node_ref=project_type_ref class=input_class>
                                        <option value="">"Not sure yet"</option>
                                        <option value="website">"New website"</option>
                                        <option value="redesign">"Redesign"</option>
                                        <option value="performance">"Performance rescue"</option>
                                        <option value="integration">"API integration"</option>
                                    </select>
                                </div>
                                <div>
                                    <label for="budget" class="block text-sm font-medium mb-2">
                                        "Budget"
                                    </label>
                                    <select id="budget" node_ref=budget_ref class=input_class>
                                        <option value="">"Prefer not to say"</option>
                                        <option value="small">"Under $2k"</option>
                                        <option value="medium">"$2k – $10k"</option>
                                        <option value="large">"$10k+"</option>
                                    </select>
                                </div>
                            </div>
                            <div>
                                <label for="message" class="block text-sm font-medium mb-2">
                                    "Message *"
                                </label>
                                <textarea
                                    id="message"
                                    node_ref=message_ref
                                    rows=6
                                    placeholder="What are we building?"
                                    class=input_class
                                ></textarea>
                                {move || field_error(Field::Message)}
                            </div>
                            {move || {
                                (state.get() == SubmitState::Failed)
                                    .then(|| {
                                        view! {
                                            <div class="rounded-lg border border-red-500/40 bg-red-500/10 p-4 text-red-300">
                                                "Something went wrong sending your message. Please try "
                                                "again in a little while, or email me directly at "
                                                <a class="underline" href="mailto:contact@aliyoussef.tech">
                                                    "contact@aliyoussef.tech"
                                                </a> "."
                                            </div>
                                        }
                                    })
                            }}
                            <button
                                type="submit"
                                class="px-8 py-3 rounded-md bg-cyan-500/20 text-cyan-300 border border-cyan-500/40 hover:bg-cyan-500/30 transition-all duration-200 font-medium disabled:opacity-50"
                                disabled=move || state.get() == SubmitState::Sending
                            >
                                {move || {
                                    if state.get() == SubmitState::Sending {
                                        "Sending…"
                                    } else {
                                        "Send message"
                                    }
                                }}
                            </button>
                        </form>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
