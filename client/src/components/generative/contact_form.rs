//! Prefilled inquiry form. Submission is local only and always succeeds.

use leptos::prelude::*;

use crate::registry::props;

#[component]
pub fn ContactForm(data: props::ContactFormProps) -> impl IntoView {
    let submitted = RwSignal::new(false);
    let name = RwSignal::new(data.prefilled_name.unwrap_or_default());
    let email = RwSignal::new(data.prefilled_email.unwrap_or_default());
    let company = RwSignal::new(data.prefilled_company.unwrap_or_default());
    let message = RwSignal::new(data.prefilled_message);
    let subject = if data.suggested_subject.trim().is_empty() {
        "Get in Touch".to_owned()
    } else {
        data.suggested_subject
    };
    let urgency = data.urgency;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submitted locally");
        submitted.set(true);
    };

    move || {
        if submitted.get() {
            return view! {
                <div class="tambo-contact tambo-contact--success">
                    <div class="tambo-contact__check">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <polyline points="20 6 9 17 4 12"></polyline>
                        </svg>
                    </div>
                    <h4>"Message sent!"</h4>
                    <p>"Our team will get back to you within 24 hours."</p>
                </div>
            }
                .into_any();
        }

        view! {
            <form class="tambo-contact" on:submit=on_submit>
                <div class="tambo-contact__header">
                    <h4>{subject.clone()}</h4>
                    {urgency.map(|u| view! { <span class="tambo-tag">{u.label()}</span> })}
                </div>
                <input
                    class="tambo-form-input"
                    type="text"
                    placeholder="Your Name"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="tambo-form-input"
                    type="email"
                    placeholder="Work Email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="tambo-form-input"
                    type="text"
                    placeholder="Company"
                    prop:value=move || company.get()
                    on:input=move |ev| company.set(event_target_value(&ev))
                />
                <textarea
                    class="tambo-form-input tambo-form-textarea"
                    placeholder="Tell us about your project"
                    rows="4"
                    required=true
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <button class="tambo-form-submit" type="submit">
                    "Send Message"
                </button>
            </form>
        }
            .into_any()
    }
}
