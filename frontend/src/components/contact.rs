use log::info;
use yew::prelude::*;

use crate::content::Contact as ContactContent;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: ContactContent,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let contact = &props.contact;

    // The form only collects input; nothing is sent anywhere.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted, no delivery configured");
    });

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="contact-bg-elements">
                    <div class="contact-shape shape-a animate-float hover-pulse"></div>
                    <div class="contact-shape shape-b animate-float delay-200 hover-jello"></div>
                    <div class="contact-shape shape-c animate-float delay-400 hover-wobble"></div>
                </div>

                <div class="section-header scroll-animate" data-animation="fade-in" data-delay="100">
                    <h2 class="section-title">{"Let's Work Together"}</h2>
                    <p class="section-subtitle">{"Ready to take your e-commerce business to the next level?"}</p>
                </div>

                <div class="contact-card scroll-animate" data-animation="slide-up" data-delay="200">
                    <div class="contact-content">
                        <div class="contact-info">
                            <h3 class="contact-info-title scroll-animate" data-animation="slide-left" data-delay="300">
                                {"Get in Touch"}
                            </h3>
                            <p class="contact-info-subtitle scroll-animate" data-animation="slide-left" data-delay="400">
                                {"I'm always interested in hearing about new projects and opportunities."}
                            </p>

                            { for contact.channels.iter().enumerate().map(|(i, channel)| html! {
                                <div class="contact-item scroll-animate" data-animation="slide-left" data-delay={(500 + i * 100).to_string()}>
                                    <div class="contact-icon animate-pulse hover-bounce" style={format!("color: {};", channel.accent.css_var())}>
                                        {channel.icon.clone()}
                                    </div>
                                    <div class="contact-details">
                                        <h4>{channel.label.clone()}</h4>
                                        {
                                            match &channel.href {
                                                Some(href) => {
                                                    let external = href.starts_with("http");
                                                    html! {
                                                        <a
                                                            href={href.clone()}
                                                            class="contact-link hover-shimmer"
                                                            target={external.then(|| "_blank")}
                                                            rel={external.then(|| "noopener noreferrer")}
                                                        >
                                                            {channel.text.clone()}
                                                        </a>
                                                    }
                                                }
                                                None => html! { <p>{channel.text.clone()}</p> },
                                            }
                                        }
                                    </div>
                                </div>
                            }) }

                            <div class="social-links scroll-animate" data-animation="slide-left" data-delay="800">
                                { for contact.socials.iter().map(|social| html! {
                                    <a
                                        href={social.href.clone()}
                                        class="social-link hover-jello"
                                        aria-label={social.label.clone()}
                                        style={format!("color: {};", social.accent.css_var())}
                                    >
                                        {social.label.clone()}
                                    </a>
                                }) }
                            </div>
                        </div>

                        <div class="contact-form-container scroll-animate" data-animation="slide-right" data-delay="900">
                            <form class="contact-form" {onsubmit}>
                                <div class="form-header scroll-animate" data-animation="fade-in" data-delay="1000">
                                    <h3>{"Send Me a Message"}</h3>
                                </div>
                                <div class="form-row">
                                    <div class="form-group scroll-animate" data-animation="slide-up" data-delay="1100">
                                        <label for="name">{"Name"}</label>
                                        <input type="text" id="name" placeholder="Your Name" required=true class="hover-shimmer" />
                                    </div>
                                    <div class="form-group scroll-animate" data-animation="slide-up" data-delay="1200">
                                        <label for="email">{"Email"}</label>
                                        <input type="email" id="email" placeholder="Your Email" required=true class="hover-shimmer" />
                                    </div>
                                </div>
                                <div class="form-group scroll-animate" data-animation="slide-up" data-delay="1300">
                                    <label for="project">{"Project Type"}</label>
                                    <select id="project" required=true class="hover-shimmer">
                                        <option value="" disabled=true selected=true>{"Select Project Type"}</option>
                                        { for contact.project_types.iter().map(|t| html! {
                                            <option value={t.value.clone()}>{t.label.clone()}</option>
                                        }) }
                                    </select>
                                </div>
                                <div class="form-group scroll-animate" data-animation="slide-up" data-delay="1400">
                                    <label for="message">{"Message"}</label>
                                    <textarea id="message" placeholder="Tell me about your project..." rows="5" required=true class="hover-shimmer" />
                                </div>
                                <button type="submit" class="btn btn-primary submit-btn hover-jello scroll-animate" data-animation="fade-in" data-delay="1500">
                                    <span>{"Send Message"}</span>
                                    <span class="animate-float">{"➤"}</span>
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact {
                    position: relative;
                    padding: 6rem 2rem;
                    background: linear-gradient(135deg, #f0fdfa 0%, #faf5ff 100%);
                    overflow: hidden;
                }
                .contact-bg-elements {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .contact-shape {
                    position: absolute;
                    border-radius: 50%;
                    opacity: 0.15;
                }
                .shape-a { width: 180px; height: 180px; top: 10%; left: 5%; background: var(--accent-purple); }
                .shape-b { width: 120px; height: 120px; top: 60%; right: 8%; background: var(--accent-teal); }
                .shape-c { width: 90px; height: 90px; bottom: 10%; left: 45%; background: var(--accent-pink); }
                .contact-card {
                    position: relative;
                    background: white;
                    border-radius: 24px;
                    box-shadow: 0 20px 48px rgba(0, 0, 0, 0.08);
                    padding: 3rem;
                }
                .contact-content {
                    display: grid;
                    grid-template-columns: 1fr 1.3fr;
                    gap: 3rem;
                }
                .contact-item {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    margin-bottom: 1.5rem;
                }
                .contact-icon {
                    font-size: 1.25rem;
                    width: 44px;
                    height: 44px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 12px;
                    background: #f5f3ff;
                }
                .contact-details h4 {
                    margin: 0 0 0.25rem;
                }
                .contact-link {
                    color: var(--text-light);
                    text-decoration: none;
                }
                .social-links {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .social-link {
                    font-weight: 600;
                    text-decoration: none;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1.25rem;
                }
                .form-group label {
                    font-weight: 600;
                    margin-bottom: 0.4rem;
                }
                .form-group input,
                .form-group select,
                .form-group textarea {
                    padding: 0.8rem 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 10px;
                    font: inherit;
                }
                .submit-btn {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.6rem;
                }
                @media (max-width: 900px) {
                    .contact-content,
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                    .contact-card {
                        padding: 2rem 1.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
