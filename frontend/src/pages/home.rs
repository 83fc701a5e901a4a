use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, portfolio::Portfolio,
    services::Services,
};
use crate::content::SiteContent;

/// Entrance animations, applied once by the reveal trigger. The fill is
/// `backwards` so inline transforms written after the reveal stay visible.
const ENTRANCE_STYLES: &str = r#"
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes slideUp {
    from { opacity: 0; transform: translateY(40px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes slideLeft {
    from { opacity: 0; transform: translateX(40px); }
    to { opacity: 1; transform: translateX(0); }
}
@keyframes slideRight {
    from { opacity: 0; transform: translateX(-40px); }
    to { opacity: 1; transform: translateX(0); }
}
.scroll-animate {
    transition: opacity 0.6s ease;
}
.animate-fade-in { animation: fadeIn 0.8s ease-out backwards; }
.animate-slide-up { animation: slideUp 0.8s ease-out backwards; }
.animate-slide-left { animation: slideLeft 0.8s ease-out backwards; }
.animate-slide-right { animation: slideRight 0.8s ease-out backwards; }
"#;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: Rc<SiteContent>,
}

/// The single page: every section in document order plus the shared styles
/// the reveal and hover effects rely on.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = &props.content;

    html! {
        <main class="home">
            <Hero owner={content.owner.clone()} />
            <About about={content.about.clone()} />
            <Portfolio projects={content.projects.clone()} />
            <Services services={content.services.clone()} />
            <Contact contact={content.contact.clone()} />
            <Footer owner_name={content.owner.full_name()} />
            <style>{ENTRANCE_STYLES}</style>
            <style>
                {r#"
                :root {
                    --accent-purple: #8b5cf6;
                    --accent-teal: #14b8a6;
                    --accent-orange: #f97316;
                    --accent-pink: #ec4899;
                    --accent-green: #22c55e;
                    --primary-light: #c4b5fd;
                    --text-dark: #1f2937;
                    --text-light: #6b7280;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: var(--text-dark);
                    overflow-x: hidden;
                }
                .app {
                    opacity: 0;
                    transition: opacity 0.6s ease;
                }
                .app.loaded {
                    opacity: 1;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-title {
                    font-size: 2.5rem;
                    margin: 0 0 0.75rem;
                }
                .section-subtitle {
                    color: var(--text-light);
                    font-size: 1.1rem;
                }
                .btn {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    font-weight: 600;
                    text-decoration: none;
                    border: none;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .btn-primary {
                    background: linear-gradient(90deg, var(--accent-purple), var(--accent-teal));
                    color: white;
                }
                .btn-secondary {
                    background: white;
                    color: var(--accent-purple);
                    border: 2px solid var(--accent-purple);
                }
                .btn:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 10px 24px rgba(139, 92, 246, 0.25);
                }
                .custom-cursor {
                    position: fixed;
                    width: 20px;
                    height: 20px;
                    margin: -10px 0 0 -10px;
                    border: 2px solid var(--accent-purple);
                    border-radius: 50%;
                    pointer-events: none;
                    z-index: 1000;
                    transition: transform 0.1s ease;
                }
                @media (hover: none) {
                    .custom-cursor {
                        display: none;
                    }
                }

                /* Idle decoration */
                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }
                @keyframes pulse {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.03); }
                }
                .animate-float { animation: float 4s ease-in-out infinite; }
                .animate-pulse { animation: pulse 3s ease-in-out infinite; }
                .delay-100 { animation-delay: 0.1s; }
                .delay-200 { animation-delay: 0.2s; }
                .delay-400 { animation-delay: 0.4s; }
                .hover-bounce:hover { animation: float 0.6s ease-in-out; }
                .hover-pulse:hover { animation: pulse 0.6s ease-in-out; }
                .hover-jello:hover { transform: skew(-4deg, -4deg); }
                .hover-wobble:hover { transform: rotate(-4deg); }
                .hover-shimmer:hover { filter: brightness(1.05); }
                "#}
            </style>
        </main>
    }
}
