use yew::prelude::*;

use crate::content::Service;

/// Reveal stagger between neighbouring service cards.
pub const STAGGER_MS: usize = 150;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: Vec<Service>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header scroll-animate" data-animation="slide-up">
                    <h2 class="section-title">{"Services"}</h2>
                    <p class="section-subtitle">{"Comprehensive Shopify solutions for your business"}</p>
                </div>
                <div class="services-grid">
                    { for props.services.iter().enumerate().map(|(index, service)| html! {
                        <div
                            class="service-item scroll-animate"
                            data-animation="fade-in"
                            data-delay={(index * STAGGER_MS).to_string()}
                        >
                            <div class="service-icon animate-float">{service.icon.clone()}</div>
                            <h3 class="service-title">{service.title.clone()}</h3>
                            <p class="service-description">{service.description.clone()}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .services {
                    padding: 6rem 2rem;
                    background: white;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .service-item {
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid #f0f0f3;
                    transition: box-shadow 0.3s ease, transform 0.3s ease;
                }
                .service-item:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 12px 32px rgba(139, 92, 246, 0.12);
                }
                .service-icon {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .service-description {
                    color: var(--text-light);
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
