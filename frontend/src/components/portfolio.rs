use yew::prelude::*;

use crate::content::Project;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub projects: Vec<Project>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    html! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <div class="section-header scroll-animate" data-animation="slide-up">
                    <h2 class="section-title">{"Featured Projects"}</h2>
                    <p class="section-subtitle">{"A showcase of my recent Shopify development work"}</p>
                </div>
                <div class="portfolio-grid">
                    { for props.projects.iter().map(|project| html! {
                        <div class="portfolio-item">
                            <div class="portfolio-image">
                                <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" class="hover-pulse" />
                                <div class="portfolio-overlay">
                                    <a href={project.url.clone()} target="_blank" rel="noopener noreferrer" class="portfolio-link hover-bounce">
                                        {"↗ View Live Site"}
                                    </a>
                                </div>
                            </div>
                            <div class="portfolio-info">
                                <span class="portfolio-category">{project.category.clone()}</span>
                                <h3 class="portfolio-title">{project.title.clone()}</h3>
                                <p class="portfolio-description">{project.description.clone()}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .portfolio {
                    padding: 6rem 2rem;
                    background: #fafafa;
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .portfolio-item {
                    background: white;
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.06);
                    transition: transform 0.3s ease;
                }
                .portfolio-item:hover {
                    transform: translateY(-6px);
                }
                .portfolio-image {
                    position: relative;
                    aspect-ratio: 16 / 10;
                    overflow: hidden;
                }
                .portfolio-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .portfolio-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(139, 92, 246, 0.75);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .portfolio-item:hover .portfolio-overlay {
                    opacity: 1;
                }
                .portfolio-link {
                    color: white;
                    font-weight: 600;
                    text-decoration: none;
                }
                .portfolio-info {
                    padding: 1.5rem;
                }
                .portfolio-category {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: var(--accent-teal);
                }
                .portfolio-title {
                    margin: 0.5rem 0;
                }
                .portfolio-description {
                    color: var(--text-light);
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
