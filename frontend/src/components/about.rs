use yew::prelude::*;

use crate::content::About as AboutContent;

// Decorative idle animations, cycled across the paragraphs.
const PARAGRAPH_FLOURISH: [&str; 2] = ["animate-pulse", "animate-float"];

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let about = &props.about;

    html! {
        <section id="about" class="about">
            <div class="container">
                <div class="section-header scroll-animate" data-animation="slide-up">
                    <h2 class="section-title hover-shimmer">{"About Me"}</h2>
                    <p class="section-subtitle">{about.subtitle.clone()}</p>
                </div>
                <div class="about-content">
                    <div class="about-text">
                        { for about.paragraphs.iter().enumerate().map(|(i, text)| html! {
                            <p
                                class={classes!("scroll-animate", PARAGRAPH_FLOURISH[i % PARAGRAPH_FLOURISH.len()])}
                                data-animation="fade-in"
                                data-delay={((i + 1) * 100).to_string()}
                            >
                                {text.clone()}
                            </p>
                        }) }
                        <div class="skills scroll-animate" data-animation="slide-up" data-delay="300">
                            { for about.skills.iter().map(|skill| html! {
                                <div class="skill-item hover-bounce">
                                    <span class="skill-name" style={format!("color: {};", skill.accent.css_var())}>
                                        {skill.name.clone()}
                                    </span>
                                    <div class="skill-bar">
                                        <div
                                            class="skill-progress"
                                            style={format!(
                                                "width: {}%; background: linear-gradient(90deg, {}, var(--primary-light));",
                                                skill.percent.min(100),
                                                skill.accent.css_var()
                                            )}
                                        ></div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="about-stats">
                        { for about.stats.iter().enumerate().map(|(i, stat)| html! {
                            <div
                                class="stat-item scroll-animate hover-bounce"
                                data-animation="slide-up"
                                data-delay={(400 + i * 100).to_string()}
                            >
                                <span class="stat-number" style={format!("color: {};", stat.accent.css_var())}>
                                    {stat.value.clone()}
                                </span>
                                <span class="stat-label">{stat.label.clone()}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    padding: 6rem 2rem;
                    background: white;
                }
                .about-content {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 4rem;
                }
                .about-text p {
                    color: var(--text-light);
                    line-height: 1.8;
                    margin-bottom: 1.5rem;
                }
                .skill-item {
                    margin-bottom: 1.5rem;
                }
                .skill-name {
                    display: block;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .skill-bar {
                    height: 10px;
                    border-radius: 5px;
                    background: #f1f1f4;
                    overflow: hidden;
                }
                .skill-progress {
                    height: 100%;
                    border-radius: 5px;
                }
                .about-stats {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .stat-item {
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: white;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.06);
                    text-align: center;
                }
                .stat-number {
                    display: block;
                    font-size: 2.5rem;
                    font-weight: 700;
                }
                .stat-label {
                    color: var(--text-light);
                }
                @media (max-width: 900px) {
                    .about-content {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
