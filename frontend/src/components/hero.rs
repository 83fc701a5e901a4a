use yew::prelude::*;

use crate::content::Owner;

const PARTICLE_COUNT: usize = 20;

/// Inline style for each ambient particle: horizontal position plus a
/// staggered float animation. `random` yields values in `[0, 1)`.
pub fn particle_styles(count: usize, mut random: impl FnMut() -> f64) -> Vec<String> {
    (0..count)
        .map(|_| {
            let left = random() * 100.0;
            let delay = random() * 10.0;
            let duration = 10.0 + random() * 20.0;
            format!(
                "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                left, delay, duration
            )
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub owner: Owner,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let owner = &props.owner;
    // Positions are drawn once per mount so re-renders don't reshuffle them
    let particles = use_memo(
        |_| particle_styles(PARTICLE_COUNT, web_sys::js_sys::Math::random),
        (),
    );

    html! {
        <section id="home" class="hero">
            <div class="particles-container">
                { for particles.iter().map(|style| html! {
                    <div class="particle" style={style.clone()}></div>
                }) }
            </div>

            <div class="bg-shapes">
                <div class="shape shape-1"></div>
                <div class="shape shape-2"></div>
                <div class="shape shape-3"></div>
            </div>
            <div class="parallax-layer-1"></div>
            <div class="parallax-layer-2"></div>

            <div class="hero-container">
                <div class="hero-content">
                    <div class="hero-text scroll-animate" data-animation="slide-up">
                        <h1 class="hero-title">
                            <span class="title-line scroll-animate animate-typing" data-animation="slide-left" data-delay="100">
                                {owner.first_name.clone()}
                            </span>
                            <span class="title-line scroll-animate animate-typing" data-animation="slide-right" data-delay="200">
                                {owner.last_name.clone()}
                            </span>
                        </h1>
                        <p class="hero-subtitle scroll-animate" data-animation="fade-in" data-delay="300">
                            {owner.title.clone()}
                        </p>
                        <p class="hero-description scroll-animate" data-animation="fade-in" data-delay="400">
                            {owner.summary.clone()}
                        </p>
                        <div class="hero-buttons scroll-animate" data-animation="slide-up" data-delay="500">
                            <a href="#portfolio" class="btn btn-primary">{"View My Work"}</a>
                            <a href="#contact" class="btn btn-secondary">{"Get In Touch"}</a>
                        </div>
                    </div>
                    <div class="hero-visual scroll-animate" data-animation="fade-in" data-delay="600">
                        <div class="floating-card card-1 scroll-animate" data-animation="slide-left" data-delay="700">
                            <div class="card-content">
                                <span class="card-icon">{"🛍️"}</span>
                                <span class="card-text">{"E-commerce"}</span>
                            </div>
                        </div>
                        <div class="floating-card card-2 scroll-animate" data-animation="slide-up" data-delay="800">
                            <div class="card-content">
                                <span class="card-icon">{"📈"}</span>
                                <span class="card-text">{"Performance"}</span>
                            </div>
                        </div>
                        <div class="floating-card card-3 scroll-animate" data-animation="slide-right" data-delay="900">
                            <div class="card-content">
                                <span class="card-icon">{"</>"}</span>
                                <span class="card-text">{"Development"}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    padding: 8rem 2rem 4rem;
                    background: linear-gradient(135deg, #faf5ff 0%, #f0fdfa 100%);
                }
                .particles-container {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .particle {
                    position: absolute;
                    bottom: -10px;
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: var(--accent-purple);
                    opacity: 0.4;
                    animation-name: particleRise;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }
                @keyframes particleRise {
                    from { bottom: -10px; opacity: 0.4; }
                    to { bottom: 110%; opacity: 0; }
                }
                .bg-shapes {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .shape {
                    position: absolute;
                    border-radius: 40% 60% 55% 45%;
                    filter: blur(40px);
                    opacity: 0.35;
                }
                .shape-1 {
                    width: 320px;
                    height: 320px;
                    top: 10%;
                    left: -80px;
                    background: var(--accent-purple);
                }
                .shape-2 {
                    width: 260px;
                    height: 260px;
                    top: 50%;
                    right: -60px;
                    background: var(--accent-teal);
                }
                .shape-3 {
                    width: 200px;
                    height: 200px;
                    bottom: 5%;
                    left: 40%;
                    background: var(--accent-pink);
                }
                .hero-container {
                    position: relative;
                    max-width: 1200px;
                    margin: 0 auto;
                    width: 100%;
                    z-index: 1;
                }
                .hero-content {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-title {
                    font-size: 4rem;
                    line-height: 1.1;
                    margin: 0 0 1rem;
                }
                .title-line {
                    display: block;
                    overflow: hidden;
                    white-space: nowrap;
                    transition: width 1s steps(30, end);
                }
                .hero-subtitle {
                    font-size: 1.4rem;
                    color: var(--accent-purple);
                    font-weight: 600;
                }
                .hero-description {
                    color: var(--text-light);
                    line-height: 1.7;
                    max-width: 560px;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .hero-visual {
                    position: relative;
                    height: 360px;
                }
                .floating-card {
                    position: absolute;
                    padding: 1rem 1.5rem;
                    background: white;
                    border-radius: 16px;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.08);
                    transition: transform 0.2s ease-out;
                }
                .card-1 { top: 0; left: 10%; }
                .card-2 { top: 40%; right: 0; }
                .card-3 { bottom: 0; left: 20%; }
                .card-content {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 600;
                }
                @media (max-width: 900px) {
                    .hero-content {
                        grid-template-columns: 1fr;
                    }
                    .hero-title {
                        font-size: 2.8rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_styles_use_the_random_source() {
        let mut values = [0.5, 0.1, 0.25].into_iter().cycle();
        let styles = particle_styles(2, || values.next().unwrap());

        assert_eq!(styles.len(), 2);
        assert_eq!(
            styles[0],
            "left: 50.00%; animation-delay: 1.00s; animation-duration: 15.00s;"
        );
        assert_eq!(styles[0], styles[1]);
    }

    #[test]
    fn test_particle_styles_stay_in_range() {
        let styles = particle_styles(3, || 0.999);
        assert!(styles
            .iter()
            .all(|s| s.starts_with("left: 99.90%") && s.ends_with("29.98s;")));
    }
}
