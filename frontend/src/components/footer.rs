use chrono::Datelike;
use yew::prelude::*;

const FOOTER_PARTICLES: usize = 15;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub owner_name: String,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Utc::now().year();
    let particles = use_memo(
        |_| {
            (0..FOOTER_PARTICLES)
                .map(|_| {
                    let random = web_sys::js_sys::Math::random;
                    format!(
                        "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                        random() * 100.0,
                        random() * 100.0,
                        15.0 + random() * 10.0,
                        random() * 5.0
                    )
                })
                .collect::<Vec<_>>()
        },
        (),
    );

    html! {
        <footer class="footer">
            <div class="footer-particles">
                { for particles.iter().map(|style| html! {
                    <div class="footer-particle animate-float" style={style.clone()}></div>
                }) }
            </div>
            <div class="container">
                <div class="footer-content">
                    <div class="footer-text scroll-animate" data-animation="fade-in" data-delay="100">
                        <p class="hover-pulse">
                            {format!("© {} {}. All rights reserved.", year, props.owner_name)}
                        </p>
                    </div>
                    <div class="back-to-top scroll-animate" data-animation="slide-up" data-delay="200">
                        <a href="#home" class="back-to-top-btn hover-bounce">
                            <span>{"↑"}</span>
                            <span>{"Back to top"}</span>
                        </a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .footer {
                    position: relative;
                    padding: 3rem 2rem;
                    background: #1f1b2e;
                    color: #d4d4dc;
                    overflow: hidden;
                }
                .footer-particles {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .footer-particle {
                    position: absolute;
                    width: 4px;
                    height: 4px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.3);
                }
                .footer-content {
                    position: relative;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .back-to-top-btn {
                    display: inline-flex;
                    gap: 0.5rem;
                    color: white;
                    text-decoration: none;
                }
                "#}
            </style>
        </footer>
    }
}
