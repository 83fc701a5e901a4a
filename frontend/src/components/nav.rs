use yew::prelude::*;

use crate::animation::sections::SectionId;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
    pub active: SectionId,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        brand,
        active,
        menu_open,
        on_toggle_menu,
        on_navigate,
    } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let links = SectionId::ALL.iter().map(|&section| {
        let onclick = {
            let on_navigate = on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(section);
            })
        };
        html! {
            <a
                href={format!("#{}", section.dom_id())}
                class={classes!((*active == section).then(|| "active"))}
                {onclick}
            >
                {section.label()}
            </a>
        }
    });

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <div class="nav-logo">
                    <span class="logo-text">{brand.clone()}</span>
                </div>
                <div class={classes!("nav-menu", menu_open.then(|| "nav-menu-open"))}>
                    { for links }
                </div>
                <button
                    class="mobile-menu-toggle"
                    onclick={toggle_menu}
                    aria-label="Toggle mobile menu"
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: rgba(255, 255, 255, 0.85);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 0 rgba(0, 0, 0, 0.05);
                }
                .nav-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .logo-text {
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, var(--accent-purple), var(--accent-teal));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .nav-menu {
                    display: flex;
                    gap: 2rem;
                }
                .nav-menu a {
                    color: var(--text-dark);
                    text-decoration: none;
                    font-weight: 500;
                    position: relative;
                    transition: color 0.3s ease;
                }
                .nav-menu a::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    width: 0;
                    height: 2px;
                    background: var(--accent-purple);
                    transition: width 0.3s ease;
                }
                .nav-menu a:hover::after,
                .nav-menu a.active::after {
                    width: 100%;
                }
                .nav-menu a.active {
                    color: var(--accent-purple);
                }
                .mobile-menu-toggle {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                    color: var(--text-dark);
                }
                @media (max-width: 768px) {
                    .mobile-menu-toggle {
                        display: block;
                    }
                    .nav-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem 2rem;
                        background: white;
                        transform: translateY(-150%);
                        transition: transform 0.3s ease;
                    }
                    .nav-menu.nav-menu-open {
                        transform: translateY(0);
                    }
                }
                "#}
            </style>
        </nav>
    }
}
