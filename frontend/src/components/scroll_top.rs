use yew::prelude::*;

use crate::animation::dom::scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct ScrollTopProps {
    pub visible: bool,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());
    let style = if props.visible {
        "opacity: 1; pointer-events: auto;"
    } else {
        "opacity: 0; pointer-events: none;"
    };

    html! {
        <button class="scroll-to-top-btn animate-float" {onclick} {style} aria-label="Scroll to top">
            {"⌃"}
            <style>
                {r#"
                .scroll-to-top-btn {
                    position: fixed;
                    right: 2rem;
                    bottom: 2rem;
                    z-index: 90;
                    width: 48px;
                    height: 48px;
                    border: none;
                    border-radius: 50%;
                    background: var(--accent-purple);
                    color: white;
                    font-size: 1.5rem;
                    cursor: pointer;
                    box-shadow: 0 8px 20px rgba(139, 92, 246, 0.35);
                    transition: opacity 0.3s ease;
                }
                "#}
            </style>
        </button>
    }
}
