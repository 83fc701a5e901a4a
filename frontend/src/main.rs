use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod config;
mod content;
mod animation {
    pub mod controller;
    pub mod dom;
    pub mod events;
    pub mod magnetic;
    pub mod parallax;
    pub mod reveal;
    pub mod scheduler;
    pub mod sections;
    pub mod style;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod portfolio;
    pub mod scroll_top;
    pub mod services;
}
mod pages {
    pub mod home;
}

use animation::dom;
use animation::sections::SectionId;
use components::{nav::Nav, scroll_top::ScrollTopButton};
use config::ControllerConfig;
use content::SiteContent;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| SiteContent::bundled(), ());
    let is_loaded = use_state(|| false);
    let active_section = use_state(|| SectionId::Home);
    let show_scroll_top = use_state(|| false);
    let menu_open = use_state(|| false);

    // Attach the scroll and pointer effects once the sections exist in the DOM
    {
        let is_loaded = is_loaded.clone();
        let active_section = active_section.clone();
        let show_scroll_top = show_scroll_top.clone();
        use_effect_with_deps(
            move |_| {
                is_loaded.set(true);
                let handle = dom::attach(
                    &ControllerConfig::default(),
                    Callback::from(move |section| active_section.set(section)),
                    Callback::from(move |visible| show_scroll_top.set(visible)),
                );
                move || drop(handle)
            },
            (),
        );
    }

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(!*menu_open))
    };

    let on_navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |section: SectionId| {
            menu_open.set(false);
            dom::scroll_to_section(section);
        })
    };

    html! {
        <div class={classes!("app", (*is_loaded).then(|| "loaded"))}>
            <ScrollTopButton visible={*show_scroll_top} />
            <div class="custom-cursor"></div>
            <Nav
                brand={content.owner.first_name.clone()}
                active={*active_section}
                menu_open={*menu_open}
                {on_toggle_menu}
                {on_navigate}
            />
            <Home content={Rc::clone(&content)} />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
