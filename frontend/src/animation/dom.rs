use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
    Window,
};
use yew::Callback;

use crate::animation::controller::{AnimationController, Host, Observers};
use crate::animation::events::{ControllerEvent, Intersection, PointerMove, ScrollEvent};
use crate::animation::magnetic::{Point, Rect};
use crate::animation::reveal::RevealSpec;
use crate::animation::scheduler::TimeoutScheduler;
use crate::animation::sections::{Section, SectionId};
use crate::config::ControllerConfig;

const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

/// The live document as seen by the controller.
pub struct DomHost {
    document: Document,
}

impl DomHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn query_one(&self, selector: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }
}

impl Host for DomHost {
    type Element = HtmlElement;

    fn section(&self, id: SectionId) -> Option<Section> {
        let element = self
            .document
            .get_element_by_id(id.dom_id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Section {
            id,
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
    }

    fn cursor(&self) -> Option<HtmlElement> {
        self.query_one(".custom-cursor")
    }

    fn floating_cards(&self) -> Vec<(HtmlElement, Rect)> {
        self.query_all(".floating-card")
            .into_iter()
            .map(|card| {
                let bounds = card.get_bounding_client_rect();
                let rect = Rect {
                    left: bounds.left(),
                    top: bounds.top(),
                    width: bounds.width(),
                    height: bounds.height(),
                };
                (card, rect)
            })
            .collect()
    }

    fn particles(&self) -> Vec<HtmlElement> {
        self.query_all(".particle")
    }

    fn shapes(&self) -> Vec<HtmlElement> {
        self.query_all(".shape")
    }
}

type DomController = AnimationController<DomHost, TimeoutScheduler>;

/// Keeps the controller wired to the window. Dropping it detaches
/// everything at once.
pub struct ControllerHandle {
    window: Window,
    controller: Rc<RefCell<DomController>>,
    scroll_listener: Closure<dyn FnMut()>,
    pointer_listener: Closure<dyn FnMut(MouseEvent)>,
    observer: Option<IntersectionObserver>,
    _observer_callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl Drop for ControllerHandle {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "scroll",
            self.scroll_listener.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.pointer_listener.as_ref().unchecked_ref(),
        );
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        self.controller.borrow_mut().teardown();
        debug!("Animation controller detached");
    }
}

fn read_scroll(window: &Window) -> Option<ScrollEvent> {
    let document_height = window.document()?.document_element()?.scroll_height();
    Some(ScrollEvent {
        scroll_y: window.scroll_y().ok()?,
        document_height: f64::from(document_height),
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

fn reveal_spec(element: &HtmlElement) -> RevealSpec {
    RevealSpec::from_attributes(
        element.get_attribute("data-animation").as_deref(),
        element.get_attribute("data-delay").as_deref(),
        element.class_list().contains("animate-typing"),
    )
}

fn observe_reveals(
    host: &DomHost,
    config: &ControllerConfig,
    controller: &Rc<RefCell<DomController>>,
) -> Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> {
    let callback = {
        let controller = controller.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let index = target
                        .get_attribute(REVEAL_INDEX_ATTR)
                        .and_then(|v| v.parse::<usize>().ok());
                    if let Some(index) = index {
                        let controller = controller.borrow();
                        controller.publish(&ControllerEvent::Intersection(Intersection {
                            index,
                            is_intersecting: true,
                        }));
                        debug!(
                            "Reveal {} entered view, fired: {}",
                            index,
                            controller.has_revealed(index)
                        );
                    }
                    observer.unobserve(&target);
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable, reveal animations disabled: {:?}", e);
                return None;
            }
        };

    let elements = host.query_all(".scroll-animate");
    for element in &elements {
        let spec = reveal_spec(element);
        let index = controller.borrow().register_reveal(element.clone(), spec);
        let _ = element.set_attribute(REVEAL_INDEX_ATTR, &index.to_string());
        observer.observe(element);
    }
    info!(
        "Observing {} scroll-animated elements",
        controller.borrow().reveal_count()
    );

    Some((observer, callback))
}

/// Wires the scroll, pointer and visibility effects to the current page.
pub fn attach(
    config: &ControllerConfig,
    on_section: Callback<SectionId>,
    on_scroll_top: Callback<bool>,
) -> Option<ControllerHandle> {
    let Some(window) = window() else {
        warn!("No window, animations disabled");
        return None;
    };
    let Some(document) = window.document() else {
        warn!("No document, animations disabled");
        return None;
    };

    let host = Rc::new(DomHost::new(document));
    let observers = Observers {
        on_section: Box::new(move |id| on_section.emit(id)),
        on_scroll_top: Box::new(move |visible| on_scroll_top.emit(visible)),
    };
    let controller = Rc::new(RefCell::new(AnimationController::new(
        host.clone(),
        config,
        TimeoutScheduler,
        observers,
    )));

    let (observer, observer_callback) = match observe_reveals(&host, config, &controller) {
        Some((observer, callback)) => (Some(observer), Some(callback)),
        None => (None, None),
    };

    let scroll_listener = {
        let controller = controller.clone();
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(event) = read_scroll(&window) {
                controller.borrow().publish(&ControllerEvent::Scroll(event));
            }
        })
    };

    let pointer_listener = {
        let controller = controller.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            let position = Point::new(f64::from(e.client_x()), f64::from(e.client_y()));
            controller
                .borrow()
                .publish(&ControllerEvent::PointerMove(PointerMove { position }));
        })
    };

    if let Err(e) = window
        .add_event_listener_with_callback("scroll", scroll_listener.as_ref().unchecked_ref())
    {
        warn!("Failed to listen for scroll: {:?}", e);
    }
    if let Err(e) = window
        .add_event_listener_with_callback("mousemove", pointer_listener.as_ref().unchecked_ref())
    {
        warn!("Failed to listen for mousemove: {:?}", e);
    }

    // Initial check
    if let Some(event) = read_scroll(&window) {
        controller.borrow().publish(&ControllerEvent::Scroll(event));
    }
    debug!(
        "Animation controller attached, active section {:?}",
        controller.borrow().active_section()
    );

    Some(ControllerHandle {
        window,
        controller,
        scroll_listener,
        pointer_listener,
        observer,
        _observer_callback: observer_callback,
    })
}

pub fn scroll_to_section(id: SectionId) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id.dom_id()))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
