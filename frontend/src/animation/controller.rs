use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;

use crate::animation::events::{ControllerEvent, Dispatcher};
use crate::animation::magnetic::{cursor_position, MagneticField, Rect};
use crate::animation::parallax::{card_transform, particle_transform, scroll_ratio, shape_transform};
use crate::animation::reveal::{RevealSpec, RevealTrigger};
use crate::animation::scheduler::Scheduler;
use crate::animation::sections::{scroll_top_visible, ActiveSectionTracker, Section, SectionId};
use crate::animation::style::{Mutation, StyleTarget};
use crate::config::ControllerConfig;

/// Geometry and element lookups supplied by the page.
///
/// Queried on every event, so layout changes are picked up without any
/// bookkeeping. Elements that are not on the page are simply not returned.
pub trait Host {
    type Element: StyleTarget + Clone + 'static;

    fn section(&self, id: SectionId) -> Option<Section>;
    fn cursor(&self) -> Option<Self::Element>;
    fn floating_cards(&self) -> Vec<(Self::Element, Rect)>;
    fn particles(&self) -> Vec<Self::Element>;
    fn shapes(&self) -> Vec<Self::Element>;
}

/// Callbacks through which the controller reports state the view renders.
pub struct Observers {
    pub on_section: Box<dyn Fn(SectionId)>,
    pub on_scroll_top: Box<dyn Fn(bool)>,
}

pub struct AnimationController<H: Host, S: Scheduler> {
    tracker: Rc<RefCell<ActiveSectionTracker>>,
    reveal: Rc<RefCell<RevealTrigger<H::Element, S>>>,
    dispatcher: Dispatcher,
}

impl<H, S> AnimationController<H, S>
where
    H: Host + 'static,
    S: Scheduler + 'static,
{
    pub fn new(host: Rc<H>, config: &ControllerConfig, scheduler: S, observers: Observers) -> Self {
        let tracker = Rc::new(RefCell::new(ActiveSectionTracker::new(config.lookahead_bias)));
        let reveal = Rc::new(RefCell::new(RevealTrigger::new(scheduler)));
        let field = MagneticField {
            capture_radius: config.capture_radius,
            max_displacement: config.max_displacement,
        };
        let Observers {
            on_section,
            on_scroll_top,
        } = observers;

        let mut dispatcher = Dispatcher::new();

        {
            let host = host.clone();
            let tracker = tracker.clone();
            dispatcher.on_scroll(move |event| {
                let sections = SectionId::ALL.iter().filter_map(|id| host.section(*id));
                let changed = tracker.borrow_mut().update(event.scroll_y, sections);
                if let Some(section) = changed {
                    debug!("Active section: {}", section.dom_id());
                    on_section(section);
                }
            });
        }

        {
            let host = host.clone();
            dispatcher.on_scroll(move |event| {
                let ratio = scroll_ratio(event.scroll_y, event.document_height, event.viewport_height);
                for (index, (card, _)) in host.floating_cards().iter().enumerate() {
                    card.set_style("transform", &card_transform(ratio, index).css());
                }
                for (index, particle) in host.particles().iter().enumerate() {
                    particle.set_style("transform", &particle_transform(ratio, index).css());
                }
                for (index, shape) in host.shapes().iter().enumerate() {
                    shape.set_style("transform", &shape_transform(ratio, index).css());
                }
            });
        }

        {
            let threshold = config.scroll_top_threshold;
            let visible = Cell::new(false);
            dispatcher.on_scroll(move |event| {
                let now = scroll_top_visible(event.scroll_y, threshold);
                if visible.replace(now) != now {
                    on_scroll_top(now);
                }
            });
        }

        {
            let host = host.clone();
            dispatcher.on_pointer_move(move |event| {
                if let Some(cursor) = host.cursor() {
                    for mutation in cursor_position(event.position) {
                        mutation.apply(&cursor);
                    }
                }
            });
        }

        {
            let host = host.clone();
            dispatcher.on_pointer_move(move |event| {
                for (card, rect) in host.floating_cards() {
                    if let Some(offset) = field.displacement(event.position, rect.center()) {
                        Mutation::style("transform", offset.css()).apply(&card);
                    }
                }
            });
        }

        {
            let reveal = reveal.clone();
            dispatcher.on_intersection(move |event| {
                if event.is_intersecting && reveal.borrow_mut().enter(event.index) {
                    debug!("Revealed element {}", event.index);
                }
            });
        }

        Self {
            tracker,
            reveal,
            dispatcher,
        }
    }

    pub fn register_reveal(&self, element: H::Element, spec: RevealSpec) -> usize {
        self.reveal.borrow_mut().register(element, spec)
    }

    pub fn publish(&self, event: &ControllerEvent) {
        self.dispatcher.publish(event);
    }

    pub fn active_section(&self) -> SectionId {
        self.tracker.borrow().active()
    }

    pub fn has_revealed(&self, index: usize) -> bool {
        self.reveal.borrow().has_fired(index)
    }

    pub fn reveal_count(&self) -> usize {
        self.reveal.borrow().len()
    }

    /// Unsubscribes every behaviour and cancels reveals still waiting on
    /// their delay.
    pub fn teardown(&mut self) {
        self.dispatcher.clear();
        self.reveal.borrow_mut().cancel_pending();
    }
}
