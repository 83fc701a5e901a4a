use crate::animation::magnetic::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMove {
    pub position: Point,
}

/// One observed element crossing the visibility threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intersection {
    pub index: usize,
    pub is_intersecting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerEvent {
    Scroll(ScrollEvent),
    PointerMove(PointerMove),
    Intersection(Intersection),
}

type Handler<E> = Box<dyn Fn(&E)>;

/// Fans host events out to the subscribed behaviours.
///
/// Handlers of one event type run in the order they were added. There is no
/// per-handler removal: `clear` drops everything at once.
#[derive(Default)]
pub struct Dispatcher {
    scroll: Vec<Handler<ScrollEvent>>,
    pointer: Vec<Handler<PointerMove>>,
    intersection: Vec<Handler<Intersection>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, handler: impl Fn(&ScrollEvent) + 'static) {
        self.scroll.push(Box::new(handler));
    }

    pub fn on_pointer_move(&mut self, handler: impl Fn(&PointerMove) + 'static) {
        self.pointer.push(Box::new(handler));
    }

    pub fn on_intersection(&mut self, handler: impl Fn(&Intersection) + 'static) {
        self.intersection.push(Box::new(handler));
    }

    pub fn publish(&self, event: &ControllerEvent) {
        match event {
            ControllerEvent::Scroll(payload) => self.scroll.iter().for_each(|h| h(payload)),
            ControllerEvent::PointerMove(payload) => self.pointer.iter().for_each(|h| h(payload)),
            ControllerEvent::Intersection(payload) => {
                self.intersection.iter().for_each(|h| h(payload))
            }
        }
    }

    pub fn clear(&mut self) {
        self.scroll.clear();
        self.pointer.clear();
        self.intersection.clear();
    }
}

#[cfg(test)]
impl Dispatcher {
    pub fn handler_count(&self) -> usize {
        self.scroll.len() + self.pointer.len() + self.intersection.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scroll(scroll_y: f64) -> ControllerEvent {
        ControllerEvent::Scroll(ScrollEvent {
            scroll_y,
            document_height: 4000.0,
            viewport_height: 800.0,
        })
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();

        for name in ["first", "second", "third"] {
            let log = log.clone();
            dispatcher.on_scroll(move |_| log.borrow_mut().push(name));
        }

        dispatcher.publish(&scroll(10.0));
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_events_only_reach_their_own_type() {
        let scrolls = Rc::new(RefCell::new(0));
        let pointers = Rc::new(RefCell::new(0));
        let mut dispatcher = Dispatcher::new();

        {
            let scrolls = scrolls.clone();
            dispatcher.on_scroll(move |_| *scrolls.borrow_mut() += 1);
        }
        {
            let pointers = pointers.clone();
            dispatcher.on_pointer_move(move |_| *pointers.borrow_mut() += 1);
        }

        dispatcher.publish(&scroll(0.0));
        dispatcher.publish(&ControllerEvent::PointerMove(PointerMove {
            position: Point::new(1.0, 2.0),
        }));
        dispatcher.publish(&ControllerEvent::PointerMove(PointerMove {
            position: Point::new(3.0, 4.0),
        }));

        assert_eq!(*scrolls.borrow(), 1);
        assert_eq!(*pointers.borrow(), 2);
    }

    #[test]
    fn test_clear_drops_every_handler() {
        let hits = Rc::new(RefCell::new(0));
        let mut dispatcher = Dispatcher::new();
        {
            let hits = hits.clone();
            dispatcher.on_scroll(move |_| *hits.borrow_mut() += 1);
        }
        dispatcher.on_intersection(|_| {});
        assert_eq!(dispatcher.handler_count(), 2);

        dispatcher.clear();
        dispatcher.publish(&scroll(5.0));

        assert_eq!(dispatcher.handler_count(), 0);
        assert_eq!(*hits.borrow(), 0);
    }
}
