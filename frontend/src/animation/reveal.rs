use crate::animation::scheduler::Scheduler;
use crate::animation::style::{Mutation, StyleTarget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    FadeIn,
    SlideUp,
    SlideLeft,
    SlideRight,
    Typing,
}

impl AnimationKind {
    /// Parses a `data-animation` value. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "fade-in" => Some(AnimationKind::FadeIn),
            "slide-up" => Some(AnimationKind::SlideUp),
            "slide-left" => Some(AnimationKind::SlideLeft),
            "slide-right" => Some(AnimationKind::SlideRight),
            "typing" => Some(AnimationKind::Typing),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationKind::FadeIn => "fade-in",
            AnimationKind::SlideUp => "slide-up",
            AnimationKind::SlideLeft => "slide-left",
            AnimationKind::SlideRight => "slide-right",
            AnimationKind::Typing => "typing",
        }
    }

    pub fn class_name(self) -> String {
        format!("animate-{}", self.name())
    }

    /// Hidden state applied before the element has ever been seen.
    fn hidden(self) -> Vec<Mutation> {
        match self {
            AnimationKind::Typing => vec![
                Mutation::style("opacity", "1"),
                Mutation::style("width", "0"),
            ],
            _ => vec![Mutation::style("opacity", "0")],
        }
    }

    fn revealed(self) -> Vec<Mutation> {
        match self {
            AnimationKind::Typing => vec![Mutation::style("width", "100%")],
            kind => vec![
                Mutation::AddClass(kind.class_name()),
                Mutation::style("opacity", "1"),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealSpec {
    pub kind: AnimationKind,
    pub delay_ms: u32,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            kind: AnimationKind::FadeIn,
            delay_ms: 0,
        }
    }
}

impl RevealSpec {
    /// Builds a spec from raw `data-animation` / `data-delay` values.
    ///
    /// `typing` marks elements carrying the `animate-typing` class, which
    /// always reveal by width regardless of their `data-animation`.
    pub fn from_attributes(animation: Option<&str>, delay: Option<&str>, typing: bool) -> Self {
        let kind = if typing {
            AnimationKind::Typing
        } else {
            animation
                .and_then(AnimationKind::parse)
                .unwrap_or(AnimationKind::FadeIn)
        };
        let delay_ms = delay
            .and_then(|d| d.trim().parse::<u32>().ok())
            .unwrap_or(0);
        Self { kind, delay_ms }
    }
}

struct Revealable<T> {
    target: T,
    spec: RevealSpec,
    fired: bool,
}

/// One-shot entrance animations keyed on first viewport entry.
pub struct RevealTrigger<T, S: Scheduler> {
    scheduler: S,
    items: Vec<Revealable<T>>,
    pending: Vec<S::Handle>,
}

impl<T, S> RevealTrigger<T, S>
where
    T: StyleTarget + Clone + 'static,
    S: Scheduler,
{
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            items: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Puts the element into its hidden state and returns its index.
    pub fn register(&mut self, target: T, spec: RevealSpec) -> usize {
        for mutation in spec.kind.hidden() {
            mutation.apply(&target);
        }
        self.items.push(Revealable {
            target,
            spec,
            fired: false,
        });
        self.items.len() - 1
    }

    /// Starts the entrance animation the first time an element is seen.
    /// Returns `false` for unknown indices and elements that already fired.
    pub fn enter(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        if item.fired {
            return false;
        }
        item.fired = true;

        for mutation in item.spec.kind.hidden() {
            mutation.apply(&item.target);
        }

        let target = item.target.clone();
        let revealed = item.spec.kind.revealed();
        let handle = self.scheduler.schedule(
            item.spec.delay_ms,
            Box::new(move || {
                for mutation in &revealed {
                    mutation.apply(&target);
                }
            }),
        );
        self.pending.push(handle);
        true
    }

    pub fn has_fired(&self, index: usize) -> bool {
        self.items.get(index).map_or(false, |item| item.fired)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Cancels every reveal still waiting on its delay.
    pub fn cancel_pending(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::scheduler::manual::ManualScheduler;
    use crate::animation::style::recording::{Recorded, RecordingElement};

    fn trigger() -> (ManualScheduler, RevealTrigger<RecordingElement, ManualScheduler>) {
        let scheduler = ManualScheduler::default();
        (scheduler.clone(), RevealTrigger::new(scheduler))
    }

    #[test]
    fn test_parse_attributes() {
        let spec = RevealSpec::from_attributes(Some("slide-up"), Some("300"), false);
        assert_eq!(spec, RevealSpec { kind: AnimationKind::SlideUp, delay_ms: 300 });

        let typing = RevealSpec::from_attributes(Some("slide-left"), Some("100"), true);
        assert_eq!(typing.kind, AnimationKind::Typing);
        assert_eq!(typing.delay_ms, 100);
    }

    #[test]
    fn test_missing_or_malformed_metadata_defaults() {
        assert_eq!(RevealSpec::from_attributes(None, None, false), RevealSpec::default());
        assert_eq!(
            RevealSpec::from_attributes(Some("spin-wildly"), Some("soon"), false),
            RevealSpec { kind: AnimationKind::FadeIn, delay_ms: 0 }
        );
        assert_eq!(RevealSpec::from_attributes(None, Some("-40"), false).delay_ms, 0);
    }

    #[test]
    fn test_register_hides_element() {
        let (_, mut trigger) = trigger();
        let plain = RecordingElement::default();
        let typed = RecordingElement::default();

        trigger.register(plain.clone(), RevealSpec::default());
        trigger.register(
            typed.clone(),
            RevealSpec { kind: AnimationKind::Typing, delay_ms: 0 },
        );

        assert_eq!(plain.last_style("opacity").as_deref(), Some("0"));
        assert_eq!(typed.last_style("opacity").as_deref(), Some("1"));
        assert_eq!(typed.last_style("width").as_deref(), Some("0"));
    }

    #[test]
    fn test_slide_up_reveals_after_delay() {
        let (clock, mut trigger) = trigger();
        let element = RecordingElement::default();
        let index = trigger.register(
            element.clone(),
            RevealSpec { kind: AnimationKind::SlideUp, delay_ms: 300 },
        );
        element.clear();

        assert!(trigger.enter(index));
        assert_eq!(element.history(), vec![Recorded::Style("opacity".into(), "0".into())]);

        clock.advance(299);
        assert!(!element.has_class("animate-slide-up"));

        clock.advance(1);
        assert!(element.has_class("animate-slide-up"));
        assert_eq!(element.last_style("opacity").as_deref(), Some("1"));
    }

    #[test]
    fn test_typing_expands_width() {
        let (clock, mut trigger) = trigger();
        let element = RecordingElement::default();
        let index = trigger.register(
            element.clone(),
            RevealSpec { kind: AnimationKind::Typing, delay_ms: 200 },
        );

        trigger.enter(index);
        assert_eq!(element.last_style("width").as_deref(), Some("0"));
        clock.advance(200);
        assert_eq!(element.last_style("width").as_deref(), Some("100%"));
        assert_eq!(element.class_count(), 0);
    }

    #[test]
    fn test_fires_at_most_once() {
        let (clock, mut trigger) = trigger();
        let element = RecordingElement::default();
        let index = trigger.register(element.clone(), RevealSpec::default());

        assert!(trigger.enter(index));
        clock.advance(0);
        assert!(!trigger.enter(index));
        clock.advance(1000);

        assert!(trigger.has_fired(index));
        assert_eq!(element.class_count(), 1);
    }

    #[test]
    fn test_unknown_index_is_ignored() {
        let (_, mut trigger) = trigger();
        assert!(!trigger.enter(3));
        assert!(!trigger.has_fired(3));
        assert_eq!(trigger.len(), 0);
    }

    #[test]
    fn test_cancel_pending_stops_delayed_reveal() {
        let (clock, mut trigger) = trigger();
        let element = RecordingElement::default();
        let index = trigger.register(
            element.clone(),
            RevealSpec { kind: AnimationKind::SlideRight, delay_ms: 900 },
        );

        trigger.enter(index);
        trigger.cancel_pending();
        clock.advance(5000);

        assert!(!element.has_class("animate-slide-right"));
        assert_eq!(clock.pending(), 0);
    }
}
