use gloo_timers::callback::Timeout;

/// Runs a task once after a delay. Dropping the returned handle cancels the
/// task if it has not run yet.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

#[cfg(test)]
pub mod manual {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    struct Pending {
        id: u64,
        due: u64,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        tasks: Vec<Pending>,
    }

    /// Deterministic clock: tasks only run when the test advances time.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().tasks.retain(|p| p.id != self.id);
            }
        }
    }

    impl ManualScheduler {
        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().tasks.len()
        }

        pub fn advance(&self, ms: u64) {
            let due = {
                let mut queue = self.queue.borrow_mut();
                queue.now += ms;
                let now = queue.now;
                let (mut due, rest): (Vec<_>, Vec<_>) =
                    queue.tasks.drain(..).partition(|p| p.due <= now);
                queue.tasks = rest;
                due.sort_by_key(|p| (p.due, p.id));
                due
            };
            for pending in due {
                (pending.task)();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + u64::from(delay_ms);
            queue.tasks.push(Pending { id, due, task });
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    mod tests {
        use super::*;
        use std::cell::Cell;

        #[test]
        fn test_task_runs_only_when_due() {
            let scheduler = ManualScheduler::default();
            let ran = Rc::new(Cell::new(false));
            let _handle = {
                let ran = ran.clone();
                scheduler.schedule(50, Box::new(move || ran.set(true)))
            };

            scheduler.advance(49);
            assert!(!ran.get());
            scheduler.advance(1);
            assert!(ran.get());
            assert_eq!(scheduler.now(), 50);
        }

        #[test]
        fn test_dropping_handle_cancels() {
            let scheduler = ManualScheduler::default();
            let ran = Rc::new(Cell::new(false));
            let handle = {
                let ran = ran.clone();
                scheduler.schedule(10, Box::new(move || ran.set(true)))
            };

            drop(handle);
            scheduler.advance(100);
            assert!(!ran.get());
            assert_eq!(scheduler.pending(), 0);
        }
    }
}
