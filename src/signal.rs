//! Single-threaded subscribe/unsubscribe registry.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

type Handler<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    handlers: Vec<(u64, Handler<T>)>,
}

pub struct Signal<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for Signal<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

impl<T: 'static> Signal<T> {
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.push((id, Rc::new(handler)));
            id
        };

        let registry: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry
                        .borrow_mut()
                        .handlers
                        .retain(|(handler_id, _)| *handler_id != id);
                }
            })),
        }
    }

    /// Calls every handler in subscription order.
    ///
    /// Handlers are snapshotted first, so a handler may subscribe or
    /// unsubscribe without invalidating the dispatch in progress.
    pub fn emit(&self, value: &T) {
        let handlers: Vec<Handler<T>> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in handlers {
            handler(value);
        }
    }
}

pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn handlers_fire_in_subscription_order() {
        let signal = Signal::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let seen = Rc::clone(&seen);
            signal.subscribe(move |value| seen.borrow_mut().push(("first", *value)))
        };
        let second = {
            let seen = Rc::clone(&seen);
            signal.subscribe(move |value| seen.borrow_mut().push(("second", *value)))
        };

        signal.emit(&1);
        signal.emit(&2);

        assert_eq!(
            *seen.borrow(),
            vec![("first", 1), ("second", 1), ("first", 2), ("second", 2)]
        );
        drop((first, second));
    }

    #[test]
    fn dropped_subscription_stops_receiving() {
        let signal = Signal::<u32>::new();
        let count = Rc::new(Cell::new(0));

        let subscription = {
            let count = Rc::clone(&count);
            signal.subscribe(move |_| count.set(count.get() + 1))
        };
        signal.emit(&0);
        drop(subscription);
        signal.emit(&0);

        assert_eq!(count.get(), 1);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn explicit_unsubscribe_only_removes_its_own_handler() {
        let signal = Signal::<u32>::new();
        let count = Rc::new(Cell::new(0));

        let keep = {
            let count = Rc::clone(&count);
            signal.subscribe(move |_| count.set(count.get() + 1))
        };
        let remove = signal.subscribe(|_| {});
        remove.unsubscribe();

        signal.emit(&0);
        assert_eq!(signal.subscriber_count(), 1);
        assert_eq!(count.get(), 1);
        drop(keep);
    }

    #[test]
    fn subscription_outliving_signal_drops_quietly() {
        let signal = Signal::<u32>::new();
        let subscription = signal.subscribe(|_| {});
        drop(signal);
        drop(subscription);
    }

    #[test]
    fn clones_share_one_registry() {
        let signal = Signal::<u32>::new();
        let clone = signal.clone();
        let _subscription = clone.subscribe(|_| {});

        assert!(signal == clone);
        assert_eq!(signal.subscriber_count(), 1);
        assert!(signal != Signal::new());
    }
}
