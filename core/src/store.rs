use std::cell::RefCell;
use std::rc::Rc;

pub type Subscriber = Rc<dyn Fn()>;

/// Single-threaded state container with change notification. Each
/// controller lives in its own `Store`; views subscribe, and every
/// `update` re-derives their output from the current value. Not `Send`
/// on purpose: all controllers run on the UI's one logical thread.
pub struct Store<T> {
    state: RefCell<T>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

/// Keeps a subscriber registered; dropping it unsubscribes.
pub struct Subscription {
    subscriber: Subscriber,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        if let Some(position) = subscribers
            .iter()
            .position(|s| Rc::ptr_eq(s, &self.subscriber))
        {
            subscribers.remove(position);
        }
    }
}

impl<T> Store<T> {
    pub fn new(initial: T) -> Self {
        Self {
            state: RefCell::new(initial),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe(&self, subscriber: Subscriber) -> Subscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        Subscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Mutate the value, then notify every subscriber.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut state = self.state.borrow_mut();
            f(&mut state);
        }
        self.notify();
    }

    fn notify(&self) {
        // Clone the list first so a subscriber may drop its own
        // Subscription from inside the callback.
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

impl<T: Clone> Store<T> {
    pub fn get(&self) -> T {
        self.state.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn update_notifies_subscribers_with_the_new_value() {
        let store = Rc::new(Store::new(0u32));
        let seen = Rc::new(Cell::new(0u32));
        let _subscription = store.subscribe(Rc::new({
            let store = Rc::clone(&store);
            let seen = Rc::clone(&seen);
            move || seen.set(store.get())
        }));
        store.update(|n| *n += 5);
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let store = Store::new(0u32);
        let calls = Rc::new(Cell::new(0u32));
        let subscription = store.subscribe(Rc::new({
            let calls = Rc::clone(&calls);
            move || calls.set(calls.get() + 1)
        }));
        store.update(|n| *n += 1);
        drop(subscription);
        store.update(|n| *n += 1);
        assert_eq!(calls.get(), 1);
    }
}
