//! Notify-on-set capability for entity fields.
//!
//! Entities compose a `PropertyObservers` value and implement
//! `NotifyPropertyChanged` to expose it; setters go through `set_property`
//! so observers only hear about real value changes.

use crate::observable::SubscriptionId;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

type PropertyHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Ordered set of property-change handlers.
///
/// Cloning shares the handlers, so an edited copy of an entity keeps
/// reporting to the same observers.
#[derive(Clone)]
pub struct PropertyObservers {
    handlers: Vec<(SubscriptionId, PropertyHandler)>,
    next_subscription: SubscriptionId,
}

impl Default for PropertyObservers {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            next_subscription: 1,
        }
    }
}

impl Debug for PropertyObservers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyObservers")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

impl PropertyObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.handlers.push((id, Arc::new(handler)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Tells every handler that `property` changed.
    pub fn notify(&self, property: &str) {
        for (_, handler) in &self.handlers {
            handler(property);
        }
    }
}

/// Capability implemented by entities that report field changes.
pub trait NotifyPropertyChanged {
    fn property_observers(&self) -> &PropertyObservers;
    fn property_observers_mut(&mut self) -> &mut PropertyObservers;

    fn subscribe_property_changed<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
        Self: Sized,
    {
        self.property_observers_mut().subscribe(handler)
    }

    fn unsubscribe_property_changed(&mut self, id: SubscriptionId) -> bool {
        self.property_observers_mut().unsubscribe(id)
    }

    fn on_property_changed(&self, property: &str) {
        self.property_observers().notify(property);
    }
}

/// Stores `value` into `slot` and notifies when it differs from the old one.
///
/// Returns whether the slot changed.
pub fn set_property<T: PartialEq>(
    slot: &mut T,
    value: T,
    property: &str,
    observers: &PropertyObservers,
) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    observers.notify(property);
    true
}

#[cfg(test)]
mod tests {
    use super::{set_property, PropertyObservers};
    use std::sync::{Arc, Mutex};

    #[test]
    fn set_property_notifies_only_on_change() {
        let mut observers = PropertyObservers::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        observers.subscribe(move |name| sink.lock().unwrap().push(name.to_string()));

        let mut title = String::from("old");
        assert!(set_property(&mut title, "new".to_string(), "title", &observers));
        assert!(!set_property(&mut title, "new".to_string(), "title", &observers));

        assert_eq!(title, "new");
        assert_eq!(*seen.lock().unwrap(), vec!["title".to_string()]);
    }

    #[test]
    fn cloned_observers_share_handlers() {
        let mut observers = PropertyObservers::new();
        let count = Arc::new(Mutex::new(0_u32));
        let sink = Arc::clone(&count);
        let id = observers.subscribe(move |_| *sink.lock().unwrap() += 1);

        let copy = observers.clone();
        observers.notify("a");
        copy.notify("b");
        assert_eq!(*count.lock().unwrap(), 2);

        assert!(observers.unsubscribe(id));
        assert!(observers.is_empty());
        assert_eq!(copy.len(), 1);
    }
}
