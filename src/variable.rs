use std::{cell::RefCell, rc::Rc};

use derive_ex::derive_ex;
use parse_display::Display;
use tracing::trace;


type Observer<E> = Rc<dyn Fn(&E)>;

/// Similar to `Rc<RefCell<T>>`, but every new value is pushed to the subscribed observers.
///
/// Cloning a `Variable` clones the handle, not the value.
#[derive_ex(Clone, bound())]
pub struct Variable<E: 'static>(Rc<VariableNode<E>>);

impl<E: 'static> Variable<E> {
    /// Create a new `Variable` with the given initial value.
    pub fn new(value: E) -> Self {
        Self::from_option(Some(value))
    }

    fn empty() -> Self {
        Self::from_option(None)
    }

    fn from_option(value: Option<E>) -> Self {
        Self(Rc::new(VariableNode {
            value: RefCell::new(value),
            observers: RefCell::new(Vec::new()),
        }))
    }

    /// Gets the current value.
    ///
    /// Fails only for a `Variable` created by [`map`](Self::map) whose source has not been set since.
    pub fn get_value(&self) -> Result<E, NoValueError>
    where
        E: Clone,
    {
        self.0.value.borrow().clone().ok_or_else(NoValueError::new)
    }

    pub fn has_value(&self) -> bool {
        self.0.value.borrow().is_some()
    }

    /// Sets the value and calls every observer with it, in subscription order.
    ///
    /// Observers run synchronously on the caller's stack.
    /// Calling `set_value` from an observer is allowed and notifies recursively.
    pub fn set_value(&self, value: E)
    where
        E: Clone,
    {
        *self.0.value.borrow_mut() = Some(value.clone());
        let observers = self.0.observers.borrow().clone();
        trace!(observers = observers.len(), "set_value");
        for observer in &observers {
            observer(&value);
        }
    }

    /// Adds an observer called on every subsequent [`set_value`](Self::set_value).
    ///
    /// The current value is not replayed, and there is no way to remove an observer.
    pub fn subscribe(&self, observer: impl Fn(&E) + 'static) {
        let mut observers = self.0.observers.borrow_mut();
        observers.push(Rc::new(observer));
        trace!(observers = observers.len(), "subscribe");
    }

    pub fn observer_count(&self) -> usize {
        self.0.observers.borrow().len()
    }

    /// Returns a `Variable` that receives `transform` of each value set on `self` after this call.
    ///
    /// The current value of `self` is not propagated, so the returned `Variable`
    /// has no value until the next [`set_value`](Self::set_value) on `self`.
    ///
    /// `self` keeps the returned `Variable` alive. The returned `Variable` does not reference `self`.
    pub fn map<T: Clone + 'static>(&self, transform: impl Fn(&E) -> T + 'static) -> Variable<T> {
        let derived = Variable::empty();
        let target = derived.clone();
        self.subscribe(move |value| target.set_value(transform(value)));
        trace!(
            from = std::any::type_name::<E>(),
            to = std::any::type_name::<T>(),
            "map"
        );
        derived
    }
}
impl<E: 'static> From<E> for Variable<E> {
    fn from(value: E) -> Self {
        Self::new(value)
    }
}
impl<E: std::fmt::Debug + 'static> std::fmt::Debug for Variable<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.value.try_borrow() {
            Ok(value) => match &*value {
                Some(value) => std::fmt::Debug::fmt(value, f),
                None => write!(f, "<no value>"),
            },
            Err(_) => write!(f, "<borrowed>"),
        }
    }
}

#[cfg(feature = "serde")]
impl<E> serde::Serialize for Variable<E>
where
    E: serde::Serialize + 'static,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self.0.value.try_borrow() {
            Ok(value) => match &*value {
                Some(value) => E::serialize(value, serializer),
                None => Err(serde::ser::Error::custom(NoValueError::new())),
            },
            Err(_) => Err(serde::ser::Error::custom("borrowed")),
        }
    }
}
#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for Variable<E>
where
    E: serde::Deserialize<'de> + 'static,
{
    fn deserialize<D>(deserializer: D) -> Result<Variable<E>, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        E::deserialize(deserializer).map(Variable::new)
    }
}

struct VariableNode<E: 'static> {
    value: RefCell<Option<E>>,
    observers: RefCell<Vec<Observer<E>>>,
}
impl<E: 'static> Drop for VariableNode<E> {
    fn drop(&mut self) {
        trace!(value = std::any::type_name::<E>(), "variable dropped");
    }
}

/// Error returned by [`Variable::get_value`] when no value has been set.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display("{message}")]
pub struct NoValueError {
    message: &'static str,
}
impl NoValueError {
    fn new() -> Self {
        Self { message: "no value" }
    }
    pub fn message(&self) -> &str {
        self.message
    }
}

impl std::error::Error for NoValueError {}
