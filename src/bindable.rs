use std::{cell::RefCell, rc::Rc};

use tracing::trace;

use crate::Variable;


/// A consumer that accepts values pushed from a [`Variable`].
pub trait Bindable {
    type Value;
    fn bind(&self, value: Self::Value);
}

impl<B: Bindable + ?Sized> Bindable for Rc<B> {
    type Value = B::Value;
    fn bind(&self, value: Self::Value) {
        (**self).bind(value)
    }
}

/// A text display whose text is set by [`Bindable::bind`].
#[derive(Default, Debug)]
pub struct Label {
    text: RefCell<String>,
}
impl Label {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
        }
    }
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}
impl Bindable for Label {
    type Value = String;
    fn bind(&self, value: String) {
        *self.text.borrow_mut() = value;
    }
}

impl<E: Clone + 'static> Variable<E> {
    /// Pushes every value set after this call to `target`.
    ///
    /// Like [`map`](Self::map), the current value is not pushed.
    pub fn bind_to<B>(&self, target: B)
    where
        B: Bindable<Value = E> + 'static,
    {
        trace!(consumer = std::any::type_name::<B>(), "bind_to");
        self.subscribe(move |value| target.bind(value.clone()));
    }
}
