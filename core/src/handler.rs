//! Callbacks through which components propose changes to their host.
//!
//! Components in this workspace are fully controlled: the host owns every
//! piece of state and a component only reports what the user asked for.
//! A [`SelectHandler`] is the receiving end of such a report.

use alloc::boxed::Box;
use core::{any::type_name, fmt::Debug, marker::PhantomData};

/// Receives a value proposed by a component, e.g. the tab the user tapped.
pub trait SelectHandler<T>: 'static {
    /// Called synchronously, once per proposal.
    fn handle(&mut self, value: T);
}

impl<T> Debug for dyn SelectHandler<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

impl<T, F> SelectHandler<T> for F
where
    F: FnMut(T) + 'static,
{
    fn handle(&mut self, value: T) {
        self(value);
    }
}

/// A boxed handler with dynamic dispatch.
pub type BoxSelectHandler<T> = Box<dyn SelectHandler<T>>;

/// Adapts a handler for `U` into a handler for `T` by mapping each value.
pub struct MapHandler<H, F, U> {
    inner: H,
    map: F,
    _marker: PhantomData<fn(U)>,
}

impl<H, F, U> Debug for MapHandler<H, F, U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

impl<H, F, U> MapHandler<H, F, U> {
    /// Wraps `inner`, converting values with `map` before forwarding them.
    #[must_use]
    pub const fn new(inner: H, map: F) -> Self {
        Self {
            inner,
            map,
            _marker: PhantomData,
        }
    }
}

impl<T, U, H, F> SelectHandler<T> for MapHandler<H, F, U>
where
    H: SelectHandler<U>,
    F: FnMut(T) -> U + 'static,
    U: 'static,
{
    fn handle(&mut self, value: T) {
        let mapped = (self.map)(value);
        self.inner.handle(mapped);
    }
}

#[cfg(test)]
mod tests {
    use alloc::{rc::Rc, vec::Vec};
    use core::cell::RefCell;

    use super::*;

    #[test]
    fn closures_are_handlers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut handler: BoxSelectHandler<u8> =
            Box::new(move |value: u8| sink.borrow_mut().push(value));

        handler.handle(3);
        handler.handle(5);

        assert_eq!(*seen.borrow(), [3, 5]);
    }

    #[test]
    fn map_handler_converts_before_forwarding() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let inner = move |value: usize| sink.borrow_mut().push(value);
        let mut handler = MapHandler::new(inner, |label: &'static str| label.len());

        handler.handle("three");

        assert_eq!(*seen.borrow(), [5]);
    }
}
