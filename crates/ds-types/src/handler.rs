use std::{fmt, rc::Rc};

/// Caller-supplied callback stored inside a state slice.
///
/// Clones share the same closure, and two handlers compare equal only when they
/// are clones of one another.
pub struct Handler<R = ()>(Rc<dyn Fn() -> R>);

impl<R> Handler<R> {
    pub fn new(f: impl Fn() -> R + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self) -> R {
        (self.0)()
    }
}

impl<R> Clone for Handler<R> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<R> PartialEq for Handler<R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<R> fmt::Debug for Handler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_clones_share_identity() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let handler = Handler::new(move || counter.set(counter.get() + 1));
        let copy = handler.clone();

        handler.call();
        copy.call();

        assert_eq!(hits.get(), 2);
        assert_eq!(handler, copy);
        assert_ne!(handler, Handler::new(|| ()));
    }
}
