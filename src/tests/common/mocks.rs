use std::cell::Cell;
use std::rc::Rc;
use dioxus::prelude::EventHandler;

/// Shared counter behind event handlers built in a test `VirtualDom`.
#[derive(Clone, Default, PartialEq)]
pub struct CallCount(Rc<Cell<usize>>);

impl CallCount {
    /// Builds a handler that bumps the count. Call it while a component renders.
    pub fn handler(&self) -> EventHandler<()> {
        let hits = self.0.clone();
        EventHandler::new(move |_| hits.set(hits.get() + 1))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}
