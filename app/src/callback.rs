// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;

type Handler<Arguments> = Box<dyn Fn(&Arguments)>;

/// Fan-out notification: every registered handler runs, in registration order.
///
/// Handlers must not register further handlers on the same callback while it is
/// being invoked.
pub struct Callback<Arguments: ?Sized> {
    handlers: RefCell<Vec<Handler<Arguments>>>,
}

impl<Arguments: ?Sized> Default for Callback<Arguments> {
    fn default() -> Self {
        Self { handlers: Default::default() }
    }
}

impl<Arguments: ?Sized> Callback<Arguments> {
    pub fn on(&self, f: impl Fn(&Arguments) + 'static) {
        self.handlers.borrow_mut().push(Box::new(f));
    }

    pub fn invoke(&self, arguments: &Arguments) {
        for handler in self.handlers.borrow().iter() {
            handler(arguments);
        }
    }
}
