//! A [`TooltipTrigger`] shared with callbacks that may run while it is busy.
//!
//! Writing `open` to a floating menu or to the host attribute can call back
//! into the trigger synchronously. Reads never borrow the trigger, and writes
//! made while it is borrowed are queued and applied once it is released.

use std::cell::{Cell, RefCell};

use futures_signals::signal::ReadOnlyMutable;
use log::{debug, error};

use crate::{tooltip, Host, Rect, Result, TooltipTrigger};

pub struct SharedTrigger<H: Host + Clone> {
    trigger: RefCell<TooltipTrigger<H>>,
    host: H,
    open: ReadOnlyMutable<bool>,
    pending_open: Cell<Option<bool>>,
}

impl<H: Host + Clone> SharedTrigger<H> {
    pub fn new(trigger: TooltipTrigger<H>) -> Self {
        Self {
            host: trigger.host().clone(),
            open: trigger.read_open(),
            trigger: RefCell::new(trigger),
            pending_open: Cell::new(None),
        }
    }

    pub fn connected(&self) {
        self.update("connect", |trigger| trigger.connected());
    }

    pub fn disconnected(&self) {
        self.update("disconnect", |trigger| {
            trigger.disconnected();
            Ok(())
        });
    }

    pub fn toggle(&self) {
        self.update("toggle", |trigger| trigger.toggle());
    }

    /// Notifications that arrive while the trigger is busy come from it
    /// reflecting its own `open` property, which it handles itself.
    pub fn attribute_changed(&self, name: &str, old: Option<&str>, current: Option<&str>) {
        self.update("update attributes of", |trigger| {
            trigger.attribute_changed(name, old, current)
        });
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn set_open(&self, open: bool) {
        self.pending_open.set(Some(open));
        self.apply_pending();
    }

    pub fn trigger_position(&self) -> Result<Rect> {
        tooltip::trigger_position(&self.host)
    }

    fn update(&self, action: &str, f: impl FnOnce(&mut TooltipTrigger<H>) -> Result<()>) {
        let result = match self.trigger.try_borrow_mut() {
            Ok(mut trigger) => f(&mut trigger),
            Err(_) => {
                debug!("Tooltip is busy, skipping {action}");
                return;
            }
        };

        if let Err(e) = result {
            error!("Couldn't {action} tooltip: {e}");
        }

        self.apply_pending();
    }

    fn apply_pending(&self) {
        while let Some(open) = self.pending_open.take() {
            let result = match self.trigger.try_borrow_mut() {
                Ok(mut trigger) => trigger.set_open(open),
                Err(_) => {
                    self.pending_open.set(Some(open));
                    return;
                }
            };

            if let Err(e) = result {
                error!("Couldn't set tooltip `open`: {e}");
            }
        }
    }
}
