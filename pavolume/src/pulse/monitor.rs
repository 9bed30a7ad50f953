//! Monitor mode
//!
//! Subscribes to sink change events and reprints the default sink's volume
//! on every change, indefinitely. Only `changed` events matter; sink
//! arrival/removal is ignored (the default sink is re-resolved per event
//! anyway).
//!
//! Subscription callbacks hand the event off to a channel; the blocking
//! iterate loop below drains it and performs the introspection round trips.
//! Everything stays on one thread.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::mpsc;

use libpulse_binding::context::subscribe::{
    Facility, InterestMaskSet, Operation as SubscribeOperation,
};
use tracing::{debug, trace};

use super::PulseSession;
use crate::command::Command;
use crate::error::{Error, Result};
use crate::output;

/// Block forever forwarding change notifications. Returns only on error.
pub fn run(session: &mut PulseSession, command: &Command) -> Result<()> {
    let (tx, rx) = mpsc::channel();

    session
        .context
        .set_subscribe_callback(Some(Box::new(move |facility, operation, index| {
            if facility != Some(Facility::Sink)
                || operation != Some(SubscribeOperation::Changed)
            {
                return;
            }
            let _ = tx.send(index);
        })));

    let accepted: Rc<RefCell<Option<bool>>> = Rc::new(RefCell::new(None));
    let operation = {
        let accepted = Rc::clone(&accepted);
        session
            .context
            .subscribe(InterestMaskSet::SINK, move |success| {
                *accepted.borrow_mut() = Some(success);
            })
    };
    session.wait(operation)?;
    if !accepted.borrow().unwrap_or(false) {
        return Err(Error::Operation("sink event subscription rejected".to_string()));
    }
    debug!("monitoring sink change events");

    let mut stdout = io::stdout();
    loop {
        session.iterate()?;
        while let Ok(index) = rx.try_recv() {
            trace!("change event on sink #{}", index);
            let name = session.default_sink_name()?;
            let sink = session.sink_by_name(&name)?;
            output::print_report(&mut stdout, &command.format, &sink)?;
        }
    }
}
