//! PulseAudio server session
//!
//! Wraps the client library's standard mainloop and context. Every request
//! is asynchronous on the wire; the session blocks on mainloop iteration
//! until the matching callback has fired, so callers see plain synchronous
//! `Result`s. Callback payloads are copied into plain data ([`Sink`])
//! before the callback returns.

use std::cell::RefCell;
use std::rc::Rc;

use libpulse_binding::callbacks::ListResult;
use libpulse_binding::context::{Context, FlagSet as ContextFlagSet, State as ContextState};
use libpulse_binding::mainloop::standard::{IterateResult, Mainloop};
use libpulse_binding::operation::{Operation, State as OperationState};
use libpulse_binding::proplist::{properties, Proplist};
use libpulse_binding::volume::ChannelVolumes;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::sink::Sink;
use crate::volume;

pub mod monitor;

const APPLICATION_NAME: &str = "pavolume";

/// A connected session against the local audio server
pub struct PulseSession {
    mainloop: Mainloop,
    context: Context,
}

impl PulseSession {
    /// Create the mainloop and context, connect, and iterate until the
    /// context is ready. `server` of `None` uses the library's default
    /// server resolution.
    pub fn connect(server: Option<&str>) -> Result<Self> {
        let mut mainloop = Mainloop::new()
            .ok_or_else(|| Error::Connect("failed to create mainloop".to_string()))?;

        let mut proplist = Proplist::new()
            .ok_or_else(|| Error::Connect("failed to create property list".to_string()))?;
        proplist
            .set_str(properties::APPLICATION_NAME, APPLICATION_NAME)
            .map_err(|_| Error::Connect("failed to set application name".to_string()))?;

        let mut context =
            Context::new_with_proplist(&mainloop, APPLICATION_NAME, &proplist)
                .ok_or_else(|| Error::Connect("failed to create context".to_string()))?;

        context
            .connect(server, ContextFlagSet::NOFLAGS, None)
            .map_err(|e| Error::Connect(format!("{e}")))?;

        loop {
            match mainloop.iterate(true) {
                IterateResult::Success(_) => {}
                IterateResult::Quit(_) => {
                    return Err(Error::Connect("mainloop quit during connect".to_string()))
                }
                IterateResult::Err(e) => return Err(Error::Connect(format!("{e}"))),
            }
            match context.get_state() {
                ContextState::Ready => break,
                ContextState::Failed | ContextState::Terminated => {
                    return Err(Error::Connect("context entered failed state".to_string()))
                }
                _ => {}
            }
        }

        debug!("connected to PulseAudio server ({})", server.unwrap_or("default"));
        Ok(Self { mainloop, context })
    }

    /// One blocking mainloop iteration.
    pub(crate) fn iterate(&mut self) -> Result<()> {
        match self.mainloop.iterate(true) {
            IterateResult::Success(_) => Ok(()),
            IterateResult::Quit(_) => Err(Error::Mainloop("mainloop quit".to_string())),
            IterateResult::Err(e) => Err(Error::Mainloop(format!("{e}"))),
        }
    }

    /// Iterate until the operation leaves the running state.
    fn wait<C: ?Sized>(&mut self, operation: Operation<C>) -> Result<()> {
        loop {
            match operation.get_state() {
                OperationState::Running => self.iterate()?,
                OperationState::Done => return Ok(()),
                OperationState::Cancelled => {
                    return Err(Error::Operation("operation cancelled by server".to_string()))
                }
            }
        }
    }

    /// Resolve the name of the server's default sink.
    pub fn default_sink_name(&mut self) -> Result<String> {
        let result: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

        let operation = {
            let result = Rc::clone(&result);
            self.context.introspect().get_server_info(move |info| {
                *result.borrow_mut() = info.default_sink_name.as_ref().map(|n| n.to_string());
            })
        };
        self.wait(operation)?;

        let name = result.borrow_mut().take().ok_or(Error::NoDefaultSink)?;
        trace!("default sink is {}", name);
        Ok(name)
    }

    /// Snapshot one sink by name.
    pub fn sink_by_name(&mut self, name: &str) -> Result<Sink> {
        let result: Rc<RefCell<Option<Sink>>> = Rc::new(RefCell::new(None));

        let operation = {
            let result = Rc::clone(&result);
            self.context
                .introspect()
                .get_sink_info_by_name(name, move |list| {
                    if let ListResult::Item(info) = list {
                        *result.borrow_mut() = Some(Sink::from_info(info, false));
                    }
                })
        };
        self.wait(operation)?;

        let sink = result
            .borrow_mut()
            .take()
            .ok_or_else(|| Error::SinkNotFound(name.to_string()))?;
        Ok(sink)
    }

    /// Snapshot all sinks, marking the server's default.
    pub fn list_sinks(&mut self, default_name: &str) -> Result<Vec<Sink>> {
        let result: Rc<RefCell<Vec<Sink>>> = Rc::new(RefCell::new(Vec::new()));

        let operation = {
            let result = Rc::clone(&result);
            let default_name = default_name.to_string();
            self.context.introspect().get_sink_info_list(move |list| {
                if let ListResult::Item(info) = list {
                    let is_default = info.name.as_deref() == Some(default_name.as_str());
                    result.borrow_mut().push(Sink::from_info(info, is_default));
                }
            })
        };
        self.wait(operation)?;

        let sinks = result.borrow().clone();
        Ok(sinks)
    }

    /// Write a volume percentage to every channel of a sink.
    pub fn set_sink_volume(&mut self, index: u32, channels: u8, percent: u32) -> Result<()> {
        let mut volumes = ChannelVolumes::default();
        volumes.set(channels, volume::denormalize(percent));

        let accepted: Rc<RefCell<Option<bool>>> = Rc::new(RefCell::new(None));
        let operation = {
            let accepted = Rc::clone(&accepted);
            self.context.introspect().set_sink_volume_by_index(
                index,
                &volumes,
                Some(Box::new(move |success| {
                    *accepted.borrow_mut() = Some(success);
                })),
            )
        };
        self.wait(operation)?;

        if !accepted.borrow().unwrap_or(false) {
            return Err(Error::Operation(format!("set volume on sink #{index} rejected")));
        }
        debug!("sink #{} volume set to {}%", index, percent);
        Ok(())
    }

    /// Write a mute state to a sink.
    pub fn set_sink_mute(&mut self, index: u32, mute: bool) -> Result<()> {
        let accepted: Rc<RefCell<Option<bool>>> = Rc::new(RefCell::new(None));
        let operation = {
            let accepted = Rc::clone(&accepted);
            self.context.introspect().set_sink_mute_by_index(
                index,
                mute,
                Some(Box::new(move |success| {
                    *accepted.borrow_mut() = Some(success);
                })),
            )
        };
        self.wait(operation)?;

        if !accepted.borrow().unwrap_or(false) {
            return Err(Error::Operation(format!("set mute on sink #{index} rejected")));
        }
        debug!("sink #{} mute set to {}", index, mute);
        Ok(())
    }
}

impl Drop for PulseSession {
    fn drop(&mut self) {
        self.context.disconnect();
    }
}
