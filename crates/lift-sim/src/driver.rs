//! Real-time periodic driver.
//!
//! Ticks a [`Controller`] at its configured cadence on a background thread.
//! Each tick is one short critical section, so request handlers are never
//! locked out for longer than a single step.

use std::thread::{self, JoinHandle};

use crossbeam_channel as cbc;
use tracing::{debug, info};

use lift_dispatch::CarObserver;

use crate::{Controller, SimError, SimResult};

/// Handle to a running driver thread.  Dropping it stops the thread.
pub struct PeriodicDriver {
    stop_tx: Option<cbc::Sender<()>>,
    handle:  Option<JoinHandle<u64>>,
}

impl PeriodicDriver {
    /// Start ticking `controller` every `tick_millis`.
    pub fn spawn<O>(controller: Controller<O>) -> SimResult<Self>
    where
        O: CarObserver + Send + 'static,
    {
        let period = controller.tick_duration();
        let (stop_tx, stop_rx) = cbc::bounded::<()>(1);

        let handle = thread::Builder::new()
            .name("lift-driver".into())
            .spawn(move || {
                let ticker = cbc::tick(period);
                let mut ticks = 0u64;
                info!(?period, "driver started");
                loop {
                    cbc::select! {
                        recv(ticker) -> _ => {
                            controller.tick();
                            ticks += 1;
                        }
                        recv(stop_rx) -> _ => break,
                    }
                }
                debug!(ticks, "driver stopped");
                ticks
            })
            .map_err(|e| SimError::Driver(e.to_string()))?;

        Ok(Self { stop_tx: Some(stop_tx), handle: Some(handle) })
    }

    /// Stop the thread and wait for it.  Returns the number of ticks driven.
    pub fn stop(mut self) -> SimResult<u64> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> SimResult<u64> {
        // Dropping the sender also wakes the `recv(stop_rx)` arm.
        self.stop_tx.take();
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| SimError::Driver("driver thread panicked".into())),
            None => Ok(0),
        }
    }
}

impl Drop for PeriodicDriver {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
