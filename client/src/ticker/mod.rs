use std::{
    sync::{
        mpsc::{self, Sender},
        Arc, RwLock,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use anyhow::Context;
use log::{debug, warn};
use sleeper::Sleeper;

use crate::{renderer, State};

pub mod sleeper;

/// Handle to a background thread that keeps stepping the simulation.
pub struct TickerHost {
    stop_sender: Sender<()>,
    rate_sender: Sender<u64>,
    handle: JoinHandle<()>,
}

impl TickerHost {
    pub fn start(state_arc: Arc<RwLock<State>>, interval_millis: u64) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel();
        let (rate_sender, rate_receiver) = mpsc::channel();

        let handle = thread::spawn(move || {
            let mut sleeper = Sleeper::from_millis(interval_millis);

            debug!("Ticker started at {interval_millis}ms");

            while stop_receiver.try_recv().is_err() {
                let Ok(mut state) = state_arc.write() else {
                    warn!("State lock poisoned, stopping ticker");
                    break;
                };
                state.simulation.next();
                renderer::draw(state.simulation.grid(), state.simulation.generation_number());
                drop(state);

                if let Ok(rate) = rate_receiver.try_recv() {
                    sleeper.target_delta_time = Duration::from_millis(rate);
                }

                sleeper.sleep();
            }

            debug!("Ticker stopped");
        });

        Self {
            stop_sender,
            rate_sender,
            handle,
        }
    }

    /// Must not be called while holding the state lock, the ticker may be waiting on it.
    pub fn stop(self) -> anyhow::Result<()> {
        // The thread may already be gone if it bailed out on its own.
        let _ = self.stop_sender.send(());

        self.handle
            .join()
            .map_err(|_| anyhow::anyhow!("Ticker thread panicked"))
    }

    pub fn set_rate(&mut self, rate_millis: u64) -> anyhow::Result<()> {
        self.rate_sender
            .send(rate_millis)
            .context("Ticker is no longer running")
    }
}
