//! Live Scanning
//!
//! A self-rescheduling loop: grab a frame, diagnose it off the async
//! executor, publish the result, sleep for the scan interval, repeat.
//!
//! Results go through a [`PredictionSlot`] that only ever moves forward:
//! every inference takes a [`ScanTicket`] before it starts and its result is
//! dropped if a newer ticket already published, or if the slot was cleared
//! after the ticket was issued. Stopping is idempotent and always leaves the
//! slot empty.

use crate::crops::Crop;
use crate::inference::{Diagnoser, Diagnosis};
use anyhow::{Context, Result};
use image::RgbImage;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_millis(500);

/// Source of live frames (camera, video file, test fixture)
pub trait FrameSource: Send + 'static {
    /// `None` when no frame is ready yet; the tick is skipped
    fn next_frame(&mut self) -> Option<RgbImage>;
}

/// Issued before an inference starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTicket {
    epoch: u64,
    seq: u64,
}

#[derive(Debug, Default)]
struct SlotState {
    epoch: u64,
    next_seq: u64,
    published_seq: u64,
    current: Option<Diagnosis>,
    frames: u64,
}

/// Latest-wins holder of the externally visible prediction
#[derive(Debug, Default)]
pub struct PredictionSlot {
    state: Mutex<SlotState>,
}

impl PredictionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> ScanTicket {
        let mut state = self.state.lock();
        state.next_seq += 1;
        ScanTicket {
            epoch: state.epoch,
            seq: state.next_seq,
        }
    }

    /// Returns `false` if the result is stale and was discarded
    pub fn publish(&self, ticket: ScanTicket, diagnosis: Diagnosis) -> bool {
        let mut state = self.state.lock();
        if ticket.epoch != state.epoch || ticket.seq <= state.published_seq {
            return false;
        }
        state.published_seq = ticket.seq;
        state.current = Some(diagnosis);
        state.frames += 1;
        true
    }

    /// Drop the current prediction and invalidate every outstanding ticket
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.epoch += 1;
        state.current = None;
    }

    pub fn current(&self) -> Option<Diagnosis> {
        self.state.lock().current.clone()
    }

    /// Number of results published so far
    pub fn frame_count(&self) -> u64 {
        self.state.lock().frames
    }
}

/// One live-scanning session for a crop
pub struct ScanSession {
    diagnoser: Arc<dyn Diagnoser>,
    crop: Crop,
    interval: Duration,
    slot: Arc<PredictionSlot>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ScanSession {
    pub fn new(diagnoser: Arc<dyn Diagnoser>, crop: Crop) -> Self {
        Self::with_interval(diagnoser, crop, DEFAULT_SCAN_INTERVAL)
    }

    pub fn with_interval(diagnoser: Arc<dyn Diagnoser>, crop: Crop, interval: Duration) -> Self {
        Self {
            diagnoser,
            crop,
            interval,
            slot: Arc::new(PredictionSlot::new()),
            task: Mutex::new(None),
        }
    }

    pub fn crop(&self) -> Crop {
        self.crop
    }

    pub fn slot(&self) -> Arc<PredictionSlot> {
        Arc::clone(&self.slot)
    }

    pub fn current(&self) -> Option<Diagnosis> {
        self.slot.current()
    }

    pub fn is_scanning(&self) -> bool {
        self.task
            .lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Start the loop on the current tokio runtime
    ///
    /// Returns `Ok(false)` if a scan is already running.
    pub fn start<F: FrameSource>(&self, source: F) -> Result<bool> {
        let handle = Handle::try_current().context("Live scanning needs a tokio runtime")?;

        let mut task = self.task.lock();
        if task.as_ref().is_some_and(|t| !t.is_finished()) {
            return Ok(false);
        }

        tracing::info!(crop = %self.crop, model = %self.diagnoser.kind(), "Starting live scan");
        *task = Some(handle.spawn(scan_loop(
            source,
            Arc::clone(&self.diagnoser),
            self.crop,
            self.interval,
            Arc::clone(&self.slot),
        )));
        Ok(true)
    }

    /// Cancel the pending iteration and clear the current prediction
    ///
    /// Safe to call repeatedly or when no scan is running.
    pub fn stop(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
            tracing::info!(crop = %self.crop, "Stopped live scan");
        }
        self.slot.clear();
    }

    /// One-shot analysis of an uploaded image, through the same slot
    pub async fn analyze(&self, image: RgbImage) -> Result<Option<Diagnosis>> {
        let ticket = self.slot.begin();
        let diagnoser = Arc::clone(&self.diagnoser);
        let crop = self.crop;

        let diagnosis = tokio::task::spawn_blocking(move || diagnoser.diagnose(&image, crop))
            .await
            .context("Inference task panicked")??;

        if self.slot.publish(ticket, diagnosis.clone()) {
            Ok(Some(diagnosis))
        } else {
            tracing::debug!("Discarded stale analysis result");
            Ok(None)
        }
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        if let Some(task) = self.task.get_mut().take() {
            task.abort();
        }
    }
}

async fn scan_loop<F: FrameSource>(
    mut source: F,
    diagnoser: Arc<dyn Diagnoser>,
    crop: Crop,
    interval: Duration,
    slot: Arc<PredictionSlot>,
) {
    loop {
        if let Some(frame) = source.next_frame() {
            let ticket = slot.begin();
            let d = Arc::clone(&diagnoser);
            match tokio::task::spawn_blocking(move || d.diagnose(&frame, crop)).await {
                Ok(Ok(diagnosis)) => {
                    if !slot.publish(ticket, diagnosis) {
                        tracing::warn!(?ticket, "Discarded out-of-order scan result");
                    }
                }
                Ok(Err(e)) => tracing::warn!("Scan inference failed: {}", e),
                Err(e) => tracing::warn!("Scan inference task failed: {}", e),
            }
        }
        tokio::time::sleep(interval).await;
    }
}
