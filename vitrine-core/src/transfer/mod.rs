//! Asynchronous transfer driver
//!
//! Moves fixed-size descriptors between a producer running in the main loop
//! and a completion handler running in interrupt context:
//!
//! ```text
//!            checkout                 enqueue
//!  [free] ───────────▶ Filling ───────────────▶ [queued]
//!    ▲                                             │ pop
//!    │ retire                                      ▼
//!    └──────────────── InFlight ◀──── TransferSink::start
//! ```
//!
//! Every descriptor lives in exactly one place at a time: the free ring, the
//! feeder's hands, the queued ring, or the engine's active slot. The rings
//! are [`Ring`](crate::ring::Ring)s, so each crossing is a wait-free SPSC
//! push/pop.

mod descriptor;
mod queue;
mod wait;

pub use descriptor::{Descriptor, DescriptorState};
pub use queue::{Engine, Feeder, Handoff, TransferQueue, TransferStats};
pub use wait::{wait_for_completion, CoupledTransfer};

/// Errors from the descriptor pool and transfer queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferError {
    /// No free descriptor is available
    PoolEmpty,
    /// The queued ring is full; the caller keeps the descriptor
    QueueFull,
    /// The free pool cannot hold the descriptors being provisioned
    PoolFull,
    /// Zero-sized chunk or an otherwise unusable argument
    InvalidParameter,
}

/// Hardware end of a transfer engine
///
/// Both calls run in completion context and must return in bounded time.
pub trait TransferSink<W> {
    /// Program the hardware to move `payload`
    ///
    /// The slice stays borrowed by the engine until the next completion, so
    /// the hardware may keep reading it after this returns.
    fn start(&mut self, payload: &[W]);

    /// Disable the hardware trigger; called when the queue runs dry
    fn stop(&mut self);
}
