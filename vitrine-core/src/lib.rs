//! Board-agnostic core of the display board firmware
//!
//! Everything here is plain data mutation over caller-owned memory; there is
//! no allocator and no hidden global state.
//!
//! ```text
//!  main loop                              completion context (DMA IRQ)
//!  ─────────                              ────────────────────────────
//!  Canvas ──draw──▶ FrameOrchestrator
//!                        │ swap
//!                        ▼
//!  Feeder ──enqueue──▶ [queued ring] ──pop──▶ Engine ──start──▶ TransferSink
//!     ▲                                          │
//!     └────checkout──── [free ring] ◀──retire────┘
//! ```
//!
//! - [`canvas`]: RGB565 pixel buffer with stride and clipped primitives
//! - [`ring`]: wait-free single-producer/single-consumer ring
//! - [`transfer`]: descriptor pool and the async transfer driver
//! - [`frame`]: double-buffered frame orchestration
//! - [`text`]: scrolling text log over fixed arenas
//! - [`font`]: FONTX2 glyph source and text rendering
//! - [`config`]: board configuration types

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod canvas;
pub mod color;
pub mod config;
pub mod font;
pub mod frame;
pub mod ring;
pub mod text;
pub mod transfer;

pub use canvas::{Canvas, CanvasError};
pub use color::Rgb565;
pub use config::{BoardConfig, ConfigError};
pub use font::{FontX2, GlyphSource};
pub use frame::{FrameOrchestrator, FrameReport, FrameSink, Window};
pub use ring::Ring;
pub use text::{TextBoxId, TextLog, TextLogError};
pub use transfer::{Handoff, TransferError, TransferQueue, TransferSink};
