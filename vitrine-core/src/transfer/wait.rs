//! Blocking wait on a coupled TX/RX transfer

/// A block transfer split across a transmit and a receive channel
///
/// SPI moves data in both directions at once, so an asynchronous write also
/// keeps a receive channel busy draining the RX FIFO. The transfer is only
/// over once both channels are idle.
pub trait CoupledTransfer {
    /// Transmit channel still moving data
    fn tx_busy(&self) -> bool;
    /// Receive channel still moving data
    fn rx_busy(&self) -> bool;
    /// Hand the bus back after both channels finished
    fn release(&mut self);
}

/// Block until `transfer` has fully completed, then release it
///
/// The receive side trails the transmit side, so it is the one waited on.
/// Seeing the receive channel finish while the transmit channel is still
/// busy means the channels are misconfigured; that is fatal.
pub fn wait_for_completion<C: CoupledTransfer + ?Sized>(transfer: &mut C) {
    while transfer.rx_busy() {
        core::hint::spin_loop();
    }
    if transfer.tx_busy() {
        panic!("coupled transfer: RX complete before TX");
    }
    transfer.release();
}
