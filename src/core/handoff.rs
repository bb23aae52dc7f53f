//! # Selection Hand-off Cell / 选择交接单元
//!
//! A single-slot synchronization cell that carries the result of the modal
//! selection dialog from the UI thread back to the invoking thread. The
//! calling thread blocks taking the value; the dialog's callback places
//! exactly one value and returns. At most one write and at most one read
//! happen per invocation; there is no timeout, inherited from the
//! modal-dialog contract.
//!
//! 单槽同步单元，将模态选择对话框的结果从 UI 线程传回调用线程。
//! 调用线程在取值时阻塞；对话框的回调放入恰好一个值后返回。
//! 每次调用至多一次写入、至多一次读取；没有超时，这继承自模态对话框的契约。

use std::sync::{Condvar, Mutex};

/// The single-slot cell. One writer, one reader, no timeout.
///
/// 单槽单元。一个写入者，一个读取者，没有超时。
#[derive(Debug)]
pub struct HandoffCell<T> {
    slot: Mutex<Option<T>>,
    available: Condvar,
}

impl<T> HandoffCell<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            available: Condvar::new(),
        }
    }

    /// Places the value into the cell and wakes the blocked reader.
    ///
    /// # Panics
    ///
    /// Panics if a value is already present. The dialog completes at most
    /// once, so a second write is a programming error.
    pub fn put(&self, value: T) {
        let mut slot = self.slot.lock().expect("hand-off cell lock poisoned");
        assert!(
            slot.is_none(),
            "hand-off cell written twice within one invocation"
        );
        *slot = Some(value);
        self.available.notify_one();
    }

    /// Blocks until a value has been placed and takes it out of the cell.
    pub fn take(&self) -> T {
        let mut slot = self.slot.lock().expect("hand-off cell lock poisoned");
        loop {
            match slot.take() {
                Some(value) => return value,
                None => {
                    slot = self
                        .available
                        .wait(slot)
                        .expect("hand-off cell lock poisoned");
                }
            }
        }
    }
}

impl<T> Default for HandoffCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
