#![allow(dead_code)]

pub mod command;
pub mod file;

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// In-memory sink handed to a `Repository` as its writer
///
/// Clones share the same buffer, so a test keeps one handle and reads back
/// whatever the repository reported.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything written so far
    pub fn take(&self) -> String {
        let content = std::mem::take(&mut *self.0.borrow_mut());
        String::from_utf8(content).expect("repository output is valid UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
