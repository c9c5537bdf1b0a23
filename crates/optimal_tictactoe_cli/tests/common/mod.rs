//! Shared helpers for console tests.

#![allow(dead_code)]

use optimal_tictactoe_cli::Console;
use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

/// Output sink the test can read back after the console is done with it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A plain console fed with `input`, plus a handle on what it prints.
pub fn scripted_console(input: &str) -> (Console, SharedBuffer) {
    let output = SharedBuffer::default();
    let console = Console::new(
        Box::new(Cursor::new(input.to_string())),
        Box::new(output.clone()),
    );
    (console, output)
}
