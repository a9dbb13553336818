//! `FifoString` as an in-memory I/O buffer: writers append, readers pop.

use crate::fifo_string::FifoString;
use std::{cmp, fmt, io};

impl io::Write for FifoString {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for FifoString {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let n = cmp::min(out.len(), self.len());
        out[..n].copy_from_slice(&self.view()[..n]);
        self.pop_front_n(n);
        Ok(n)
    }
}

impl io::BufRead for FifoString {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.view())
    }

    fn consume(&mut self, amt: usize) {
        self.pop_front_n(amt);
    }
}

impl fmt::Write for FifoString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.extend_from_slice(s.as_bytes());
        Ok(())
    }
}
