use crate::ring::RingBuffer;
use std::io;

impl io::Write for RingBuffer {
    /// Short write: `Ok(0)` when the buffer is full, never an error.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.insert_range(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for RingBuffer {
    /// Short read: `Ok(0)` when the buffer is empty, never an error.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.extract_range(buf))
    }
}
