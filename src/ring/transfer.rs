use super::RingError;
use crate::ring::RingBuffer;
use crate::ring::buffer::Occupancy;

impl RingBuffer {
    /// Allocates exactly `capacity` bytes of backing storage. Capacity 0 is
    /// legal and yields a buffer that is permanently empty and never full.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| RingError::AllocationFailed { capacity })?;
        buf.resize(capacity, 0);

        Ok(Self {
            buf,
            capacity,
            head: 0,
            tail: 0,
            state: Occupancy::Empty,
        })
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn used(&self) -> usize {
        match self.state {
            Occupancy::Empty => 0,
            Occupancy::Occupied => {
                if self.head < self.tail {
                    self.tail - self.head
                } else {
                    self.capacity - (self.head - self.tail)
                }
            }
        }
    }

    #[inline(always)]
    pub fn available(&self) -> usize {
        self.capacity - self.used()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.state == Occupancy::Empty
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        !self.is_empty() && self.head == self.tail
    }

    /// Copies as many bytes as possible from `data` without overwriting
    /// unread bytes. Short write: returns the count actually copied, which
    /// may be less than `data.len()` when the buffer fills up mid-call.
    #[inline]
    pub fn insert_range(&mut self, data: &[u8]) -> usize {
        if data.is_empty() || self.is_full() {
            return 0;
        }

        let mut copied = 0;

        if self.tail >= self.head {
            // Free run from tail to the physical end, then wrap.
            let run = (self.capacity - self.tail).min(data.len());
            self.buf[self.tail..self.tail + run].copy_from_slice(&data[..run]);
            self.tail += run;
            if self.tail == self.capacity {
                self.tail = 0;
            }
            copied += run;
        }

        if copied < data.len() {
            // Remaining free run is bounded by head; tail must not cross it.
            let run = (self.head - self.tail).min(data.len() - copied);
            self.buf[self.tail..self.tail + run].copy_from_slice(&data[copied..copied + run]);
            self.tail += run;
            copied += run;
        }

        if copied > 0 {
            self.state = Occupancy::Occupied;
        }
        copied
    }

    #[inline]
    pub fn insert_value(&mut self, value: u8) -> bool {
        self.insert_range(&[value]) == 1
    }

    /// Copies as many bytes as possible into `out`, in FIFO order. Short
    /// read: returns the count actually copied.
    #[inline]
    pub fn extract_range(&mut self, out: &mut [u8]) -> usize {
        if out.is_empty() || self.is_empty() {
            return 0;
        }

        let mut copied = 0;

        if self.head >= self.tail {
            // Occupied run from head to the physical end, then wrap.
            let run = (self.capacity - self.head).min(out.len());
            out[..run].copy_from_slice(&self.buf[self.head..self.head + run]);
            self.head += run;
            if self.head == self.capacity {
                self.head = 0;
            }
            copied += run;
            // The first segment alone can drain the buffer.
            if self.head == self.tail {
                self.state = Occupancy::Empty;
            }
            if copied == out.len() {
                return copied;
            }
        }

        let run = (self.tail - self.head).min(out.len() - copied);
        out[copied..copied + run].copy_from_slice(&self.buf[self.head..self.head + run]);
        self.head += run;
        if self.head == self.tail {
            self.state = Occupancy::Empty;
        }
        copied + run
    }

    /// Extracts exactly one byte. Calling this on an empty buffer is a
    /// precondition violation and reports `RingError::Empty`.
    #[inline]
    pub fn extract_value(&mut self) -> Result<u8, RingError> {
        let mut scratch = [0u8; 1];
        if self.extract_range(&mut scratch) == 0 {
            return Err(RingError::Empty);
        }
        Ok(scratch[0])
    }
}
