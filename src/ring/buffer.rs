/// Resolves the `head == tail` ambiguity: the buffer is full iff it is
/// `Occupied` while the cursors coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Occupancy {
    Empty,
    Occupied,
}

pub struct RingBuffer {
    pub(crate) buf: Vec<u8>,
    pub(crate) capacity: usize,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) state: Occupancy,
}
