use std::fmt;

#[derive(Debug)]
pub enum RingError {
    AllocationFailed {
        capacity: usize,
    },
    Empty,
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { capacity } => {
                write!(
                    f,
                    "Failed to allocate ring buffer storage of {} bytes",
                    capacity
                )
            }
            Self::Empty => write!(f, "Extract from an empty ring buffer"),
        }
    }
}

impl std::error::Error for RingError {}
