//! Slot allocation for the performance grid and the drift tabs

pub mod layout_allocator;
