mod availability_slot;

pub use availability_slot::*;
