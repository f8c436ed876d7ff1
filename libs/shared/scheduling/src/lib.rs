pub mod client;

pub use client::{SchedulingClient, SchedulingError};
