//! Forward and inverse slab calculations.

pub mod schedule;

pub use schedule::{ScheduleError, SlabSchedule, TaxError};
