//! Database models.

pub mod sta_event;

pub use sta_event::{CreateStaEvent, STA_EVENT_TABLE, StaEvent};
