//! Pointer event types
//!
//! Events are delivered by the host with positions relative to the target
//! widget's surface.

use crate::geometry::Point;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_LEAVE: EventType = 5;
    /// The host took the pointer away (scroll started, window lost focus)
    pub const POINTER_CANCEL: EventType = 8;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer { x: f32, y: f32 },
    None,
}

impl Event {
    /// Primary-button pointer event at a surface-relative position
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            event_type,
            data: EventData::Pointer { x, y },
        }
    }

    /// Event without payload, such as a cancel
    pub fn bare(event_type: EventType) -> Self {
        Self {
            event_type,
            data: EventData::None,
        }
    }

    /// Pointer position, if this is a pointer event
    pub fn position(&self) -> Option<Point> {
        match self.data {
            EventData::Pointer { x, y, .. } => Some(Point::new(x, y)),
            EventData::None => None,
        }
    }
}
