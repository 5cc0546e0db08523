//! Resource facades: one thin module per addressable collection.
//!
//! Each public method wires validate → build → send → normalize, in that
//! order, with validation failures short-circuiting before the transport is
//! touched.

mod announcements;
mod conversations;
mod messages;

pub use announcements::Announcements;
pub use conversations::Conversations;
pub use messages::Messages;
