//! Port traits: seams between the domain and the outside world.

pub mod log_port;
