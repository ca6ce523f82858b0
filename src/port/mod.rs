//! Trait seams between the command router and the outside world.

pub mod outbound;
