//! Integration tests across the schedule builder, merge and query engine.

mod helpers;

mod dst;
mod properties;
mod when;
