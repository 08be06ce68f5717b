//! Business logic layer.
//!
//! Services orchestrate one business operation per call: they fetch through the data
//! layer, apply the domain rules, and hand DTOs back to the controllers.

pub mod user;

#[cfg(test)]
mod test;
