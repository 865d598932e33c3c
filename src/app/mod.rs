//! Application-facing input plumbing. Window and GPU context creation
//! belong to the embedding application; this module only aggregates its
//! winit events into the per-frame [`Input`] state the view consumes.

pub mod input;

pub use input::Input;
