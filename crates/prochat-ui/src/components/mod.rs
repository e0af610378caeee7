//! Yew components exported by the crate.

pub mod icons;
