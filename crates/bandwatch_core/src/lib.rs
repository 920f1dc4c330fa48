#![forbid(unsafe_code)]

pub mod bands;
pub mod monitors;

pub fn crate_bootstrapped() -> bool {
    true
}
