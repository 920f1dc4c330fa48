#![forbid(unsafe_code)]

pub mod config;
pub mod report;

pub fn infra_bootstrapped() -> bool {
    bandwatch_core::crate_bootstrapped()
}
