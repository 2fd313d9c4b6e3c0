#![no_std]

pub mod pause;
pub mod roles;
