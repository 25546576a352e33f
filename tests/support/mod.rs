#![allow(dead_code)]

pub mod architecture;
pub mod rates;
pub mod transport;
