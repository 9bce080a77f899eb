#![allow(dead_code)]

pub mod observations;
