// src/lib.rs

//! Madrid open-data archive link tracker library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
