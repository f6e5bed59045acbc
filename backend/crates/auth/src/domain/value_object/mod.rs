//! Value Object Module

pub mod phone_number;
