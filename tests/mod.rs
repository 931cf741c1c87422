//! Test suite for the Pokédex client
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;
