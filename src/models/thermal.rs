//! Thermal systems models.
//!
//! This module contains models for thermal equipment, currently preliminary
//! sizing of shell-and-tube heat exchangers.

pub mod shell_and_tube;
