//! Board support for running the QTR-8A driver on a NUCLEO-F401RE.

#![no_std]

pub mod sensors;
