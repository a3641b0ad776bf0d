//! Probing, scanning and persistence for `netscan`.
//!
//! * [`network::tcp`] decides whether one port accepts connections.
//! * [`scanner`] walks hosts and port lists and builds reports.
//! * [`report`] writes reports to disk.
//! * [`public_ip`] looks up the address other hosts see for this machine.

pub mod network;
pub mod public_ip;
pub mod report;
pub mod scanner;
