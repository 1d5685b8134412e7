//! src/source/serial.rs
//!
//! Counts lines arriving on a serial port as hits.
//!
//! A line holding just a number (`5`, or `hits 5`) adds that many hits;
//! any other non-empty line adds one.

use std::io::{BufRead, BufReader};
use std::sync::PoisonError;
use std::thread;
use std::time::Duration;

use log::{info, warn};

use crate::graph::shared::SharedGraph;

/// Hits represented by one received line.
pub fn hits_in_line(line: &str) -> u64 {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return 0;
    }
    let mut parts = trimmed.split_whitespace();
    let first = parts.next().unwrap_or_default();
    let count = match (first.parse::<u64>(), parts.next()) {
        (Ok(n), None) => Some(n),
        (Err(_), Some(n)) if first.eq_ignore_ascii_case("hits") && parts.next().is_none() => {
            n.parse::<u64>().ok()
        }
        _ => None,
    };
    count.unwrap_or(1)
}

/// Spawn a thread reading `port_name` line by line and adding the hits to
/// every graph in `graphs`.
pub fn start_serial_reader(port_name: &str, baud_rate: u32, graphs: Vec<SharedGraph>) {
    let port_name = port_name.to_string();
    thread::spawn(move || {
        info!("opening serial port {} @ {} baud", port_name, baud_rate);
        let port = match serialport::new(&port_name, baud_rate)
            .timeout(Duration::from_secs(10))
            .open()
        {
            Ok(p) => p,
            Err(e) => {
                warn!("failed to open serial port {}: {}", port_name, e);
                return;
            }
        };
        let reader = BufReader::new(port);
        for line_res in reader.lines() {
            match line_res {
                Ok(line) => {
                    let hits = hits_in_line(&line);
                    if hits == 0 {
                        continue;
                    }
                    for g in &graphs {
                        g.write()
                            .unwrap_or_else(PoisonError::into_inner)
                            .graph
                            .add_hits(hits);
                    }
                }
                Err(e) => {
                    warn!("error reading serial data: {}", e);
                    break;
                }
            }
        }
        info!("serial reader on {} exiting", port_name);
    });
}
