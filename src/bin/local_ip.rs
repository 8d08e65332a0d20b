//! Prints the address this host would use for outbound traffic.
//!
//! Usage:
//!   cargo run --bin local_ip

use water_quality_service::net;

fn main() {
    println!("Local IP Address: {}", net::local_ip_address());
}
