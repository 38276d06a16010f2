//! Precess a single B1875 boundary vertex to ICRS and print the shift.
//!
//! Usage: `cargo run -p skybound --example precess_point -- 5.5 10.0`

use skybound::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let ra: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5.5);
    let dec: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10.0);

    let t = Fk4ToIcrs::new(skybound::frame::B1875).expect("finite equinox");
    let out = t.transform_batch(&[Vertex::new(ra, dec)]);
    let p = out[0];
    let dra_s = (p.ra - ra) * 3600.0;
    let ddec_as = (p.dec - dec) * 3600.0;
    println!("B1875  ra={ra:.5}h dec={dec:+.5}°");
    println!("ICRS   ra={:.5}h dec={:+.5}°", p.ra, p.dec);
    println!("shift  {dra_s:+.1}s  {ddec_as:+.1}\"");
}
