//! Reads a hex private key from stdin and prints the derived identity.

use btckey::{PrivateKey, Result};
use std::io::Read;

fn run() -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let sk = PrivateKey::from_hex(input.trim())?;
    let pk = sk.public_key();

    println!("Compressed PubKey: {}", pk.to_hex());
    println!("WIF: {}", sk.to_wif());
    println!("Address: {}", pk.address());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
