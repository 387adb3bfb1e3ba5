use des::Engine;

use anyhow::{anyhow, Context as _};
use argh::FromArgs;

use std::convert::TryInto as _;
use std::io::{self, Read as _};

#[derive(FromArgs)]
/// Encrypt and decrypt hex-encoded 64-bit blocks
struct Args {
    /// 64bit key as hex string
    #[argh(option, short = 'k')]
    key: String,

    /// decrypt instead of encrypt
    #[argh(switch, short = 'd')]
    decrypt: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let block = hex_to_u64(buffer.trim()).context("invalid block")?;
    let key = hex_to_u64(&args.key).context("invalid key")?;

    let engine = Engine::new(key);
    let output = if args.decrypt {
        engine.decrypt(block)
    } else {
        engine.encrypt(block)
    };
    println!("{}", hex::encode(output.to_be_bytes()));

    Ok(())
}

fn hex_to_u64(s: &str) -> anyhow::Result<u64> {
    let bytes_vec = hex::decode(s)?;
    let bytes: [u8; 8] = bytes_vec
        .try_into()
        .map_err(|v: Vec<_>| anyhow!("expected a hex string of 8 bytes but it was {}", v.len()))?;
    Ok(u64::from_be_bytes(bytes))
}
