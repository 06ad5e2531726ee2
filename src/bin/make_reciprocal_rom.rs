// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

use std::env::args;
use std::io::{stdout, BufWriter, Write};

use anyhow::{Context, Result};
use log::{debug, warn};

// usage:
//
//  ./make_reciprocal_rom > reciprocal_rom.v
//
// Diagnostics go to stderr and are controlled by RUST_LOG.

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let extra: Vec<String> = args().skip(1).collect();
    if !extra.is_empty() {
        warn!("ignoring unexpected arguments: {:?}", extra);
    }

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    reciprocal_rom::write_rom(&mut out).context("failed to write reciprocal ROM to stdout")?;
    out.flush().context("failed to flush reciprocal ROM to stdout")?;

    debug!("done");
    Ok(())
}
