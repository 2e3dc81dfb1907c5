//! LUT node inspection command

use crate::InfoArgs;
use anyhow::{Result, bail};
use colorpipe_lut::{FormatRegistry, ReadOptions};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    let options = ReadOptions {
        inverse: args.inverse,
        interpolation: args.interpolation.clone(),
        ..ReadOptions::default()
    };

    let registry = FormatRegistry::global();
    let Some(lut) = registry.read(&args.input, &options)? else {
        bail!("no registered LUT format claims {}", args.input.display());
    };

    if lut.is_empty() {
        bail!("{} holds no usable LUT", args.input.display());
    }

    println!("{}", args.input.display());
    println!(
        "  resolution:    {}x{}x{}",
        lut.resolution[0], lut.resolution[1], lut.resolution[2]
    );
    println!("  samples:       {}", lut.samples.len());
    println!("  interpolation: {}", lut.interpolation.as_name());
    println!(
        "  depths:        {} -> {}",
        lut.in_depth.as_attr(),
        lut.out_depth.as_attr()
    );

    if verbose {
        let n = lut.resolution[0] - 1;
        let black = lut.at(0, 0, 0);
        let white = lut.at(n, n, n);
        println!(
            "  black:         {:.6} {:.6} {:.6}",
            black[0], black[1], black[2]
        );
        println!(
            "  white:         {:.6} {:.6} {:.6}",
            white[0], white[1], white[2]
        );
    }

    Ok(())
}
