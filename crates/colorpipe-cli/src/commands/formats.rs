//! Registered format listing command

use anyhow::Result;
use colorpipe_lut::{FormatCapability, FormatRegistry};

pub fn run() -> Result<()> {
    let registry = FormatRegistry::global();
    let mut names: Vec<_> = registry.format_names().collect();
    names.sort_unstable();

    for name in names {
        let Some(info) = registry.get(name) else {
            continue;
        };
        let extensions: Vec<String> = info.extensions.iter().map(|e| format!(".{}", e)).collect();
        let capabilities: Vec<&str> = info
            .capabilities
            .iter()
            .map(|c| match c {
                FormatCapability::Read => "read",
                FormatCapability::Write => "write",
            })
            .collect();
        println!(
            "{:<10} {:<12} [{}]",
            info.name,
            extensions.join(" "),
            capabilities.join(", ")
        );
    }

    Ok(())
}
