use anyhow::{bail, Context, Result};

const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count as a human-readable string using powers of 1024
/// (B, KB, MB, GB, ...), with one decimal place above a kilobyte.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}

/// Parse a human-readable size such as `"500MB"`, `"1.5 gib"` or `"4096"`
/// into a byte count. Units are case-insensitive and 1024-based; an empty
/// string is zero bytes.
pub fn parse_bytes(input: &str) -> Result<u64> {
    let input = input.trim();
    let split = input
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(split);

    let number = number.replace(',', "");
    let value: f64 = if number.is_empty() {
        0.0
    } else {
        number
            .parse()
            .with_context(|| format!("invalid number: {:?}", number))?
    };

    let multiplier = unit_multiplier(unit)?;
    let bytes = value * multiplier as f64;
    if bytes >= u64::MAX as f64 {
        bail!("number of bytes too large: {:?}", input);
    }
    Ok(bytes as u64)
}

fn unit_multiplier(unit: &str) -> Result<u64> {
    let multiplier = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" | "kib" => 1 << 10,
        "m" | "mb" | "mib" => 1 << 20,
        "g" | "gb" | "gib" => 1 << 30,
        "t" | "tb" | "tib" => 1 << 40,
        "p" | "pb" | "pib" => 1 << 50,
        other => bail!("unknown unit: {:?}", other),
    };
    Ok(multiplier)
}
