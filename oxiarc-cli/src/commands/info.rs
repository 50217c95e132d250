//! Info command implementation.

use crate::utils::{percent, read_all};
use oxiarc_bwt::{BwtConfig, HEADER_LEN, mtf, read_frame};
use std::path::Path;

pub fn cmd_info(input: Option<&Path>, config: BwtConfig) -> Result<(), Box<dyn std::error::Error>> {
    let stream = read_all(input)?;

    println!("Stream Information");
    println!("==================");
    println!(
        "Source: {}",
        input.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
    );
    println!("Size: {} bytes", stream.len());

    if stream.is_empty() {
        println!("Empty stream (decodes to empty text)");
        return Ok(());
    }

    let frame = read_frame(&stream)?;
    println!("Header: {} bytes", HEADER_LEN);
    println!("Origin row: {}", frame.first);
    println!("Text length: {} bytes", frame.len());
    println!(
        "Move-to-front: {}",
        if config.move_to_front { "yes" } else { "no" }
    );

    let codes = &frame.last;
    let zeros = codes.iter().filter(|&&c| c == 0).count();
    let mut used = [false; 256];
    for &c in codes {
        used[c as usize] = true;
    }

    println!();
    println!("Codes:");
    println!(
        "  Zero codes: {} ({:.1}%)",
        zeros,
        percent(zeros, codes.len())
    );
    println!(
        "  Distinct values: {}",
        used.iter().filter(|&&u| u).count()
    );

    if config.move_to_front {
        let last = mtf::inverse_transform(codes);
        let runs = if last.is_empty() {
            0
        } else {
            1 + last.windows(2).filter(|w| w[0] != w[1]).count()
        };
        println!("  Runs in last column: {}", runs);
    }

    if frame.first >= frame.len() {
        println!();
        println!("Warning: origin row is outside the text");
    }

    Ok(())
}
