//! Suffixes command implementation.

use oxiarc_bwt::{CircularSuffixIndex, SortStrategy};

pub fn cmd_suffixes(
    text: &str,
    strategy: SortStrategy,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = text.as_bytes();
    let index = CircularSuffixIndex::with_strategy(bytes, strategy)?;

    if verbose {
        println!("{:>6} {:>6}  Rotation", "Row", "Offset");
        println!("{}", "-".repeat(40));
    }

    for (row, &offset) in index.as_slice().iter().enumerate() {
        if verbose {
            let rotation: Vec<u8> = bytes[offset..]
                .iter()
                .chain(&bytes[..offset])
                .copied()
                .collect();
            let marker = if row == index.origin_row() { "*" } else { " " };
            println!(
                "{:>6} {:>6} {}{}",
                row,
                offset,
                marker,
                String::from_utf8_lossy(&rotation)
            );
        } else {
            println!("{}", offset);
        }
    }

    Ok(())
}
