//! Transform command implementation (bwt, mtf, pipeline).

use crate::utils::{open_input, open_output};
use oxiarc_core::{Codec, Direction};
use std::path::Path;

/// Run `codec` from `input` to `output` in the direction named by `switch`.
///
/// A missing or unknown switch does nothing.
pub fn cmd_transform(
    codec: &dyn Codec,
    switch: Option<&str>,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(direction) = switch.and_then(Direction::from_switch) else {
        tracing::debug!(?switch, codec = codec.name(), "no direction given, nothing to do");
        return Ok(());
    };

    let mut reader = open_input(input)?;
    let mut writer = open_output(output)?;
    let written = codec.apply_stream(direction, &mut reader, &mut writer)?;

    tracing::info!(codec = codec.name(), ?direction, written, "done");
    Ok(())
}
