//! Report formatting
//!
//! A volume report is one line on stdout: the format template with its `%s`
//! replaced by the numeric percentage, or by `---` while muted. Writes are
//! flushed immediately so monitor-mode consumers can read line-by-line.

use std::io::Write;

use crate::error::Result;
use crate::sink::Sink;

/// Printed in place of the percentage while the sink is muted
pub const MUTED_PLACEHOLDER: &str = "---";

/// Volume value for one sink: the percentage, or the muted placeholder.
fn volume_value(sink: &Sink) -> String {
    if sink.muted {
        MUTED_PLACEHOLDER.to_string()
    } else {
        sink.volume_percent.to_string()
    }
}

/// Render the format template for one sink. The first `%s` receives the
/// volume value; a template without `%s` is rendered verbatim.
pub fn render(template: &str, sink: &Sink) -> String {
    template.replacen("%s", &volume_value(sink), 1)
}

/// Write one volume report line and flush.
pub fn print_report(out: &mut impl Write, template: &str, sink: &Sink) -> Result<()> {
    writeln!(out, "{}", render(template, sink))?;
    out.flush()?;
    Ok(())
}

/// Render one line of the sink listing: index, name, volume, markers.
pub fn render_sink_line(sink: &Sink) -> String {
    let mut line = format!("{:>3}  {:>4}  {}", sink.index, volume_value(sink), sink.name);
    if sink.muted {
        line.push_str("  muted");
    }
    if sink.is_default {
        line.push_str("  (default)");
    }
    line
}

/// Write the sink listing and flush.
pub fn print_sink_list(out: &mut impl Write, sinks: &[Sink]) -> Result<()> {
    for sink in sinks {
        writeln!(out, "{}", render_sink_line(sink))?;
    }
    out.flush()?;
    Ok(())
}
