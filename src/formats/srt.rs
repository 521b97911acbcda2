use crate::{formats::time::format_srt_timestamp, model::CaptionTrack};

/// Render numbered SRT cue blocks separated by blank lines. The trailing
/// whitespace run is trimmed, so the final block carries no blank line and
/// an empty track renders to zero bytes.
pub fn write_srt(track: &CaptionTrack) -> String {
    let mut out = String::new();

    for chunk in &track.chunks {
        out.push_str(&chunk.index.to_string());
        out.push('\n');

        out.push_str(&format!(
            "{} --> {}\n",
            format_srt_timestamp(chunk.start_s),
            format_srt_timestamp(chunk.end_s)
        ));

        out.push_str(&chunk.text);
        out.push_str("\n\n");
    }

    out.trim_end().to_string()
}
