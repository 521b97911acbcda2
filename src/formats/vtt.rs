use crate::{formats::time::format_vtt_timestamp, model::CaptionTrack};

/// Render a WebVTT document: header, blank line, then unnumbered cue
/// blocks. Ends with a single trailing newline.
pub fn write_vtt(track: &CaptionTrack) -> String {
    let mut out = String::from("WEBVTT\n\n");

    for chunk in &track.chunks {
        out.push_str(&format!(
            "{} --> {}\n",
            format_vtt_timestamp(chunk.start_s),
            format_vtt_timestamp(chunk.end_s)
        ));
        out.push_str(&chunk.text);
        out.push_str("\n\n");
    }

    let mut doc = out.trim_end().to_string();
    doc.push('\n');
    doc
}
