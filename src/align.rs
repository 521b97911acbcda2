use std::{ffi::OsString, fs, path::Path};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::{config::AlignerCfg, model::WordTiming};

/// Forced-alignment capability: map transcript words onto timestamps in an
/// audio recording. Implementations wrap an external engine; the pipeline
/// only depends on the returned word timeline being ordered by time.
pub trait Aligner {
    fn align(&self, audio: &Path, transcript: &str) -> Result<Vec<WordTiming>>;
}

/// Shells out to the echogarden CLI and reads back the JSON timeline it
/// produces for the alignment.
pub struct EchogardenAligner {
    command: String,
    extra_args: Vec<String>,
}

impl EchogardenAligner {
    pub fn new(cfg: &AlignerCfg) -> Self {
        Self {
            command: cfg.command.clone(),
            extra_args: cfg.args.clone(),
        }
    }
}

impl Aligner for EchogardenAligner {
    fn align(&self, audio: &Path, transcript: &str) -> Result<Vec<WordTiming>> {
        let work = tempfile::tempdir().context("failed creating scratch directory")?;

        let transcript_path = work.path().join("transcript.txt");
        fs::write(&transcript_path, transcript)
            .context("failed writing transcript scratch file")?;

        // The engine picks its output format from the extension.
        let timeline_path = work.path().join("timeline.json");

        let mut argv: Vec<OsString> = vec![
            OsString::from("align"),
            audio.as_os_str().to_owned(),
            transcript_path.clone().into_os_string(),
            timeline_path.clone().into_os_string(),
        ];
        argv.extend(self.extra_args.iter().map(OsString::from));

        tracing::debug!(command = self.command.as_str(), "invoking alignment engine");
        let output = duct::cmd(self.command.as_str(), argv)
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .with_context(|| format!("failed launching alignment engine '{}'", self.command))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "alignment engine exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        let raw = fs::read_to_string(&timeline_path)
            .context("failed reading alignment timeline output")?;
        parse_word_timeline(&raw)
    }
}

#[derive(Debug, Deserialize)]
struct TimelineEntry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
    #[serde(rename = "startTime")]
    start_time: f64,
    #[serde(rename = "endTime")]
    end_time: f64,
    #[serde(default)]
    timeline: Vec<TimelineEntry>,
}

/// Flatten the engine's nested timeline (sentences containing words
/// containing phones) into the word-level entries, in document order.
pub fn parse_word_timeline(raw: &str) -> Result<Vec<WordTiming>> {
    let entries: Vec<TimelineEntry> =
        serde_json::from_str(raw).context("failed parsing alignment timeline JSON")?;

    let mut words = Vec::new();
    collect_words(&entries, &mut words);
    Ok(words)
}

fn collect_words(entries: &[TimelineEntry], out: &mut Vec<WordTiming>) {
    for entry in entries {
        if entry.kind == "word" {
            out.push(WordTiming {
                text: entry.text.clone(),
                start_s: entry.start_time,
                end_s: entry.end_time,
            });
        } else {
            collect_words(&entry.timeline, out);
        }
    }
}
