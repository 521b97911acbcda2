use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};

use crate::{
    align::{Aligner, EchogardenAligner},
    chunk::chunk_words,
    cli::{ConvertCmd, SyncCmd},
    config::Config,
    error::SyncError,
    formats,
    model::{CaptionChunk, CaptionTrack},
};

const DEBUG_WORD_SAMPLES: usize = 20;

pub fn run_sync(cmd: SyncCmd, cfg: &Config) -> Result<()> {
    let span = tracing::info_span!(
        "sync",
        audio = %cmd.audio.display(),
        output = %cmd.output.display()
    );
    let _g = span.enter();

    let transcript = read_transcript(&cmd.transcript)?;
    tracing::info!(chars = transcript.chars().count(), "read transcript");

    let chunk_size = cmd.chunk_size.unwrap_or(cfg.sync.chunk_size);
    let aligner = EchogardenAligner::new(&cfg.aligner);

    synchronize(&aligner, &cmd.audio, &transcript, &cmd.output, chunk_size)?;
    tracing::info!(path = %cmd.output.display(), "wrote subtitles");

    Ok(())
}

/// Align `transcript` against `audio`, group the word timeline into chunks
/// of `chunk_size` words, and write the SRT document to `output`,
/// overwriting any existing file in a single write.
///
/// Fail-fast: nothing is flushed before the final write, so an alignment
/// failure leaves no output behind. Callers sharing an `output` path own
/// their own serialization; concurrent invocations against the same path
/// are not supported.
pub fn synchronize(
    aligner: &dyn Aligner,
    audio: &Path,
    transcript: &str,
    output: &Path,
    chunk_size: usize,
) -> Result<(), SyncError> {
    if chunk_size < 1 {
        return Err(SyncError::InvalidArgument(format!(
            "chunk size must be at least 1, got {chunk_size}"
        )));
    }

    let track = if transcript.trim().is_empty() {
        tracing::warn!("empty transcript, writing an empty caption track");
        CaptionTrack::default()
    } else {
        let words = aligner
            .align(audio, transcript)
            .map_err(SyncError::AlignmentFailed)?;
        tracing::info!(words = words.len(), "alignment complete");

        if tracing::enabled!(tracing::Level::DEBUG) {
            for (i, w) in words.iter().take(DEBUG_WORD_SAMPLES).enumerate() {
                tracing::debug!(
                    idx = i,
                    start_s = w.start_s,
                    end_s = w.end_s,
                    text = w.text.as_str(),
                    "word sample"
                );
            }
        }

        CaptionTrack::new(chunk_words(&words, chunk_size)?)
    };

    tracing::info!(
        chunks = track.chunks.len(),
        duration_s = track.duration_s(),
        "caption track built"
    );

    let rendered = formats::srt::write_srt(&track);
    fs::write(output, rendered).map_err(|source| SyncError::WriteFailed {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(())
}

fn read_transcript(arg: &str) -> Result<String> {
    if arg == "-" {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed reading transcript from stdin")?;
        Ok(buf)
    } else {
        Ok(arg.to_string())
    }
}

pub fn run_convert(cmd: ConvertCmd) -> Result<()> {
    let span = tracing::info_span!("convert", input = %cmd.input.display());
    let _g = span.enter();

    let raw = fs::read_to_string(&cmd.input)
        .with_context(|| format!("failed reading {}", cmd.input.display()))?;

    let track = parse_srt(&raw)?;
    tracing::info!(chunks = track.chunks.len(), "parsed SRT input");

    let rendered = formats::vtt::write_vtt(&track);

    if cmd.stdout {
        print!("{rendered}");
        tracing::info!(mode = "stdout", "wrote output");
        return Ok(());
    }

    let out_path = match &cmd.output {
        Some(o) => o.clone(),
        None => cmd.input.with_extension("vtt"),
    };

    if out_path.exists() && !cmd.overwrite {
        return Err(anyhow!(
            "refusing to overwrite existing file (pass --overwrite): {}",
            out_path.display()
        ));
    }

    fs::write(&out_path, rendered)
        .with_context(|| format!("failed writing {}", out_path.display()))?;
    tracing::info!(path = %out_path.display(), "wrote output file");

    Ok(())
}

fn parse_srt(raw: &str) -> Result<CaptionTrack> {
    let srt: aspasia::SubRipSubtitle = raw
        .parse()
        .map_err(|e| anyhow!("failed parsing SRT input: {e}"))?;
    let plain = aspasia::PlainSubtitle::from(&srt);

    let chunks: Vec<CaptionChunk> = plain
        .events()
        .iter()
        .enumerate()
        .map(|(i, e)| CaptionChunk {
            index: i + 1,
            start_s: moment_to_seconds(&e.start),
            end_s: moment_to_seconds(&e.end),
            text: e.text.clone(),
        })
        .collect();

    Ok(CaptionTrack::new(chunks))
}

fn moment_to_seconds(m: &aspasia::Moment) -> f64 {
    let ms = ((m.hours() * 60 + m.minutes()) * 60 + m.seconds()) * 1000 + m.ms();
    ms as f64 / 1000.0
}
