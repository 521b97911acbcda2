use std::{
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

use anyhow::{Result, anyhow};

use subsync::{
    align::Aligner,
    error::SyncError,
    model::WordTiming,
    pipeline::synchronize,
};

struct StubAligner {
    words: Vec<WordTiming>,
    calls: AtomicUsize,
}

impl StubAligner {
    fn new(words: Vec<WordTiming>) -> Self {
        Self {
            words,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Aligner for StubAligner {
    fn align(&self, _audio: &Path, _transcript: &str) -> Result<Vec<WordTiming>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.words.clone())
    }
}

struct FailingAligner;

impl Aligner for FailingAligner {
    fn align(&self, _audio: &Path, _transcript: &str) -> Result<Vec<WordTiming>> {
        Err(anyhow!("engine refused the audio"))
    }
}

fn word(text: &str, start_s: f64, end_s: f64) -> WordTiming {
    WordTiming {
        text: text.to_string(),
        start_s,
        end_s,
    }
}

fn hello_world_today() -> Vec<WordTiming> {
    vec![
        word("Hello", 0.0, 0.5),
        word("world", 0.6, 1.0),
        word("today", 1.1, 1.6),
    ]
}

#[test]
fn writes_single_chunk_srt_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.srt");
    let aligner = StubAligner::new(hello_world_today());

    synchronize(&aligner, Path::new("audio.mp3"), "Hello world today", &out, 3).unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, "1\n00:00:00,000 --> 00:00:01,600\nHello world today");
}

#[test]
fn splits_timeline_into_numbered_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.srt");
    let mut words = hello_world_today();
    words.push(word("and", 1.75, 2.0));
    words.push(word("tomorrow", 2.25, 2.5));
    let aligner = StubAligner::new(words);

    synchronize(
        &aligner,
        Path::new("audio.mp3"),
        "Hello world today and tomorrow",
        &out,
        2,
    )
    .unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    let blocks: Vec<&str> = written.split("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0], "1\n00:00:00,000 --> 00:00:01,000\nHello world");
    assert_eq!(blocks[1], "2\n00:00:01,100 --> 00:00:02,000\ntoday and");
    assert_eq!(blocks[2], "3\n00:00:02,250 --> 00:00:02,500\ntomorrow");
}

#[test]
fn empty_transcript_skips_alignment_and_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.srt");
    let aligner = StubAligner::new(hello_world_today());

    synchronize(&aligner, Path::new("audio.mp3"), "   \n", &out, 3).unwrap();

    assert_eq!(aligner.calls.load(Ordering::SeqCst), 0);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "");
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.srt");
    std::fs::write(&out, "stale content").unwrap();
    let aligner = StubAligner::new(hello_world_today());

    synchronize(&aligner, Path::new("audio.mp3"), "Hello world today", &out, 3).unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("1\n"));
    assert!(!written.contains("stale"));
}

#[test]
fn zero_chunk_size_is_invalid_argument() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.srt");
    let aligner = StubAligner::new(hello_world_today());

    let err = synchronize(&aligner, Path::new("audio.mp3"), "Hello", &out, 0).unwrap_err();

    assert!(matches!(err, SyncError::InvalidArgument(_)));
    assert_eq!(aligner.calls.load(Ordering::SeqCst), 0);
    assert!(!out.exists());
}

#[test]
fn alignment_failure_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.srt");

    let err = synchronize(
        &FailingAligner,
        Path::new("audio.mp3"),
        "Hello world today",
        &out,
        3,
    )
    .unwrap_err();

    assert!(matches!(err, SyncError::AlignmentFailed(_)));
    assert!(!out.exists());
}

#[test]
fn unwritable_destination_is_write_failed() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no-such-dir").join("out.srt");
    let aligner = StubAligner::new(hello_world_today());

    let err =
        synchronize(&aligner, Path::new("audio.mp3"), "Hello world today", &out, 3).unwrap_err();

    assert!(matches!(err, SyncError::WriteFailed { .. }));
}
