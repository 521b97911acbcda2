use anyhow::{Result, anyhow};

/// SRT time code, `HH:MM:SS,mmm`.
pub fn format_srt_timestamp(seconds: f64) -> String {
    format_timestamp(seconds, ',')
}

/// WebVTT time code, `HH:MM:SS.mmm`.
pub fn format_vtt_timestamp(seconds: f64) -> String {
    format_timestamp(seconds, '.')
}

fn format_timestamp(seconds: f64, ms_sep: char) -> String {
    let total = seconds.max(0.0);

    let whole = total as u64;
    let milli = ((total % 1.0) * 1000.0).floor() as u64;

    let sec = whole % 60;
    let min = (whole / 60) % 60;
    let hour = whole / 3600;

    format!("{hour:02}:{min:02}:{sec:02}{ms_sep}{milli:03}")
}

pub fn parse_timestamp(s: &str) -> Result<f64> {
    let t = s.trim();

    let (hms, frac) = match t.split_once([',', '.']) {
        Some((a, b)) => (a, Some(b)),
        None => (t, None),
    };

    let parts: Vec<&str> = hms.split(':').collect();
    if parts.len() != 3 {
        return Err(anyhow!("unrecognized time code: '{t}'"));
    }

    let h: u64 = parts[0].parse().map_err(|_| anyhow!("bad hours: '{t}'"))?;
    let m: u64 = parts[1]
        .parse()
        .map_err(|_| anyhow!("bad minutes: '{t}'"))?;
    let sec: u64 = parts[2]
        .parse()
        .map_err(|_| anyhow!("bad seconds: '{t}'"))?;

    let mut milli: u64 = 0;
    if let Some(frac) = frac {
        let mut frac_s = frac.trim().to_string();
        if frac_s.len() > 3 {
            frac_s.truncate(3);
        }
        while frac_s.len() < 3 {
            frac_s.push('0');
        }
        milli = frac_s
            .parse()
            .map_err(|_| anyhow!("bad milliseconds: '{t}'"))?;
    }

    Ok(((h * 60 + m) * 60 + sec) as f64 + milli as f64 / 1000.0)
}

pub fn parse_time_range(line: &str) -> Result<(f64, f64)> {
    let (a, b) = line
        .split_once("-->")
        .ok_or_else(|| anyhow!("missing '-->' in time range: '{line}'"))?;
    let start = parse_timestamp(a.trim())?;
    let end = parse_timestamp(b.trim())?;
    Ok((start, end))
}
