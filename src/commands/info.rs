//! Info command

use anyhow::{Context, Result};

use glyphcast::cli::InfoArgs;
use glyphcast::files;
use glyphcast::store::{FrameReader, Header};

pub fn handle(args: InfoArgs) -> Result<()> {
    let mut reader = FrameReader::open(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;
    let header = *reader.header();

    let mut frames = 0usize;
    while reader.next_frame()?.is_some() {
        frames += 1;
    }

    let size = files::file_size_display(&args.file)?;
    let report = if args.json {
        build_json_report(&args.file.display().to_string(), &size, &header, frames)?
    } else {
        build_plain_report(&args.file.display().to_string(), &size, &header, frames)
    };
    println!("{}", report);
    Ok(())
}

fn duration_secs(header: &Header, frames: usize) -> f64 {
    header.frame_delay_ms * frames as f64 / 1000.0
}

fn build_json_report(file: &str, size: &str, header: &Header, frames: usize) -> Result<String> {
    let report = serde_json::json!({
        "file": file,
        "size": size,
        "width": header.width,
        "height": header.height,
        "frame_delay_ms": header.frame_delay_ms,
        "frames": frames,
        "duration_secs": duration_secs(header, frames),
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

fn build_plain_report(file: &str, size: &str, header: &Header, frames: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("file:        {}\n", file));
    out.push_str(&format!("size:        {}\n", size));
    out.push_str(&format!("grid:        {}x{}\n", header.width, header.height));
    out.push_str(&format!("frame delay: {} ms\n", header.frame_delay_ms));
    out.push_str(&format!("frames:      {}\n", frames));
    out.push_str(&format!("duration:    {:.1} s", duration_secs(header, frames)));
    out
}
