use colored::Colorize;
use std::io::{self, Write};

use crate::scenarios::{Line, Transcript};

pub fn apply_color_choice(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

fn styled(line: &Line) -> String {
    match line {
        Line::Text(text) => text.clone(),
        Line::Heading(title) => title.bold().cyan().to_string(),
        Line::Separator(rule) => (*rule).dimmed().to_string(),
        Line::Blank => String::new(),
    }
}

pub fn write_transcript(out: &mut impl Write, transcript: &Transcript) -> io::Result<()> {
    for line in transcript.lines() {
        writeln!(out, "{}", styled(line))?;
    }
    Ok(())
}

pub fn print_transcript(transcript: &Transcript) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_transcript(&mut handle, transcript)?;
    handle.flush()
}
