use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::length::check_length;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct KeyReport {
    pub key: String,
    pub length: usize,
    pub valid: bool,
}

pub fn report(key: &str) -> KeyReport {
    KeyReport {
        key: key.to_string(),
        length: key.chars().count(),
        valid: check_length(key),
    }
}

pub fn emit<W: Write>(out: &mut W, report: &KeyReport, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    } else {
        let mark = if report.valid { "✓" } else { "✗" };
        writeln!(out, "{} {} ({} chars)", mark, report.key, report.length)?;
    }
    Ok(())
}
