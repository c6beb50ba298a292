//! Text renderings of an assessment scene for stdout.

use anyhow::Result;
use std::fmt::{self, Write};

use windzone::AssessmentScene;
use windzone::RingSet;

use crate::config::OutputFormat;

pub fn render(scene: &AssessmentScene, format: OutputFormat, precision: usize) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table(scene, precision)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(scene)? + "\n"),
        OutputFormat::Csv => Ok(csv(scene, precision)?),
    }
}

fn table(scene: &AssessmentScene, precision: usize) -> Result<String, fmt::Error> {
    let zone = scene.zone();
    let mut out = String::new();

    writeln!(out, "Center: {:.*}", precision, scene.center())?;
    writeln!(out, "Average Roof Height: {:.1}m", scene.height())?;
    writeln!(out, "Lag Distance: {:.1}m", zone.lag_distance)?;
    writeln!(out, "Averaging Distance: {:.1}m", zone.averaging_distance)?;
    writeln!(out, "Total Assessment Radius: {:.1}m", zone.total_radius)?;
    writeln!(out)?;

    if scene.rings().is_empty() {
        writeln!(out, "Grid Rings: none")?;
    } else {
        let radii: Vec<String> = scene.rings().iter().map(|r| format!("{:.0}", r)).collect();
        writeln!(out, "Grid Rings (m): {}", radii.join(", "))?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{:<4} {:>9}  {:<28} {:>9}  {}",
        "Dir", "Boundary", "Boundary Endpoint", "Label", "Label Position"
    )?;
    for (divider, label) in scene.sectors().sectors() {
        writeln!(
            out,
            "{:<4} {:>8.1}°  {:<28} {:>8.1}°  {:.*}",
            label.direction.abbreviation(),
            divider.bearing,
            format!("{:.*}", precision, divider.endpoint),
            label.bearing,
            precision,
            label.position,
        )?;
    }

    Ok(out)
}

fn csv(scene: &AssessmentScene, precision: usize) -> Result<String, fmt::Error> {
    let zone = scene.zone();
    let center = scene.center();
    let mut out = String::from("kind,name,bearing_deg,distance_m,lat,lon\n");

    writeln!(
        out,
        "center,center,,0,{:.*},{:.*}",
        precision,
        center.lat(),
        precision,
        center.lon()
    )?;
    for divider in scene.dividers() {
        writeln!(
            out,
            "divider,{},{},{},{:.*},{:.*}",
            divider.bearing,
            divider.bearing,
            zone.total_radius,
            precision,
            divider.endpoint.lat(),
            precision,
            divider.endpoint.lon()
        )?;
    }
    for label in scene.labels() {
        writeln!(
            out,
            "label,{},{},{},{:.*},{:.*}",
            label.direction,
            label.bearing,
            scene.label_distance(),
            precision,
            label.position.lat(),
            precision,
            label.position.lon()
        )?;
    }
    for radius in scene.rings().iter() {
        writeln!(out, "ring,\"{}\",,{},,", RingSet::caption(radius), radius)?;
    }

    Ok(out)
}
