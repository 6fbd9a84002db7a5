use anyhow::Result;
use log::debug;
use std::io::Write;

use tfinspector_core::ProjectRecord;

use crate::config::OutputFormat;

pub fn render_output<W: Write>(
    writer: &mut W,
    projects: &[ProjectRecord],
    format: OutputFormat,
) -> Result<()> {
    debug!("Rendering {} projects as {}", projects.len(), format);
    match format {
        OutputFormat::Text => write_text(writer, projects)?,
        OutputFormat::Json => write_json(writer, projects)?,
        OutputFormat::Yaml => write_yaml(writer, projects)?,
        OutputFormat::Csv => write_csv(writer, projects)?,
    }
    writer.flush()?;
    Ok(())
}

pub fn write_text<W: Write>(writer: &mut W, projects: &[ProjectRecord]) -> Result<()> {
    for project in projects {
        writeln!(writer, "Path: {}", project.path)?;
        if let Some(version) = &project.runtime_version {
            writeln!(writer, "  Runtime Version: {}", version)?;
        }
        for provider in &project.providers {
            match &provider.version {
                Some(version) => {
                    writeln!(writer, "  Provider: {} (version {})", provider.name, version)?
                }
                None => writeln!(writer, "  Provider: {}", provider.name)?,
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(writer: &mut W, projects: &[ProjectRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, projects)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_yaml<W: Write>(writer: &mut W, projects: &[ProjectRecord]) -> Result<()> {
    serde_yaml::to_writer(writer, projects)?;
    Ok(())
}

/// One row per (project, provider) pair; projects without providers produce no rows.
pub fn write_csv<W: Write>(writer: &mut W, projects: &[ProjectRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["path", "provider", "version"])?;
    for project in projects {
        for provider in &project.providers {
            wtr.write_record([
                project.path.as_str(),
                provider.name.as_str(),
                provider.version.as_deref().unwrap_or(""),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}
