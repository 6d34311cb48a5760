//! The query run performed by the `recordings` binary.

use crate::album_store::{Album, AlbumStore};
use crate::config::{OutputFormat, RunPlan};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// One result line of a run. In JSON mode each step is written as a single
/// JSON object on its own line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum Step<'a> {
    AlbumsFound(&'a [Album]),
    AlbumFound(&'a Album),
    AddedAlbumId(i64),
}

fn write_step<W: Write>(out: &mut W, format: OutputFormat, step: &Step) -> Result<()> {
    match format {
        OutputFormat::Text => match step {
            Step::AlbumsFound(albums) => {
                let albums = albums
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(out, "Albums found: [{}]", albums)?;
            }
            Step::AlbumFound(album) => writeln!(out, "Album found: {}", album)?,
            Step::AddedAlbumId(id) => writeln!(out, "ID of added album: {}", id)?,
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, step).context("Failed to serialize result")?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Runs the plan's three queries in sequence, writing each result as soon as
/// its query returns. Stops at the first failure; nothing is written for the
/// failing query or the ones after it.
pub fn run<W: Write>(
    store: &dyn AlbumStore,
    plan: &RunPlan,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let albums = store.albums_by_artist(&plan.artist)?;
    write_step(out, format, &Step::AlbumsFound(&albums))?;

    let album = store.album_by_id(plan.album_id)?;
    write_step(out, format, &Step::AlbumFound(&album))?;

    let added_album_id = store.add_album(&plan.new_album)?;
    write_step(out, format, &Step::AddedAlbumId(added_album_id))
}
