//! Batch processing of OBJECTS lumps
//!
//! Inputs are read and decoded in parallel, listed and named in input order,
//! then written in parallel. A failure on one input is logged and counted but
//! never stops the rest of the batch.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use snes_objects::{
    EncodeOptions, ObjectCollection, UnknownTypePolicy, decode_objects, render_objects,
    write_things,
};
use walkdir::WalkDir;

use crate::naming::OutputNamer;

/// Options for a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Print JSON listings to stdout
    pub print: bool,
    /// THINGS output directory, `None` to skip writing
    pub output_dir: Option<PathBuf>,
    pub unknown_types: UnknownTypePolicy,
}

/// Counts from a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Inputs decoded
    pub processed: usize,
    /// Inputs that could not be read or were empty
    pub unreadable: usize,
    /// THINGS files written
    pub written: usize,
    /// THINGS files that failed to encode or write
    pub failed_writes: usize,
}

/// Process `files`, then every file directly inside each of `dirs`
pub fn run(files: &[PathBuf], dirs: &[PathBuf], options: BatchOptions) -> BatchSummary {
    let output_dir = options.output_dir.as_deref().and_then(prepare_output_dir);

    let mut inputs = files.to_vec();
    for dir in dirs {
        inputs.extend(list_directory(dir));
    }

    let decoded: Vec<(PathBuf, Option<ObjectCollection>)> = inputs
        .into_par_iter()
        .map(|path| {
            let objects = read_objects(&path);
            (path, objects)
        })
        .collect();

    let mut summary = BatchSummary::default();
    let mut namer = output_dir.map(OutputNamer::new);
    let mut jobs = Vec::new();

    for (path, objects) in decoded {
        let Some(objects) = objects else {
            tracing::error!("Could not open file '{}' for input", path.display());
            summary.unreadable += 1;
            continue;
        };
        summary.processed += 1;
        tracing::debug!("{}: {} objects", path.display(), objects.len());

        if options.print {
            println!("{}", render_objects(&objects));
        }

        if let Some(namer) = namer.as_mut() {
            jobs.push((namer.output_path(&path), objects));
        }
    }

    let encode_options = EncodeOptions::with_unknown_types(options.unknown_types);
    let results: Vec<_> = jobs
        .par_iter()
        .map(|(output, objects)| write_things(objects, output, &encode_options))
        .collect();

    for ((output, _), result) in jobs.iter().zip(results) {
        match result {
            Ok(report) => {
                summary.written += 1;
                if !report.skipped.is_empty() {
                    tracing::warn!(
                        "{}: skipped {} object(s) with unknown type",
                        output.display(),
                        report.skipped.len()
                    );
                }
            }
            Err(e) => {
                tracing::error!("Failed to write output file '{}': {}", output.display(), e);
                summary.failed_writes += 1;
            }
        }
    }

    summary
}

/// Create the output directory, `None` (output disabled) on failure
fn prepare_output_dir(dir: &Path) -> Option<PathBuf> {
    match std::fs::create_dir_all(dir) {
        Ok(()) => Some(dir.to_path_buf()),
        Err(e) => {
            tracing::error!("Could not create output directory '{}': {}", dir.display(), e);
            None
        }
    }
}

/// Regular files directly inside `dir`, sorted by name
fn list_directory(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        tracing::error!("Could not open directory '{}' for input", dir.display());
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping entry in '{}': {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

/// Read and decode one lump, `None` if it is unreadable or empty
fn read_objects(path: &Path) -> Option<ObjectCollection> {
    match std::fs::read(path) {
        Ok(data) if !data.is_empty() => Some(decode_objects(&data)),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("Reading {}: {}", path.display(), e);
            None
        }
    }
}
