//! Joins rendered values into a single cell.
//!
//! Elements are rendered on the rayon pool; `collect` keeps source order.
//! Checksums are content addressed and are sorted after rendering so that two
//! documents listing the same digests in a different order produce the same
//! cell. Newline-joined cells are bounded by a maximum length, see
//! [`join_lines_bounded`].

use std::sync::Arc;

use rayon::prelude::*;
use spdx_model::{
    Annotation, AnyLicenseInfo, Checksum, ExternalRef, FileType, Relationship, Result,
    SpdxElement,
};

use crate::render::{
    ValueRenderer, element_to_string, file_type_to_string, license_info_to_string,
};

/// Joins `lines` with `'\n'` without exceeding `max_chars` characters.
///
/// Lines are never cut. When the remaining lines do not fit, the output ends
/// with a line `"[<k> more...]"` where `k` is the number of lines left out.
pub fn join_lines_bounded<S: AsRef<str>>(lines: &[S], max_chars: usize) -> String {
    let lengths: Vec<usize> = lines.iter().map(|l| l.as_ref().chars().count()).collect();
    // remaining[i]: characters needed to append lines i.. after a non-empty prefix
    let mut remaining = vec![0usize; lines.len() + 1];
    for i in (0..lines.len()).rev() {
        remaining[i] = remaining[i + 1] + 1 + lengths[i];
    }

    let mut out = String::new();
    let mut used = 0usize;
    for (i, line) in lines.iter().enumerate() {
        let separator = usize::from(i > 0);
        let rest = remaining[i] - 1 + separator;
        if used + rest <= max_chars {
            for (j, line) in lines[i..].iter().enumerate() {
                if i + j > 0 {
                    out.push('\n');
                }
                out.push_str(line.as_ref());
            }
            return out;
        }
        let after = lines.len() - i - 1;
        let with_line = used + separator + lengths[i];
        if with_line + 1 + more_marker(after).chars().count() <= max_chars {
            if separator == 1 {
                out.push('\n');
            }
            out.push_str(line.as_ref());
            used = with_line;
            continue;
        }
        if separator == 1 {
            out.push('\n');
        }
        out.push_str(&more_marker(lines.len() - i));
        return out;
    }
    out
}

fn more_marker(count: usize) -> String {
    format!("[{count} more...]")
}

/// Checksums, sorted after rendering, one per line.
pub fn checksums_to_string(renderer: &ValueRenderer, checksums: &[Arc<Checksum>]) -> Result<String> {
    if checksums.is_empty() {
        return Ok(String::new());
    }
    let mut rendered = checksums
        .par_iter()
        .map(|checksum| renderer.checksum(checksum))
        .collect::<Result<Vec<_>>>()?;
    rendered.sort_unstable();
    Ok(join_lines_bounded(&rendered, renderer.max_cell_chars()))
}

/// Annotations in source order, one per line.
pub fn annotations_to_string(
    renderer: &ValueRenderer,
    annotations: &[Arc<Annotation>],
) -> Result<String> {
    let rendered = annotations
        .par_iter()
        .map(|annotation| renderer.annotation(annotation))
        .collect::<Result<Vec<_>>>()?;
    Ok(join_lines_bounded(&rendered, renderer.max_cell_chars()))
}

/// Relationships in source order, one per line.
pub fn relationships_to_string(
    renderer: &ValueRenderer,
    relationships: &[Arc<Relationship>],
) -> Result<String> {
    let rendered = relationships
        .par_iter()
        .map(|relationship| renderer.relationship(relationship))
        .collect::<Result<Vec<_>>>()?;
    Ok(join_lines_bounded(&rendered, renderer.max_cell_chars()))
}

/// Attribution texts in source order, one per line.
pub fn attributions_to_string(attributions: &[String], max_chars: usize) -> String {
    join_lines_bounded(attributions, max_chars)
}

/// License expressions joined with `", "`.
pub fn license_infos_to_string(licenses: &[AnyLicenseInfo]) -> String {
    licenses
        .par_iter()
        .map(license_info_to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// File types joined with `", "`.
pub fn file_types_to_string(file_types: &[FileType]) -> String {
    file_types
        .iter()
        .map(|file_type| file_type_to_string(*file_type))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Element references joined with `", "`.
pub fn elements_to_string(elements: &[Arc<SpdxElement>]) -> String {
    elements
        .par_iter()
        .map(|element| element_to_string(Some(&**element)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// External references joined with `"; "`.
pub fn external_refs_to_string(
    renderer: &ValueRenderer,
    external_refs: &[ExternalRef],
    namespace: Option<&str>,
) -> String {
    external_refs
        .par_iter()
        .map(|external_ref| renderer.external_ref(external_ref, namespace))
        .collect::<Vec<_>>()
        .join("; ")
}
