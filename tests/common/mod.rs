//! Golden constraint tables under `tests/snapshots/`.
//!
//! Regenerate with `PEDIGREE_PRESETS_UPDATE_SNAPSHOTS=1 cargo test`.

use std::fs;
use std::path::{Path, PathBuf};

const UPDATE_VAR: &str = "PEDIGREE_PRESETS_UPDATE_SNAPSHOTS";

fn golden_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
        .join(name)
}

/// Compare a rendered constraint table against its golden file, row by row.
pub fn assert_table_snapshot(name: &str, actual: &str) {
    let path = golden_path(name);
    if std::env::var_os(UPDATE_VAR).is_some() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("golden table {} missing; set {UPDATE_VAR}=1", path.display()));
    let expected = rows(&expected);
    let actual = rows(actual);

    if let Some((row, (want, got))) = expected
        .iter()
        .zip(&actual)
        .enumerate()
        .find(|(_, (want, got))| want != got)
    {
        panic!(
            "{} row {}: sample {:?} expected {:?}, got sample {:?} with {:?} ({UPDATE_VAR}=1 regenerates)",
            path.display(),
            row + 1,
            want.first().copied().unwrap_or_default(),
            &want[1..],
            got.first().copied().unwrap_or_default(),
            &got[1..],
        );
    }
    assert_eq!(
        expected.len(),
        actual.len(),
        "{}: row count differs ({UPDATE_VAR}=1 regenerates)",
        path.display()
    );
}

/// Table rows split into columns, header included, line endings normalized.
fn rows(table: &str) -> Vec<Vec<&str>> {
    table
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.split('\t').collect())
        .collect()
}
