// Data folder discovery: finds the ifm/ofm pairs and the element type
// every generated file will be declared with.

use crate::array::{DataType, FeatureMap, FmRole};
use crate::error::GenError;
use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// One test case: `ifm<N>.npy` and its expected `ofm<N>.npy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FmPair {
    pub index: usize,
    pub ifm: PathBuf,
    pub ofm: PathBuf,
}

impl FmPair {
    pub fn path(&self, role: FmRole) -> &Path {
        match role {
            FmRole::Ifm => &self.ifm,
            FmRole::Ofm => &self.ofm,
        }
    }
}

/// Everything the emission stages need to know about a data folder.
#[derive(Debug, Clone)]
pub struct Discovery {
    /// Pairs in ascending index order, indices exactly `0..len`.
    pub pairs: Vec<FmPair>,
    /// Element type of `ifm0.npy`, or int8 when the folder is empty.
    pub data_type: DataType,
}

impl Discovery {
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

fn array_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(ifm|ofm)(0|[1-9][0-9]*)$").expect("valid pattern"))
}

/// Splits a file stem such as `ofm12` into its role and pair index.
pub fn parse_array_file_name(stem: &str) -> Option<(FmRole, usize)> {
    let caps = array_name_pattern().captures(stem)?;
    let role = FmRole::from_prefix(caps.get(1)?.as_str())?;
    let index = caps.get(2)?.as_str().parse().ok()?;
    Some((role, index))
}

/// Scans `data_folder` for `.npy` files and pairs them up by index.
///
/// Every `.npy` file must be named `ifm<N>.npy` or `ofm<N>.npy`, the
/// indices must run from 0 without gaps, and each index needs exactly one
/// file per role (`ifm0.npy` next to `ifm0.NPY` is rejected).
/// Other files and sub-directories are ignored.
pub fn discover(data_folder: &Path) -> Result<Discovery, GenError> {
    let read_dir_err = |source: io::Error| GenError::ReadDir {
        path: data_folder.to_path_buf(),
        source,
    };

    let mut found: BTreeMap<usize, (Option<PathBuf>, Option<PathBuf>)> = BTreeMap::new();
    for entry in fs::read_dir(data_folder).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if !path.is_file() || !has_npy_extension(&path) {
            continue;
        }

        let parsed = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(parse_array_file_name);
        let Some((role, index)) = parsed else {
            return Err(GenError::UnexpectedArrayFile { path });
        };

        let entry = found.entry(index).or_default();
        let slot = match role {
            FmRole::Ifm => &mut entry.0,
            FmRole::Ofm => &mut entry.1,
        };
        if let Some(first) = slot.take() {
            return Err(GenError::DuplicateArrayFile {
                first,
                second: path,
            });
        }
        *slot = Some(path);
    }

    let pair_count = found.len();
    let mut pairs = Vec::with_capacity(pair_count);
    for index in 0..pair_count {
        let missing = |role| GenError::MissingPairFile {
            dir: data_folder.to_path_buf(),
            role,
            index,
        };
        let (ifm, ofm) = found.remove(&index).ok_or_else(|| missing(FmRole::Ifm))?;
        pairs.push(FmPair {
            index,
            ifm: ifm.ok_or_else(|| missing(FmRole::Ifm))?,
            ofm: ofm.ok_or_else(|| missing(FmRole::Ofm))?,
        });
    }

    let data_type = match pairs.first() {
        Some(first) => FeatureMap::load(&first.ifm)?.data_type(),
        None => DataType::default(),
    };

    debug!(
        "found {} ifm/ofm pair(s) of {} in {}",
        pairs.len(),
        data_type,
        data_folder.display()
    );

    Ok(Discovery {
        pairs,
        data_type,
    })
}

fn has_npy_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("npy"))
}
