// This file contains the generation pipeline behind the gen-test-data CLI.
// It discovers the ifm/ofm pairs in a data folder, writes one .cc file per
// array and finishes with the shared TestData header and source.

use crate::array::{FeatureMap, FmRole};
use crate::discovery::{discover, FmPair};
use crate::emit::{
    aggregate_header_values, aggregate_source_values, fm_source_values, ArraySummary,
    ArtifactNames, GenerationStamp,
};
use crate::error::GenError;
use crate::templates::{TemplateId, TemplateRenderer, TemplateSet};
use chrono::Local;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Name written into the "Generated from" line of every file.
pub const TOOL_NAME: &str = "gen-test-data";

/// Options for one generation run.
/// These are set by the CLI and stay untouched for the whole run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Folder holding ifm<N>.npy / ofm<N>.npy pairs
    pub data_folder: PathBuf,
    /// Where the per-array sources and the aggregate source go
    pub source_folder: PathBuf,
    /// Where the aggregate header goes
    pub header_folder: PathBuf,
    /// Appended as `_<usecase>` to every symbol and file name when non-empty
    pub usecase: String,
    /// Namespaces wrapping the generated code, outermost first
    pub namespaces: Vec<String>,
    /// License template replacing the built-in header_template.txt
    pub license_template: Option<PathBuf>,
    /// Folder to load all four templates from instead of the built-in ones
    pub template_dir: Option<PathBuf>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            data_folder: PathBuf::from("."),
            source_folder: PathBuf::from("."),
            header_folder: PathBuf::from("."),
            usecase: String::new(),
            namespaces: Vec::new(),
            license_template: None,
            template_dir: None,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub summary: ArraySummary,
    pub header_path: PathBuf,
    pub aggregate_source_path: PathBuf,
    /// Every file written, in write order
    pub written: Vec<PathBuf>,
}

impl GenerateReport {
    pub fn fm_count(&self) -> usize {
        self.summary.fm_count()
    }
}

/// Runs the whole pipeline with the templates selected by `opts`.
pub fn generate(opts: &GenerateOptions) -> Result<GenerateReport, GenError> {
    let templates = TemplateSet::load(
        opts.template_dir.as_deref(),
        opts.license_template.as_deref(),
    )?;
    generate_with(opts, &templates)
}

/// Runs the whole pipeline against any renderer.
/// 1. Discovers the pairs and the element type
/// 2. Writes one source per array, input before output, checking that
///    every array of a role has the same byte size and element type
/// 3. Writes the aggregate header and source
///
/// Any error stops the run; files written before it stay on disk.
pub fn generate_with(
    opts: &GenerateOptions,
    renderer: &dyn TemplateRenderer,
) -> Result<GenerateReport, GenError> {
    // === 1. Discovery ===
    let discovery = discover(&opts.data_folder)?;
    info!(
        "Found {} ifm/ofm pair(s) in {}",
        discovery.pair_count(),
        opts.data_folder.display()
    );

    create_dir(&opts.source_folder)?;
    create_dir(&opts.header_folder)?;

    let mut emitter = Emitter {
        opts,
        renderer,
        names: ArtifactNames::new(&opts.usecase),
        stamp: GenerationStamp::new(TOOL_NAME, Local::now().naive_local()),
        summary: ArraySummary {
            data_type: discovery.data_type,
            ..Default::default()
        },
        ifm_size: None,
        ofm_size: None,
        written: Vec::new(),
    };

    // === 2. One source per array ===
    for pair in &discovery.pairs {
        emitter.emit_array(pair, FmRole::Ifm)?;
        emitter.emit_array(pair, FmRole::Ofm)?;
    }

    // === 3. Aggregate header and source ===
    emitter.emit_aggregates()
}

/// Per-run state. The size checks and name lists only live as long as one
/// `generate_with` call.
struct Emitter<'a> {
    opts: &'a GenerateOptions,
    renderer: &'a dyn TemplateRenderer,
    names: ArtifactNames,
    stamp: GenerationStamp,
    summary: ArraySummary,
    ifm_size: Option<usize>,
    ofm_size: Option<usize>,
    written: Vec<PathBuf>,
}

impl Emitter<'_> {
    fn emit_array(&mut self, pair: &FmPair, role: FmRole) -> Result<(), GenError> {
        let path = pair.path(role);
        let map = FeatureMap::load(path)?;
        self.check(pair.index, role, path, &map)?;

        let array_name = self.names.array_name(role, pair.index);
        let out_path = self
            .opts
            .source_folder
            .join(self.names.array_source_file(role, pair.index));

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        info!(
            "Converting {} to {}",
            file_name.as_deref().unwrap_or_default(),
            out_path.display()
        );

        let license = self.license_header(file_name.as_deref())?;
        let values = fm_source_values(
            &license,
            &self.names,
            &array_name,
            self.summary.data_type,
            map.data(),
            &self.opts.namespaces,
        );
        let text = self.renderer.render(TemplateId::FmSource, &values)?;
        self.write(out_path, &text)?;

        match role {
            FmRole::Ifm => self.summary.ifm_names.push(array_name),
            FmRole::Ofm => self.summary.ofm_names.push(array_name),
        }
        Ok(())
    }

    /// Element type must match ifm0; byte size must match the first array
    /// of the same role.
    fn check(
        &mut self,
        index: usize,
        role: FmRole,
        path: &Path,
        map: &FeatureMap,
    ) -> Result<(), GenError> {
        if map.is_empty() {
            return Err(GenError::EmptyArray {
                path: path.to_path_buf(),
            });
        }

        let expected_type = self.summary.data_type;
        if map.data_type() != expected_type {
            return Err(GenError::DtypeMismatch {
                path: path.to_path_buf(),
                expected: expected_type,
                found: map.data_type(),
            });
        }

        let expected_size = match role {
            FmRole::Ifm => &mut self.ifm_size,
            FmRole::Ofm => &mut self.ofm_size,
        };
        let found = map.byte_size();
        match *expected_size {
            None => *expected_size = Some(found),
            Some(expected) if expected != found => {
                return Err(GenError::SizeMismatch {
                    role,
                    index,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        Ok(())
    }

    fn emit_aggregates(mut self) -> Result<GenerateReport, GenError> {
        self.summary.ifm_size = self.ifm_size.unwrap_or(0);
        self.summary.ofm_size = self.ofm_size.unwrap_or(0);
        let license = self.license_header(None)?;

        let header_path = self.opts.header_folder.join(self.names.header_file());
        info!("Generating {}", header_path.display());
        let values = aggregate_header_values(
            &license,
            &self.names,
            &self.summary,
            &self.opts.namespaces,
        );
        let text = self.renderer.render(TemplateId::AggregateHeader, &values)?;
        self.write(header_path.clone(), &text)?;

        let aggregate_source_path = self
            .opts
            .source_folder
            .join(self.names.aggregate_source_file());
        info!("Generating {}", aggregate_source_path.display());
        let values = aggregate_source_values(
            &license,
            &self.names,
            &self.summary,
            &self.opts.namespaces,
        );
        let text = self.renderer.render(TemplateId::AggregateSource, &values)?;
        self.write(aggregate_source_path.clone(), &text)?;

        Ok(GenerateReport {
            summary: self.summary,
            header_path,
            aggregate_source_path,
            written: self.written,
        })
    }

    fn license_header(&self, file_name: Option<&str>) -> Result<String, GenError> {
        let values = self.stamp.license_values(file_name);
        self.renderer.render(TemplateId::LicenseHeader, &values)
    }

    fn write(&mut self, path: PathBuf, text: &str) -> Result<(), GenError> {
        debug!("writing {} bytes to {}", text.len(), path.display());
        fs::write(&path, text).map_err(|source| GenError::Write {
            path: path.clone(),
            source,
        })?;
        self.written.push(path);
        Ok(())
    }
}

/// Creates an output folder (and parents) when it does not exist yet.
fn create_dir(path: &Path) -> Result<(), GenError> {
    fs::create_dir_all(path).map_err(|source| GenError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
