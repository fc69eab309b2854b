use clap::{Parser, Subcommand};
use seismap_core::map::{
    assemble_and_build, check_request, preflight, write_request, CommandMapBuilder, MapSummary,
    SeismapError,
};
use serde::{Deserialize, Serialize};

use super::ConfigSource;

/// command line tool that assembles seismic-hazard map configurations and hands
/// them to a map renderer
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SeismapApp {
    /// select the operation to run
    #[command(subcommand)]
    pub op: SeismapOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum SeismapOperation {
    /// checks the configuration, runs the renderer and prints where the map,
    /// the event data and how many events were written. findings are logged
    /// and only stop the build with --strict.
    Build {
        #[command(flatten)]
        source: ConfigSource,
        /// renderer program, overriding the configuration's [renderer] table
        #[arg(long)]
        renderer: Option<String>,
        /// stop on error findings, and treat style tables whose keys differ from
        /// the magnitude bin labels as errors
        #[arg(long)]
        strict: bool,
        /// write the renderer request file without running the renderer
        #[arg(long)]
        dry_run: bool,
    },
    /// checks the configuration and fault files, printing every finding.
    Check {
        #[command(flatten)]
        source: ConfigSource,
        /// treat style tables whose keys differ from the magnitude bin labels as errors
        #[arg(long)]
        strict: bool,
    },
    /// prints the JSON request that would be handed to the renderer.
    Show {
        #[command(flatten)]
        source: ConfigSource,
    },
}

impl SeismapOperation {
    pub fn run(&self) -> Result<(), SeismapError> {
        match self {
            SeismapOperation::Build {
                source,
                renderer,
                strict,
                dry_run,
            } => {
                let loaded = source.load()?;
                let request = loaded.request();
                if *dry_run {
                    preflight(&request, *strict)?;
                    let request_path = write_request(&request)?;
                    log::info!("dry run, renderer was not invoked");
                    println!("request written to {}", request_path.display());
                    return Ok(());
                }

                let mut renderer_config = loaded.file.renderer_or_default();
                if let Some(program) = renderer {
                    renderer_config.program = program.clone();
                }
                let builder = CommandMapBuilder::from(renderer_config);
                let result = assemble_and_build(&request, &builder, *strict)?;
                println!("{}", MapSummary(&result));
                Ok(())
            }
            SeismapOperation::Check { source, strict } => {
                let request = source.load()?.request();
                let (report, summaries) = check_request(&request, *strict);
                for summary in summaries.iter() {
                    let nearest = summary
                        .nearest_km
                        .map(|km| format!("{km:.1} km"))
                        .unwrap_or_else(|| String::from("n/a"));
                    println!(
                        "{} feature(s), nearest {} from center: {}",
                        summary.feature_count,
                        nearest,
                        summary.path.display()
                    );
                }
                if report.is_empty() {
                    println!("no findings");
                } else {
                    println!("{report}");
                }
                if report.has_errors() {
                    Err(SeismapError::ValidationFailed(report))
                } else {
                    Ok(())
                }
            }
            SeismapOperation::Show { source } => {
                println!("{}", request_json(source)?);
                Ok(())
            }
        }
    }
}

/// the JSON request a build from this source would hand to the renderer
fn request_json(source: &ConfigSource) -> Result<String, SeismapError> {
    source.load()?.request().to_json_pretty()
}
