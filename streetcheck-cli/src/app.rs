//! Run orchestration: load dictionaries, process inputs, render reports

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use log::{error, info};

use streetcheck_core::{AggregatorConfig, Locale, NameAggregator, StreetDatabase};

use crate::args::{CliArgs, StatsFormat};
use crate::error::{CliResult, InputError};
use crate::input::{OsmNameExtractor, TextNameExtractor};

/// Execute a full run. Returns the process exit code: 0 on success, 1
/// when one or more input sources failed (the others were still
/// processed).
///
/// Dictionary load failures abort immediately: a partially loaded
/// database would silently misclassify every candidate after it.
pub fn run(args: &CliArgs) -> CliResult<i32> {
    let locale = Locale::new(&args.locale).context("unsupported locale")?;
    info!("using locale {}", locale.id());

    let mut database = StreetDatabase::new(locale);
    for path in args.effective_databases() {
        info!("loading database \"{}\"", path.display());
        let loaded = database.load_from_path(&path)?;
        info!("loaded {loaded} dictionary lines from \"{}\"", path.display());
    }
    info!("database holds {} canonical entries", database.len());

    // Dumping needs the per-street buckets even when -s was not given.
    let config = AggregatorConfig {
        per_street_stats: args.per_street_stats || args.dump.is_some(),
        count_names: args.count_names,
        spell_distance: args.spell_distance,
    };
    let mut aggregator = NameAggregator::new(Arc::new(database), config);

    let osm = OsmNameExtractor::new(args.effective_addr_tags(), args.effective_name_tags());

    let mut failed_sources = 0;
    if args.parallel {
        // Batch classification needs every candidate up front.
        let mut names = Vec::new();
        for input in &args.inputs {
            let mut sink = |name: &str| names.push(name.to_string());
            if let Err(source_error) = process_input(input, &osm, &mut sink) {
                error!("{source_error}");
                failed_sources += 1;
            }
        }
        info!("classifying {} names in parallel", names.len());
        aggregator.process_batch(&names);
    } else {
        for input in &args.inputs {
            let mut sink = |name: &str| aggregator.process_name(name);
            if let Err(source_error) = process_input(input, &osm, &mut sink) {
                error!("{source_error}");
                failed_sources += 1;
            }
        }
    }

    if let Some(dump_path) = &args.dump {
        info!("dumping data to \"{}\"", dump_path.display());
        let file = File::create(dump_path)
            .with_context(|| format!("failed to create dump file {}", dump_path.display()))?;
        let mut writer = BufWriter::new(file);
        aggregator.dump_data(&mut writer)?;
        writer.flush()?;
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    match args.format {
        StatsFormat::Text => aggregator.dump_stats(&mut stdout)?,
        StatsFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &aggregator.stats_report())?;
            writeln!(stdout)?;
        }
    }

    Ok(if failed_sources > 0 { 1 } else { 0 })
}

/// Dispatch one input source by its format and stream its candidate
/// names into the aggregator.
fn process_input(
    input: &str,
    osm: &OsmNameExtractor,
    sink: &mut dyn FnMut(&str),
) -> Result<(), InputError> {
    if input == "-" {
        info!("processing stdin as OSM data");
        osm.parse_reader("(stdin)", io::stdin().lock(), sink)
    } else if input.ends_with(".osm") {
        info!("processing \"{input}\" as OSM data");
        osm.parse_file(Path::new(input), sink)
    } else if input.ends_with(".txt") {
        info!("processing \"{input}\" as a strings list");
        TextNameExtractor::parse_file(Path::new(input), sink)
    } else {
        Err(InputError::UnsupportedFormat {
            path: input.to_string(),
        })
    }
}
