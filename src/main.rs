//! Museum map clustering and cross-filtering tool
//!
//! Reads a museum dataset from CSV, applies the region and reference-year
//! cross-filter, groups the surviving points with greedy haversine
//! clustering, and writes clustered circles (centroid, count, pixel
//! radius) for a map renderer to draw. The remaining chart views are
//! served by optional outputs: the openings-over-time series, the
//! subject-matter and geodemographic distributions, and the deprivation
//! means per region.

use clap::Parser;
use csv::WriterBuilder;
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::PathBuf;

mod analysis;
mod cluster;
mod filter;
mod museum;


use analysis::{
    CategoryCount, DeprivationMetric, GeodemographicLevel, YearCount, deprivation_means,
    geodemographic_distribution, openings_series, subject_distribution,
    subject_subtype_distribution,
};
use cluster::{DEFAULT_CLUSTER_RADIUS_KM, DEFAULT_MAX_RADIUS};
use filter::{FilterEvent, FilterHub, FilteredView, GEODEMOGRAPHIC_EXCLUSIONS};
use museum::read_museums;

#[derive(Parser)]
#[command(name = "museum_map")]
#[command(about = "Museum map clustering and cross-filtering tool", long_about = None)]
struct Args {
    /// Input CSV file with museum rows (header row required)
    #[arg(short, long, default_value = "museums.csv")]
    input: PathBuf,

    /// Output CSV file with clustered points (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reference year: museums must be open at this year to be shown
    #[arg(short, long, default_value_t = 2017.0)]
    year: f64,

    /// Cluster merge threshold in km
    #[arg(short, long, default_value_t = DEFAULT_CLUSTER_RADIUS_KM)]
    radius: f64,

    /// Maximum point radius in pixels for the largest cluster
    #[arg(long, default_value_t = DEFAULT_MAX_RADIUS)]
    max_point_radius: f64,

    /// Region to exclude from the view (repeatable)
    #[arg(short = 'x', long = "exclude-region")]
    exclude_regions: Vec<String>,

    /// Optional output CSV for the openings-over-time series
    #[arg(long)]
    series_output: Option<PathBuf>,

    /// First year of the series range
    #[arg(long, default_value_t = 1960)]
    series_from: i32,

    /// Last year of the series range
    #[arg(long, default_value_t = 2017)]
    series_to: i32,

    /// Optional output CSV for the subject-matter distribution
    #[arg(long)]
    subjects_output: Option<PathBuf>,

    /// Break one subject down by subtype instead of listing all subjects
    #[arg(long, requires = "subjects_output")]
    subject: Option<String>,

    /// Optional output CSV for the geodemographic distribution
    #[arg(long)]
    groups_output: Option<PathBuf>,

    /// Classification tier for the geodemographic distribution
    #[arg(long, value_enum, default_value = "group")]
    geodemographic_level: GeodemographicLevel,

    /// Optional output CSV for mean deprivation per region
    #[arg(long)]
    deprivation_output: Option<PathBuf>,

    /// Deprivation index used for the per-region means
    #[arg(long, value_enum, default_value = "overall")]
    deprivation_metric: DeprivationMetric,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let summary = match read_museums(&args.input) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error reading CSV: {}", e);
            std::process::exit(1);
        }
    };

    if summary.museums.is_empty() {
        eprintln!("No usable museum rows in CSV file");
        std::process::exit(1);
    }

    if args.debug {
        println!(
            "Read {} museums from {:?} ({} rows skipped)",
            summary.museums.len(),
            args.input,
            summary.skipped_rows
        );
    }

    let mut hub = FilterHub::new(
        summary.museums,
        args.year,
        args.radius,
        args.max_point_radius,
    );

    for region in &args.exclude_regions {
        hub.apply(FilterEvent::RegionToggled(region.clone()));
    }

    if args.debug {
        println!(
            "Filtering at year {} with cluster radius {:.1} km, {} regions active",
            hub.reference_year(),
            args.radius,
            hub.regions().len()
        );
        println!(
            "{} museums pass the filters, {} clusters",
            hub.view().indices.len(),
            hub.view().clusters.len()
        );
    }

    // Write clustered points to output (stdout or file)
    let result = match &args.output {
        None => write_clusters(io::stdout(), hub.view()),
        Some(output_file) => match File::create(output_file) {
            Ok(file) => write_clusters(file, hub.view()),
            Err(e) => Err(e.into()),
        },
    };
    if let Err(e) = result {
        eprintln!("Error writing clusters: {}", e);
        std::process::exit(1);
    }
    if args.debug {
        if let Some(output_file) = &args.output {
            println!("Clusters written to {:?}", output_file);
        }
    }

    if let Err(e) = write_view_feeds(&args, &hub) {
        eprintln!("Error writing view feed: {}", e);
        std::process::exit(1);
    }
}

/// Writes the optional chart-view feeds requested on the command line
fn write_view_feeds(args: &Args, hub: &FilterHub) -> Result<(), Box<dyn std::error::Error>> {
    // Time series and geodemographic distribution run over the
    // region-filtered subset: the series spans all years and the
    // distribution ignores the slider, so the date filter must not apply
    let region_indices = hub.region_filtered();

    if let Some(series_file) = &args.series_output {
        let series = openings_series(
            hub.museums(),
            &region_indices,
            args.series_from,
            args.series_to,
        );
        write_series(series_file, &series)?;
        if args.debug {
            println!("Series written to {:?}", series_file);
        }
    }

    if let Some(groups_file) = &args.groups_output {
        let excluded: HashSet<String> = GEODEMOGRAPHIC_EXCLUSIONS
            .iter()
            .map(|s| s.to_string())
            .collect();
        let dist = geodemographic_distribution(
            hub.museums(),
            &region_indices,
            args.geodemographic_level,
            &excluded,
        );
        write_categories(groups_file, &dist)?;
        if args.debug {
            println!("Geodemographic distribution written to {:?}", groups_file);
        }
    }

    // Subject and deprivation feeds describe the museums currently shown,
    // so they use the fully filtered view
    if let Some(subjects_file) = &args.subjects_output {
        let dist = match &args.subject {
            Some(subject) => {
                subject_subtype_distribution(hub.museums(), &hub.view().indices, subject)
            }
            None => subject_distribution(hub.museums(), &hub.view().indices),
        };
        write_categories(subjects_file, &dist)?;
        if args.debug {
            println!("Subject distribution written to {:?}", subjects_file);
        }
    }

    if let Some(deprivation_file) = &args.deprivation_output {
        let means = deprivation_means(
            hub.museums(),
            &hub.view().indices,
            args.deprivation_metric,
        );
        write_means(deprivation_file, &means)?;
        if args.debug {
            println!("Deprivation means written to {:?}", deprivation_file);
        }
    }

    Ok(())
}

/// Writes clustered points as `latitude,longitude,count,radius`
fn write_clusters<W: io::Write>(
    out: W,
    view: &FilteredView,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = WriterBuilder::new().from_writer(out);
    writer.write_record(["latitude", "longitude", "count", "radius"])?;

    for cluster in &view.clusters {
        writer.write_record([
            format!("{}", cluster.centroid.lat()),
            format!("{}", cluster.centroid.lon()),
            format!("{}", cluster.count),
            format!("{:.2}", view.scale.radius(cluster.count)),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the openings series as `year,count`
fn write_series(
    output_file: &PathBuf,
    series: &[YearCount],
) -> Result<(), Box<dyn std::error::Error>> {
    let out_file = File::create(output_file)?;
    let mut writer = WriterBuilder::new().from_writer(out_file);
    writer.write_record(["year", "count"])?;

    for yc in series {
        writer.write_record([format!("{}", yc.year), format!("{}", yc.count)])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes a category distribution as `category,count`
fn write_categories(
    output_file: &PathBuf,
    categories: &[CategoryCount],
) -> Result<(), Box<dyn std::error::Error>> {
    let out_file = File::create(output_file)?;
    let mut writer = WriterBuilder::new().from_writer(out_file);
    writer.write_record(["category", "count"])?;

    for cc in categories {
        writer.write_record([cc.category.clone(), format!("{}", cc.count)])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes per-region means as `region,mean`
fn write_means(
    output_file: &PathBuf,
    means: &[(String, f64)],
) -> Result<(), Box<dyn std::error::Error>> {
    let out_file = File::create(output_file)?;
    let mut writer = WriterBuilder::new().from_writer(out_file);
    writer.write_record(["region", "mean"])?;

    for (region, mean) in means {
        writer.write_record([region.clone(), format!("{:.3}", mean)])?;
    }

    writer.flush()?;
    Ok(())
}
