//! reportgen CLI - academic report generator

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use reportgen::length::word_count;
use reportgen::{
    ConvertOptions, ConverterKind, Language, LengthController, LengthOptions, Pipeline,
    PipelineOptions, PrimaryFormat, Report, ReportSpec, ReportSpecBuilder,
};

#[derive(Parser)]
#[command(name = "reportgen")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Generate academic reports as Markdown, text, JSON, and PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one report
    #[command(alias = "gen")]
    Generate {
        /// JSON request file (fields below override it)
        #[arg(short, long, value_name = "FILE")]
        spec: Option<PathBuf>,

        #[command(flatten)]
        fields: SpecArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate every report in a JSON array of requests
    Batch {
        /// JSON file holding an array of requests
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the word band for a page count, or estimate a text file
    Band {
        /// Target page count
        #[arg(value_name = "PAGES", default_value = "5")]
        pages: u32,

        /// Text file to measure against the band
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Args, Default)]
struct SpecArgs {
    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Language (EN or AR)
    #[arg(long)]
    language: Option<String>,

    /// Participant names, comma separated
    #[arg(long)]
    participants: Option<String>,

    /// Supervising professor
    #[arg(long)]
    professor: Option<String>,

    /// University name
    #[arg(long)]
    university: Option<String>,

    /// College name
    #[arg(long)]
    college: Option<String>,

    /// Department name
    #[arg(long)]
    department: Option<String>,

    /// Academic year
    #[arg(long)]
    year: Option<i32>,

    /// Target page count
    #[arg(long)]
    pages: Option<u32>,

    /// Citation style (APA, IEEE, MLA, Harvard, Chicago)
    #[arg(long)]
    style: Option<String>,
}

#[derive(Args)]
struct OutputArgs {
    /// Output directory
    #[arg(short, long, value_name = "DIR", env = "REPORTGEN_OUTPUT", default_value = ".")]
    output: PathBuf,

    /// Primary output format
    #[arg(short, long, value_enum, env = "REPORTGEN_FORMAT", default_value = "markdown")]
    format: FormatArg,

    /// Timeout for external converters, in seconds
    #[arg(long, env = "REPORTGEN_TIMEOUT", default_value = "60")]
    timeout: u64,

    /// Seed for sample references
    #[arg(long, env = "REPORTGEN_SEED")]
    seed: Option<u64>,

    /// Number of references
    #[arg(long, default_value = "8")]
    references: usize,

    /// PDF converters to try, in order
    #[arg(long, value_enum, value_delimiter = ',')]
    converters: Option<Vec<ConverterArg>>,

    /// Skip PDF output
    #[arg(long)]
    no_pdf: bool,

    /// pandoc executable
    #[arg(long, env = "REPORTGEN_PANDOC", default_value = "pandoc")]
    pandoc: String,

    /// Office suite executable
    #[arg(long, env = "REPORTGEN_SOFFICE", default_value = "soffice")]
    soffice: String,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Markdown with YAML frontmatter
    Markdown,
    /// Plain text
    Text,
    /// Document model as JSON
    Json,
}

impl From<FormatArg> for PrimaryFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Markdown => PrimaryFormat::Markdown,
            FormatArg::Text => PrimaryFormat::Text,
            FormatArg::Json => PrimaryFormat::Json,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ConverterArg {
    /// Built-in PDF writer (Latin text only)
    Native,
    /// pandoc, then the office suite
    External,
    /// One-page summary built from the request
    Minimal,
}

impl From<ConverterArg> for ConverterKind {
    fn from(arg: ConverterArg) -> Self {
        match arg {
            ConverterArg::Native => ConverterKind::Native,
            ConverterArg::External => ConverterKind::External,
            ConverterArg::Minimal => ConverterKind::Minimal,
        }
    }
}

impl OutputArgs {
    fn pipeline_options(&self) -> PipelineOptions {
        let converters = if self.no_pdf {
            Vec::new()
        } else {
            match &self.converters {
                Some(list) => list.iter().map(|c| ConverterKind::from(*c)).collect(),
                None => ConverterKind::ALL.to_vec(),
            }
        };

        let convert = ConvertOptions::new()
            .with_primary(self.format.into())
            .with_timeout(Duration::from_secs(self.timeout))
            .with_pandoc(&self.pandoc)
            .with_office(&self.soffice)
            .with_converters(converters);

        let mut options = PipelineOptions::new()
            .with_convert(convert)
            .with_reference_count(self.references);
        if let Some(seed) = self.seed {
            options = options.with_seed(seed);
        }
        options
    }
}

impl SpecArgs {
    fn apply(self, mut builder: ReportSpecBuilder) -> ReportSpecBuilder {
        if let Some(v) = self.title {
            builder = builder.title(v);
        }
        if let Some(v) = self.language {
            builder = builder.language(v);
        }
        if let Some(v) = self.participants {
            builder = builder.participant(v);
        }
        if let Some(v) = self.professor {
            builder = builder.professor(v);
        }
        if let Some(v) = self.university {
            builder = builder.university(v);
        }
        if let Some(v) = self.college {
            builder = builder.college(v);
        }
        if let Some(v) = self.department {
            builder = builder.department(v);
        }
        if let Some(v) = self.year {
            builder = builder.year(v);
        }
        if let Some(v) = self.pages {
            builder = builder.pages(v);
        }
        if let Some(v) = self.style {
            builder = builder.reference_style(v);
        }
        builder
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            spec,
            fields,
            output,
        } => cmd_generate(spec.as_deref(), fields, &output),
        Commands::Batch { input, output } => cmd_batch(&input, &output),
        Commands::Band { pages, file } => cmd_band(pages, file.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_generate(
    spec_file: Option<&Path>,
    fields: SpecArgs,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let builder = match spec_file {
        Some(path) => {
            log::debug!("loading request from {}", path.display());
            serde_json::from_str::<ReportSpecBuilder>(&fs::read_to_string(path)?)?
        }
        None => ReportSpec::builder(),
    };

    let pipeline = Pipeline::new(output.pipeline_options());
    let spec = pipeline.build_spec(fields.apply(builder))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Generating '{}'...", spec.title()));

    let report = pipeline.generate(&spec)?;
    pb.finish_and_clear();

    let paths = report.write_all(&output.output)?;
    print_report(&report, &paths);
    Ok(())
}

fn cmd_batch(input: &Path, output: &OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let builders: Vec<ReportSpecBuilder> = serde_json::from_str(&fs::read_to_string(input)?)?;
    let pipeline = Pipeline::new(output.pipeline_options());
    log::info!("{} requests in {}", builders.len(), input.display());

    let pb = ProgressBar::new(builders.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let results: Vec<(usize, Result<(String, Report), reportgen::Error>)> = builders
        .into_par_iter()
        .enumerate()
        .map(|(i, builder)| {
            let result = pipeline.build_spec(builder).and_then(|spec| {
                let report = pipeline.generate(&spec)?;
                let dir = output
                    .output
                    .join(format!("{:02}-{}", i + 1, spec.file_stem()));
                report.write_all(&dir)?;
                Ok((dir.display().to_string(), report))
            });
            pb.inc(1);
            (i, result)
        })
        .collect();
    pb.finish_with_message("Done!");

    let mut failed = 0;
    println!();
    for (i, result) in &results {
        match result {
            Ok((dir, report)) => {
                let mark = if report.is_complete() {
                    "ok".green()
                } else {
                    "partial".yellow()
                };
                println!("  {} #{} {} ({} words)", mark, i + 1, dir, report.stats.word_count);
                for warning in &report.warnings {
                    println!("      {} {}", "warning:".yellow(), warning);
                }
            }
            Err(e) => {
                failed += 1;
                println!("  {} #{} {}", "failed".red(), i + 1, e);
            }
        }
    }

    println!(
        "\n{} {} of {} reports generated",
        "Done!".green().bold(),
        results.len() - failed,
        results.len()
    );
    if failed > 0 {
        return Err(format!("{} requests failed", failed).into());
    }
    Ok(())
}

fn cmd_band(pages: u32, file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let controller = LengthController::new(LengthOptions::default(), Language::En);
    let band = controller.target_band(pages);

    println!("{}", "Word Band".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Pages".bold(), pages);
    println!(
        "{}: {}",
        "Words per page".bold(),
        controller.options().words_per_page
    );
    println!("{}: {}..={}", "Band".bold(), band.min, band.max);

    if let Some(path) = file {
        let text = fs::read_to_string(path)?;
        let words = word_count(&text);
        println!();
        println!("{}: {}", "File".bold(), path.display());
        println!("{}: {}", "Words".bold(), words);
        println!(
            "{}: {:.2}",
            "Estimated pages".bold(),
            controller.estimate_pages(&text)
        );
        let verdict = if band.contains(words) {
            "within band".green()
        } else if words < band.min {
            format!("{} words short", band.min - words).yellow()
        } else {
            format!("{} words over", words - band.max).yellow()
        };
        println!("{}: {}", "Status".bold(), verdict);
    }

    Ok(())
}

fn print_report(report: &Report, paths: &[PathBuf]) {
    println!("{}", "Output files:".green().bold());
    for (i, path) in paths.iter().enumerate() {
        let branch = if i + 1 == paths.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    let stats = &report.stats;
    println!();
    println!(
        "{}: {} ({:.1} pages, band {}..={})",
        "Words".bold(),
        stats.word_count,
        stats.estimated_pages,
        stats.target.min,
        stats.target.max
    );
    println!("{}: {}", "References".bold(), stats.reference_count);

    for warning in &report.warnings {
        println!("{} {}", "Warning:".yellow().bold(), warning);
    }
}

fn cmd_version() {
    println!("{} {}", "reportgen".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Academic report generator");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/reportgen".dimmed());
    println!("License: MIT");
}
