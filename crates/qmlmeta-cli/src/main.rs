use clap::{Parser, Subcommand};
use colored::Colorize;
use qmlmeta::{
    commands::{dump, manifest, qrc},
    GlobalOpts,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qmlmeta")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "QML metadata extractor for Python sources",
    long_about = "qmlmeta statically analyzes Python files that use the QmlElement \
annotation convention and emits the metatype JSON records consumed by \
qmltyperegistrar. No Python interpreter is involved."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze sources and emit one metatype JSON record per file
    Dump {
        /// Root paths to scan (files or directories)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Include glob, repeatable (default: *.py)
        #[arg(short = 'I', long = "include")]
        include: Vec<String>,
        /// Write each record to DIR/<basename>.json instead of stdout
        #[arg(short = 'O', long = "output-directory", value_name = "DIR")]
        output_directory: Option<PathBuf>,
        /// Abort on the first file that fails instead of skipping it
        #[arg(long)]
        fail_fast: bool,
    },
    /// Emit a Qt resource collection listing the discovered files
    Qrc {
        /// Root paths to scan (files or directories)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Include glob, repeatable (default: * for all files)
        #[arg(short = 'I', long = "include")]
        include: Vec<String>,
    },
    /// Merge the discovered file list into a JSON manifest
    Manifest {
        /// Root paths to scan (files or directories)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Include glob, repeatable (default: * for all files)
        #[arg(short = 'I', long = "include")]
        include: Vec<String>,
        /// Manifest file to update in place; stdout when omitted
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    qmlmeta::init_tracing(cli.global.verbose);

    let result = match cli.command {
        Commands::Dump {
            paths,
            include,
            output_directory,
            fail_fast,
        } => dump::handle_dump(&paths, &include, output_directory.as_deref(), fail_fast),
        Commands::Qrc { paths, include } => qrc::handle_qrc(&paths, &include),
        Commands::Manifest {
            paths,
            include,
            output,
        } => manifest::handle_manifest(&paths, &include, output.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
