// sheetdelta CLI - compare two spreadsheet files from the shell.
//
// The same core the compare/paginate endpoints use, without the HTTP layer:
// load both files, diff them, and optionally pull one page of a sheet.

mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use sheetdelta_compare::{create_comparison, paginate_comparison, CompareError, ComparisonStore};
use sheetdelta_protocol::{CompareResponse, PaginateResponse, SheetPage};

use exit_codes::{EXIT_DIFFS, EXIT_LOAD, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "sdelta")]
#[command(about = "Cell-level spreadsheet comparison (xlsx, xls, csv)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two spreadsheet files cell by cell
    #[command(after_help = "\
Examples:
  sdelta compare old.xlsx new.xlsx
  sdelta compare old.csv new.csv --json | jq '.differences'
  sdelta compare old.xlsx new.xlsx --sheet Sheet1 --start-row 25 --limit 25")]
    Compare {
        /// First (old) file
        file1: PathBuf,

        /// Second (new) file
        file2: PathBuf,

        /// Emit the full comparison response as JSON
        #[arg(long)]
        json: bool,

        /// Also print one page of this sheet's rows from both files
        #[arg(long)]
        sheet: Option<String>,

        /// First data row of the page (0-indexed, header excluded)
        #[arg(long, default_value_t = 0)]
        start_row: usize,

        /// Rows per page
        #[arg(long, default_value_t = 25)]
        limit: usize,

        /// Suppress stderr notes (import statistics)
        #[arg(long, short = 'q')]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Compare {
            file1,
            file2,
            json,
            sheet,
            start_row,
            limit,
            quiet,
        } => run_compare(&file1, &file2, json, sheet.as_deref(), start_row, limit, quiet),
    };

    ExitCode::from(code)
}

#[allow(clippy::too_many_arguments)]
fn run_compare(
    file1: &PathBuf,
    file2: &PathBuf,
    json: bool,
    sheet: Option<&str>,
    start_row: usize,
    limit: usize,
    quiet: bool,
) -> u8 {
    let (workbook1, stats1) = match sheetdelta_io::load(file1) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {}: {}", file1.display(), e);
            return EXIT_LOAD;
        }
    };
    let (workbook2, stats2) = match sheetdelta_io::load(file2) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {}: {}", file2.display(), e);
            return EXIT_LOAD;
        }
    };

    if !quiet {
        eprintln!("{}: {}", file1.display(), stats1.summary());
        eprintln!("{}: {}", file2.display(), stats2.summary());
        for warning in stats1.warnings.iter().chain(stats2.warnings.iter()) {
            eprintln!("note: {warning}");
        }
    }

    let store = ComparisonStore::new();
    let response = create_comparison(
        &store,
        workbook1,
        &file_name(file1),
        workbook2,
        &file_name(file2),
    );

    let page = match sheet {
        Some(name) => match paginate_comparison(&store, &response.id, name, start_row, limit) {
            Ok(page_response) => Some(page_response),
            Err(CompareError::InvalidArgument(msg)) => {
                eprintln!("error: {msg}");
                return EXIT_USAGE;
            }
            Err(e) => {
                eprintln!("error: {e}");
                return EXIT_USAGE;
            }
        },
        None => None,
    };

    let has_diffs = !response.differences.is_empty();

    if json {
        print_json(&response, page.as_ref());
    } else {
        print_differences(&response);
        if let Some(page_response) = &page {
            print_page(&page_response.sheet, "file1", page_response.file1.as_ref(), start_row);
            print_page(&page_response.sheet, "file2", page_response.file2.as_ref(), start_row);
        }
    }

    if has_diffs { EXIT_DIFFS } else { EXIT_SUCCESS }
}

fn file_name(path: &PathBuf) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_json(response: &CompareResponse, page: Option<&PaginateResponse>) {
    let payload = match page {
        Some(page_response) => serde_json::json!({
            "comparison": response,
            "page": page_response,
        }),
        None => serde_json::json!({ "comparison": response }),
    };
    println!("{}", serde_json::to_string_pretty(&payload).unwrap());
}

fn print_differences(response: &CompareResponse) {
    if response.differences.is_empty() {
        println!("Files are identical.");
        return;
    }

    println!(
        "{} difference{} between {} and {}:",
        response.differences.len(),
        if response.differences.len() == 1 { "" } else { "s" },
        response.file1_name,
        response.file2_name
    );
    for diff in &response.differences {
        println!(
            "  {:<12} {:>6}  {:<9} {}",
            diff.sheet,
            diff.cell,
            diff.diff_type.as_str(),
            diff.description
        );
    }
}

fn print_page(sheet: &str, side: &str, page: Option<&SheetPage>, start_row: usize) {
    match page {
        None => println!("\n[{side}] no sheet named '{sheet}'"),
        Some(page) => {
            println!(
                "\n[{side}] {sheet} rows {}..{} of {}{}",
                start_row,
                start_row + page.rows.len(),
                page.total_rows,
                if page.has_more { " (more available)" } else { "" }
            );
            println!("  {}", page.headers.join(" | "));
            for row in &page.rows {
                println!("  {}", row.join(" | "));
            }
        }
    }
}
