extern crate admission;
extern crate clap;
extern crate log;
extern crate serde_json;

use admission::admission::{AdmissionForm, DefaultAdmissionDesk, FeeInput};
use admission::host::{self, Response};
use admission::receipt::{ReceiptError, ReceiptFont};
use admission::logging::{configure_logging, LogOptions};
use admission::settings::{Settings, DEFAULT_DB_PATH, DEFAULT_RECEIPT_DIR};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_NOT_FOUND: i32 = 2;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn build_cli() -> App<'static, 'static> {
    let form_field = |name: &'static str, help: &'static str| {
        Arg::with_name(name)
            .long(name)
            .help(help)
            .takes_value(true)
            .conflicts_with("json")
    };
    let submit_cmd = SubCommand::with_name("submit")
        .about("records a new admission and prints the stored summary as JSON")
        .arg(form_field("name", "Full name of the student"))
        .arg(form_field("email", "Email address of the student"))
        .arg(form_field("phone", "Phone number of the student"))
        .arg(form_field("course", "Course the student enrolls in"))
        .arg(form_field("fees-total", "Total course fees (whole number)"))
        .arg(form_field("fees-paid", "Fees paid with this admission (whole number)"))
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Read the admission form as JSON object from stdin"),
        );

    let receipt_cmd = SubCommand::with_name("receipt")
        .about("generates the payment receipt of the latest admission stored under a name")
        .arg(
            Arg::with_name("NAME")
                .required(true)
                .index(1)
                .help("Exact (case sensitive) name of the student"),
        )
        .arg(
            Arg::with_name("stdout")
                .long("stdout")
                .help("Stream the PDF document to stdout (it is still written to the receipt directory)"),
        );

    let students_cmd = SubCommand::with_name("students")
        .about("lists all admissions, newest first, as HTML table")
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print the admissions as JSON array instead"),
        );

    let status_cmd = SubCommand::with_name("status")
        .about("shows the number of stored admissions and the receipts present on disk");

    let optimize_cmd = SubCommand::with_name("optimize")
        .about("optimizes the underlying SQLite database (can save space and speed up operations)");

    App::new("AdmissionDesk")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Records student admissions and fee payments and prints payment receipts")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("db")
                .long("db")
                .env("ADMISSION_DB")
                .default_value(DEFAULT_DB_PATH)
                .help("Path of the SQLite database holding all admissions"),
        )
        .arg(
            Arg::with_name("receipts")
                .long("receipts")
                .env("ADMISSION_RECEIPTS")
                .default_value(DEFAULT_RECEIPT_DIR)
                .help("Directory receipt documents are written to"),
        )
        .arg(
            Arg::with_name("institute")
                .long("institute")
                .env("ADMISSION_INSTITUTE")
                .takes_value(true)
                .help("Institute name printed in the receipt title"),
        )
        .arg(
            Arg::with_name("currency")
                .long("currency")
                .env("ADMISSION_CURRENCY")
                .takes_value(true)
                .help("Currency symbol printed before paid amounts"),
        )
        .arg(
            Arg::with_name("font")
                .long("font")
                .env("ADMISSION_FONT")
                .takes_value(true)
                .help("TrueType font embedded into receipts (defaults to the bundled DejaVu Sans)"),
        )
        .arg(
            Arg::with_name("log-file")
                .long("log-file")
                .takes_value(true)
                .help("Write log output to this file instead of stderr"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .subcommand(submit_cmd)
        .subcommand(receipt_cmd)
        .subcommand(students_cmd)
        .subcommand(status_cmd)
        .subcommand(optimize_cmd)
}

fn run() -> i32 {
    let cli = build_cli().get_matches();

    let _logger_handle = match configure_logging(&LogOptions {
        verbosity: cli.occurrences_of("verbose"),
        log_file_path: cli.value_of("log-file").map(PathBuf::from),
    }) {
        Ok(handle) => Some(handle),
        Err(error) => {
            eprintln!("Could not configure logging: {}", error);
            None
        }
    };

    let settings = match settings_from_cli(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            log::error!("{}", error);
            eprintln!("Could not configure the admission desk: {}", error);
            return EXIT_FAILURE;
        }
    };

    let desk = match DefaultAdmissionDesk::open(settings) {
        Ok(desk) => desk,
        Err(error) => {
            log::error!("{}", error);
            eprintln!("Could not open the admission desk: {}", error);
            return EXIT_FAILURE;
        }
    };

    let exit_code = match cli.subcommand() {
        ("submit", Some(submit_cli)) => submit(&desk, submit_cli),
        ("receipt", Some(receipt_cli)) => receipt(&desk, receipt_cli),
        ("students", Some(students_cli)) => students(&desk, students_cli),
        ("status", Some(_)) => status(&desk),
        ("optimize", Some(_)) => optimize(&desk),
        _ => {
            eprintln!("Please specify the command you want to perform.");
            eprintln!("See --help for more information.");
            EXIT_FAILURE
        }
    };

    if let Err(error) = desk.close() {
        log::error!("{}", error);
        eprintln!("Could not close the admission desk: {}", error);
        return EXIT_FAILURE;
    }

    exit_code
}

fn settings_from_cli(cli: &ArgMatches) -> Result<Settings, ReceiptError> {
    let mut settings = Settings::default();
    if let Some(db_path) = cli.value_of("db") {
        settings = settings.with_db_path(db_path);
    }
    if let Some(receipt_dir) = cli.value_of("receipts") {
        settings = settings.with_receipt_dir(receipt_dir);
    }
    if let Some(institute) = cli.value_of("institute") {
        settings = settings.with_institute(institute);
    }
    if let Some(currency) = cli.value_of("currency") {
        settings = settings.with_currency_symbol(currency);
    }
    if let Some(font_path) = cli.value_of("font") {
        settings = settings.with_receipt_font(ReceiptFont::load(Path::new(font_path))?);
    }

    Ok(settings)
}

fn submit(desk: &DefaultAdmissionDesk, cmd_cli: &ArgMatches) -> i32 {
    let response = if cmd_cli.is_present("json") {
        let mut body = Vec::new();
        if let Err(error) = io::stdin().read_to_end(&mut body) {
            eprintln!("Could not read the form from stdin: {}", error);
            return EXIT_FAILURE;
        }
        host::submit(desk, &body)
    } else {
        let text = |field: &str| cmd_cli.value_of(field).map(String::from);
        let fee = |field: &str| {
            cmd_cli
                .value_of(field)
                .map(|value| FeeInput::Text(value.to_string()))
        };
        let form = AdmissionForm {
            name: text("name"),
            email: text("email"),
            phone: text("phone"),
            course: text("course"),
            fees_total: fee("fees-total"),
            fees_paid: fee("fees-paid"),
        };
        host::submit_form(desk, &form)
    };

    deliver(&response, true)
}

fn receipt(desk: &DefaultAdmissionDesk, cmd_cli: &ArgMatches) -> i32 {
    let name = cmd_cli.value_of("NAME").unwrap_or_default();
    let response = host::receipt(desk, name);

    if response.is_success() && !cmd_cli.is_present("stdout") {
        println!(
            "Receipt written to '{}'",
            desk.receipt_dir().receipt_path(name).display()
        );
        return EXIT_SUCCESS;
    }

    deliver(&response, false)
}

fn students(desk: &DefaultAdmissionDesk, cmd_cli: &ArgMatches) -> i32 {
    if !cmd_cli.is_present("json") {
        return deliver(&host::students(desk), false);
    }

    let json = desk
        .students()
        .map_err(|error| error.to_string())
        .and_then(|students| {
            serde_json::to_string_pretty(&students).map_err(|error| error.to_string())
        });
    match json {
        Ok(json) => {
            println!("{}", json);
            EXIT_SUCCESS
        }
        Err(error) => {
            log::error!("{}", error);
            eprintln!("{}", error);
            EXIT_FAILURE
        }
    }
}

fn status(desk: &DefaultAdmissionDesk) -> i32 {
    match desk.status() {
        Ok(status) => {
            println!("Database: {}", status.db_path);
            println!("Admissions: {}", status.students);
            println!(
                "Receipts in '{}': {}",
                status.receipt_dir.display(),
                status.receipts.len()
            );
            for receipt in status.receipts {
                println!("  {}", receipt.display());
            }
            EXIT_SUCCESS
        }
        Err(error) => {
            log::error!("{}", error);
            eprintln!("{}", error);
            EXIT_FAILURE
        }
    }
}

fn optimize(desk: &DefaultAdmissionDesk) -> i32 {
    println!("Optimizing database file...");
    match desk.optimize() {
        Ok(()) => {
            println!("Optimization done!");
            EXIT_SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error);
            EXIT_FAILURE
        }
    }
}

/// Writes a host response: success bodies to stdout, failures to stderr.
fn deliver(response: &Response, newline: bool) -> i32 {
    if response.is_success() {
        if let Err(error) = write_stdout(&response.body, newline) {
            eprintln!("Could not write the response: {}", error);
            return EXIT_FAILURE;
        }

        return EXIT_SUCCESS;
    }

    eprintln!("{}", String::from_utf8_lossy(&response.body));
    match response.status {
        host::STATUS_NOT_FOUND => EXIT_NOT_FOUND,
        _ => EXIT_FAILURE,
    }
}

fn write_stdout(body: &[u8], newline: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(body)?;
    if newline {
        out.write_all(b"\n")?;
    }

    out.flush()
}
