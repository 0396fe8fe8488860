use log::{error, info};

use inspect::inspect;
use report::report;

mod capture;
mod cdp;
mod counters;
mod inspect;
mod interface_name;
mod join;
mod report;
mod status;
mod types;
mod workbook;

const APP_NAME: &str = "ciscorep";

const SUB_CMD_REPORT: &str = "report";
const SUB_CMD_INSPECT: &str = "inspect";

fn main() {
    let verbose = clap::Arg::new("VERBOSE")
        .long("verbose")
        .action(clap::ArgAction::SetTrue)
        .help("Enables DEBUG log level");

    let app = clap::Command::new(APP_NAME)
        .version(clap::crate_version!())
        .about("Consolidates Cisco switch captures into a spreadsheet report")
        .subcommand_required(true)
        .subcommand(
            clap::Command::new(SUB_CMD_REPORT)
                .about("Build one workbook sheet per device from a directory of captures")
                .arg(
                    clap::Arg::new("INPUT-DIR")
                        .long("input-dir")
                        .default_value("input")
                        .help("Dir containing one *.txt CLI capture per device \
                         (show running-config, show interfaces status, \
                         show cdp neighbors detail, show interfaces)"),
                )
                .arg(
                    clap::Arg::new("OUTPUT")
                        .long("output")
                        .default_value("output/interfaces_cisco.xlsx")
                        .help("Workbook to create or update; same-named sheets are replaced"),
                )
                .arg(verbose.clone()),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_INSPECT)
                .about("Print the records extracted from a single capture in YAML format")
                .arg(
                    clap::Arg::new("CAPTURE")
                        .required(true)
                        .long("capture")
                        .help("CLI capture file of a single device"),
                )
                .arg(verbose),
        );

    let matches = app.get_matches();

    match matches.subcommand() {
        Some((SUB_CMD_REPORT, cmd)) => {
            let input_dir = cmd
                .get_one::<String>("INPUT-DIR")
                .expect("--input-dir has a default value");
            let output = cmd
                .get_one::<String>("OUTPUT")
                .expect("--output has a default value");

            setup_logger(cmd);

            match report(input_dir, output) {
                Ok(..) => {
                    info!("Successfully generated report {output}");
                }
                Err(err) => {
                    error!("Generating report failed: {err:#}");
                    std::process::exit(1)
                }
            }
        }
        Some((SUB_CMD_INSPECT, cmd)) => {
            let capture = cmd
                .get_one::<String>("CAPTURE")
                .expect("--capture is required");

            setup_logger(cmd);

            if let Err(err) = inspect(capture) {
                error!("Inspecting capture failed: {err:#}");
                std::process::exit(1)
            }
        }
        _ => unreachable!("Unrecognized subcommand"),
    }
}

fn setup_logger(matches: &clap::ArgMatches) {
    let verbose_arg = "VERBOSE";

    let mut log_builder = env_logger::Builder::new();
    if matches
        .try_get_one::<bool>(verbose_arg)
        .is_ok_and(|arg| arg.is_some_and(|&value| value))
    {
        log_builder.filter(None, log::LevelFilter::Debug);
    } else {
        log_builder.filter(None, log::LevelFilter::Info);
    }
    log_builder.init();
}
