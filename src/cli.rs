use clap::{crate_authors, crate_description, crate_version, Arg, ArgAction, Command};
use pretty_env_logger::env_logger::Builder;
use std::env;
use std::io::Write;
use std::process::exit;

use crate::common::{Provider, Record, RECORD_KIND_TXT};
use crate::googledomains::{MODE_ADD, MODE_REMOVE};
use crate::Config;

fn set_logger_level(b: &mut Builder) {
    let mut b = b;
    if env::var("RUST_LOG").is_err() {
        b = b.filter_level(log::LevelFilter::Info)
    }
    b.init();
}

fn setup_logger() {
    // Adapted from env_logger examples. <3 Systemd support
    match std::env::var("RUST_LOG_STYLE") {
        Ok(s) if s == "SYSTEMD" => {
            let builder = &mut pretty_env_logger::env_logger::builder();
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "<{}>{}: {}",
                    match record.level() {
                        log::Level::Error => 3,
                        log::Level::Warn => 4,
                        log::Level::Info => 6,
                        log::Level::Debug => 7,
                        log::Level::Trace => 7,
                    },
                    record.target(),
                    record.args()
                )
            });
            set_logger_level(builder);
        }
        _ => {
            let builder = &mut pretty_env_logger::formatted_builder();
            set_logger_level(builder);
        }
    };
}

pub(crate) fn main() {
    let cli = Command::new("AcmeSync")
        .about(format!(
            "{}\n{} {}",
            crate_description!(),
            "Configuration is managed using environment variables.",
            "See the docs for more information.",
        ))
        .arg(
            Arg::new("check")
                .action(ArgAction::SetTrue)
                .short('t')
                .long("test")
                .help("Check the configuration"),
        )
        .arg(
            Arg::new("mode")
                .required_unless_present("check")
                .help("Whether to add or remove the given records"),
        )
        .arg(
            Arg::new("zone")
                .short('z')
                .long("zone")
                .required_unless_present("check")
                .help("DNS zone holding the challenge records"),
        )
        .arg(
            Arg::new("records")
                .action(ArgAction::Append)
                .short('r')
                .long("record")
                .value_name("NAME=DIGEST")
                .help("Challenge record to rotate"),
        )
        .arg(
            Arg::new("google_domains")
                .long("google-domains")
                .value_name("ACCESS_TOKEN")
                .help("Configure the Google Domains provider with the given access token"),
        )
        .version(crate_version!())
        .author(crate_authors!("\n"));

    let args = cli.get_matches();

    setup_logger();

    let mut config = match Config::populate_from_env() {
        Ok(c) => c,
        Err(err) => {
            println!("{err}");
            exit(2);
        }
    };

    if let Some(token) = args.get_one::<String>("google_domains") {
        match token.parse() {
            Ok(cfg) => config.google_domains = Some(cfg),
            Err(err) => {
                println!("{err}");
                exit(2);
            }
        }
    }

    let providers = config.into_impls();

    if args.get_flag("check") {
        tracing::info!(providers = providers.len(), "Configuration is valid.");
        exit(0);
    }

    let mode: &String = args.get_one("mode").expect("mode is required");
    let zone: &String = args.get_one("zone").expect("zone is required");

    let records: Vec<Record> = args
        .get_many::<String>("records")
        .expect("at least one record required")
        .map(|raw| match raw.split_once('=') {
            Some((name, digest)) => Record {
                name: name.to_string(),
                kind: RECORD_KIND_TXT.to_string(),
                content: digest.to_string(),
            },
            None => {
                println!("record {raw} is not in NAME=DIGEST form");
                exit(2);
            }
        })
        .collect();

    for provider in providers {
        let result = match mode.as_str() {
            MODE_ADD => provider.append_records(zone, records.clone()),
            MODE_REMOVE => provider.delete_records(zone, records.clone()),
            other => {
                println!("can only add or remove records; unrecognized: {other}");
                exit(2);
            }
        };

        if let Err(err) = result {
            println!("{err}");
            exit(1);
        }
    }
}
