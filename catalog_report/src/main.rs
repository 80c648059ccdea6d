//! Catalog Report - Jamf Pro mobile device app catalog to CSV
//!
//! Writes `<date>-jamf_cat_report.csv` with one row per device-licensed app.

use catalog_report::pipeline::DEFAULT_RETRY;
use catalog_report::{
    report_file_name, run_report, Config, ItunesClient, JamfClient, ReportOptions, ReportWriter,
    Worklist,
};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Tool to output Jamf Pro mobile device app catalog info
#[derive(Parser, Debug)]
#[command(name = "catalog_report")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("apps").args(["all", "app_id", "file_path"])))]
struct Args {
    /// Report every mobile device app (default)
    #[arg(long, default_value_t = false)]
    all: bool,

    /// Report only these app ids, e.g. --app-id 101 110 605
    #[arg(long, value_name = "JAMF_PRO_APP_ID", num_args = 1..)]
    app_id: Option<Vec<String>>,

    /// File with newline separated app ids
    #[arg(long, value_name = "PATH_TO_FILE")]
    file_path: Option<PathBuf>,

    /// Skip counting devices with each app installed (much faster; installed_count will be None)
    #[arg(long, default_value_t = false)]
    disable_count: bool,

    /// Attempts to read each temporary advanced search (raise for slow Jamf Cloud instances)
    #[arg(long, default_value_t = DEFAULT_RETRY)]
    retry: u32,

    /// Path to the JSON config file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Directory the CSV report is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

impl Args {
    fn worklist(&self) -> Worklist {
        if let Some(ids) = &self.app_id {
            Worklist::Ids(ids.clone())
        } else if let Some(path) = &self.file_path {
            Worklist::File(path.clone())
        } else {
            Worklist::All
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting catalog_report...");
    log::info!("Config path: {}", args.config.display());

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let jamf = JamfClient::from_config(&config);
    let itunes = ItunesClient::from_config(&config);

    let app_ids = match args.worklist().resolve(&jamf).await {
        Ok(ids) => ids,
        Err(e) => {
            log::error!("Failed to resolve app ids: {}", e);
            std::process::exit(1);
        }
    };

    let report_path = args
        .output_dir
        .join(report_file_name(chrono::Local::now().date_naive()));

    let mut writer = match ReportWriter::create(&report_path) {
        Ok(writer) => writer,
        Err(e) => {
            log::error!("Failed to create report {}: {}", report_path.display(), e);
            std::process::exit(1);
        }
    };

    let options = ReportOptions {
        count_installed: !args.disable_count,
        retry: args.retry,
    };
    if !options.count_installed {
        log::info!("Install counting disabled");
    }

    match run_report(&jamf, &itunes, &config, &app_ids, &mut writer, &options).await {
        Ok(summary) => {
            log::info!(
                "Wrote {} row(s) to {}",
                writer.rows(),
                writer.path().display()
            );
            if summary.failed > 0 {
                log::error!("{} app(s) could not be reported", summary.failed);
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Report aborted: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_all_apps() {
        let args = Args::try_parse_from(["catalog_report"]).unwrap();
        assert_eq!(args.worklist(), Worklist::All);
        assert_eq!(args.retry, 3);
        assert!(!args.disable_count);
        assert_eq!(args.config, PathBuf::from("config.json"));
    }

    #[test]
    fn parses_multiple_app_ids() {
        let args = Args::try_parse_from(["catalog_report", "--app-id", "101", "110", "605"]).unwrap();
        assert_eq!(
            args.worklist(),
            Worklist::Ids(vec!["101".into(), "110".into(), "605".into()])
        );
    }

    #[test]
    fn worklist_options_are_exclusive() {
        let result =
            Args::try_parse_from(["catalog_report", "--app-id", "101", "--file-path", "ids.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_count_and_retry_flags() {
        let args = Args::try_parse_from([
            "catalog_report",
            "--file-path",
            "ids.txt",
            "--disable-count",
            "--retry",
            "6",
        ])
        .unwrap();
        assert_eq!(args.worklist(), Worklist::File(PathBuf::from("ids.txt")));
        assert!(args.disable_count);
        assert_eq!(args.retry, 6);
    }
}
