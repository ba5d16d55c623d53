// SPDX-License-Identifier: MPL-2.0
use chrono::Utc;
use clinic_showcase::app::{self, config, paths, Flags};
use clinic_showcase::error::Error;
use clinic_showcase::logger;
use clinic_showcase::site::blog;
use clinic_showcase::store::Collections;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const HELP: &str = "\
clinic_showcase

USAGE:
  clinic_showcase [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language, e.g. en-US or fr
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory holding the record store
  --log-level <LEVEL>   trace, debug, info, warn or error
  --dump-store          Print stored records as JSON and exit
  --import-blogs <FILE> Add the [[posts]] of a TOML file to the blog and exit
  --clear-store         Delete stored records and exit
  -h, --help            Print this help
";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    data_dir: Option<String>,
    log_level: Option<String>,
    dump_store: bool,
    clear_store: bool,
    import_blogs: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        log_level: args.opt_value_from_str("--log-level")?,
        dump_store: args.contains("--dump-store"),
        clear_store: args.contains("--clear-store"),
        import_blogs: args.opt_value_from_str("--import-blogs")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(args.data_dir, args.config_dir);

    let (settings, _) = config::load();
    let (level, rejected) = logger::resolve_level(args.log_level, settings.general.log_level);
    if let Some(error) = rejected {
        eprintln!("warning: {error}; using '{level}'");
    }
    if let Err(error) = logger::init(&level) {
        eprintln!("warning: {error}");
    }

    if let Some(file) = args.import_blogs {
        return import_blogs(&file);
    }
    if args.dump_store || args.clear_store {
        return run_store_command(args.dump_store);
    }

    match app::run(Flags { lang: args.lang }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

/// Dumps or clears the record store without opening a window.
fn run_store_command(dump: bool) -> ExitCode {
    let (store, warning) = app::open_store();
    if let Some(key) = warning {
        tracing::warn!(%key, "record store opened with a warning");
    }
    let mut records = Collections::new(store);

    if dump {
        return match serde_json::to_string_pretty(&records.dump()) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("error: {error}");
                ExitCode::FAILURE
            }
        };
    }

    match records.clear() {
        Ok(()) => {
            tracing::info!("record store cleared");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Appends the posts listed in `file` to the stored blog.
fn import_blogs(file: &Path) -> ExitCode {
    let posts = match fs::read_to_string(file)
        .map_err(Error::from)
        .and_then(|source| blog::parse_posts(&source, Utc::now()))
    {
        Ok(posts) => posts,
        Err(error) => {
            eprintln!("error: {}: {error}", file.display());
            return ExitCode::FAILURE;
        }
    };

    let (store, warning) = app::open_store();
    if let Some(key) = warning {
        tracing::warn!(%key, "record store opened with a warning");
    }
    let mut records = Collections::new(store);

    let count = posts.len();
    for post in posts {
        if let Err(error) = records.add_blog(post) {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    }
    tracing::info!(count, "blog posts imported");
    ExitCode::SUCCESS
}
