// SPDX-License-Identifier: MPL-2.0
use chrono::{Local, NaiveDate};
use folio::config::{self, Config, CONFIG_FILE};
use folio::duration::{self, EndDate};
use folio::i18n::Language;
use folio::paths;
use folio::preferences::{PreferenceStore, StatePreferences};
use folio::site::Site;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult = std::result::Result<(), Box<dyn Error>>;

const HELP: &str = "\
folio - localize a static portfolio page

USAGE:
  folio render <TEMPLATE> [--lang L] [--out FILE] [--config FILE] [--data-dir DIR] [--today DATE]
  folio build <TEMPLATE> --out-dir DIR [--config FILE] [--today DATE]
  folio switch <LANG> [--data-dir DIR]
  folio duration <START> [END|present] [--lang L] [--today DATE]
  folio ticker [--cycles N] [--config FILE]

Languages: ru, en. Dates are YYYY-MM-DD.
Logging is controlled with RUST_LOG (default: folio=info).
";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(pico_args::Arguments::from_env()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(mut args: pico_args::Arguments) -> CliResult {
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    paths::init_cli_overrides(args.opt_value_from_str("--data-dir")?);

    match args.subcommand()?.as_deref() {
        Some("render") => render(args).await,
        Some("build") => build(args).await,
        Some("switch") => switch(args),
        Some("duration") => print_duration(args),
        Some("ticker") => ticker(args).await,
        Some(other) => Err(format!("unknown command '{other}', see --help").into()),
        None => {
            print!("{HELP}");
            Ok(())
        }
    }
}

fn today(args: &mut pico_args::Arguments) -> std::result::Result<NaiveDate, Box<dyn Error>> {
    let value: Option<String> = args.opt_value_from_str("--today")?;
    match value {
        Some(value) => Ok(duration::parse_date(&value)?),
        None => Ok(Local::now().date_naive()),
    }
}

/// Loads `site.toml` (explicit path or next to the template) and returns it
/// with the directory relative paths are resolved against.
fn site_config(explicit: Option<PathBuf>, template: &Path) -> (Config, PathBuf) {
    let path = explicit.unwrap_or_else(|| {
        template
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE)
    });
    let (config, warning) = config::load(&path);
    if let Some(warning) = warning {
        warn!("{warning}");
    }
    let site_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    (config, site_dir)
}

fn reject_extra(args: pico_args::Arguments) -> CliResult {
    let rest = args.finish();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(format!("unexpected arguments: {rest:?}").into())
    }
}

async fn render(mut args: pico_args::Arguments) -> CliResult {
    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let out: Option<PathBuf> = args.opt_value_from_str("--out")?;
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let today = today(&mut args)?;
    let template_path: PathBuf = args.free_from_str()?;
    reject_extra(args)?;
    let (config, site_dir) = site_config(config_path, &template_path);

    let template = tokio::fs::read_to_string(&template_path).await?;
    let site = Site::new(config.clone(), config.site_source(&site_dir)?);
    let preferences = StatePreferences::load(None).snapshot();
    let page = site
        .open(&template, lang.as_deref(), preferences, today)
        .await?;

    info!(
        language = %page.language(),
        translated = page.report.translated,
        skipped = page.report.skipped,
        computed = page.report.computed,
        "rendered {}",
        template_path.display()
    );

    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&out, page.markup()).await?;
        }
        None => print!("{}", page.markup()),
    }
    Ok(())
}

async fn build(mut args: pico_args::Arguments) -> CliResult {
    let out_dir: PathBuf = args.value_from_str("--out-dir")?;
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let today = today(&mut args)?;
    let template_path: PathBuf = args.free_from_str()?;
    reject_extra(args)?;
    let (config, site_dir) = site_config(config_path, &template_path);

    let file_name = template_path
        .file_name()
        .ok_or("template path has no file name")?
        .to_owned();
    let template = tokio::fs::read_to_string(&template_path).await?;
    let site = Site::new(config.clone(), config.site_source(&site_dir)?);

    for (language, markup, report) in site.render_all(&template, today).await? {
        let dir = out_dir.join(language.code());
        tokio::fs::create_dir_all(&dir).await?;
        let target = dir.join(&file_name);
        tokio::fs::write(&target, markup).await?;
        info!(
            language = %language,
            translated = report.translated,
            skipped = report.skipped,
            "wrote {}",
            target.display()
        );
    }
    Ok(())
}

fn switch(mut args: pico_args::Arguments) -> CliResult {
    let language: Language = args.free_from_str()?;
    reject_extra(args)?;

    let mut preferences = StatePreferences::load(None);
    preferences.set_language(language);
    info!(language = %language, "preferred language saved");
    Ok(())
}

fn print_duration(mut args: pico_args::Arguments) -> CliResult {
    let language: Language = args
        .opt_value_from_str("--lang")?
        .unwrap_or_default();
    let today = today(&mut args)?;
    let start: String = args.free_from_str()?;
    let end: Option<String> = args.opt_free_from_str()?;
    reject_extra(args)?;

    let start = duration::parse_date(&start)?;
    let end = match end {
        Some(end) => end.parse::<EndDate>()?,
        None => EndDate::Present,
    };

    println!(
        "{} ({})",
        duration::duration_text(language, start, end.resolve(today)),
        duration::format_date_range(language, start, end, None)
    );
    Ok(())
}

async fn ticker(mut args: pico_args::Arguments) -> CliResult {
    let cycles: usize = args.opt_value_from_str("--cycles")?.unwrap_or(1);
    let config_path: PathBuf = args
        .opt_value_from_str("--config")?
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    reject_extra(args)?;

    let (config, warning) = config::load(&config_path);
    if let Some(warning) = warning {
        warn!("{warning}");
    }
    let mut ticker = config.ticker.build();
    let Some(first) = ticker.current() else {
        return Ok(());
    };
    println!("{first}");

    let mut interval = tokio::time::interval(ticker.interval().as_duration());
    interval.tick().await;
    let steps = cycles * ticker.len();
    for _ in 1..steps {
        interval.tick().await;
        if let Some(item) = ticker.advance() {
            println!("{item}");
        }
    }
    Ok(())
}
