// src/main.rs
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::io::{self, Write};
use workshop_export::constants::LOG_FILE_NAME;
use workshop_export::{
    run_session, write_checklist, ActionOutcome, AppError, CommandLineInput, Destination, Entry,
    ExportConfig, ExporterController, HtmlPage, SinkProvider, SystemSinks,
};

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // stdout carries the payload in pipe mode, so console logging goes to stderr
    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("console", Box::new(console_appender)),
        )
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Collects the page, applies selection flags, then lists or delivers.
fn execute_export(config: &ExportConfig) -> anyhow::Result<()> {
    let html = config.input.read_to_string()?;
    let page = HtmlPage::parse(&html, config.base_url.clone());
    let sinks = if config.interactive {
        SystemSinks::new(config.output.clone())
    } else {
        SystemSinks::new(config.output.clone()).one_shot()
    };
    let mut controller = ExporterController::new(page, sinks, config.format);

    if let Some(filter) = &config.filter {
        controller.set_filter(filter.clone());
    }

    if config.interactive {
        if controller.prefetch() {
            apply_selection_overrides(&mut controller, config)?;
        }
        let stdin = io::stdin();
        run_session(&mut controller, stdin.lock(), io::stdout().lock())?;
        return Ok(());
    }

    if controller.rescan().is_none() {
        return Err(AppError::NoSubscriptions.into());
    }
    apply_selection_overrides(&mut controller, config)?;

    if config.list {
        return print_listing(&controller, config);
    }

    let mut empty_selection = None;
    for destination in config.destinations() {
        match controller.deliver_to(destination)? {
            ActionOutcome::Delivered { delivery, .. } => {
                if destination == Destination::File {
                    eprintln!("✓ Saved {}", delivery.target);
                }
                if destination != Destination::Stdout {
                    report_notice(&controller);
                }
            }
            ActionOutcome::Failed => report_notice(&controller),
            outcome => {
                // Reported once, as the exit error
                if empty_selection.is_none() {
                    empty_selection = outcome.nothing_selected_error();
                }
            }
        }
    }

    match empty_selection {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn apply_selection_overrides<S, P>(
    controller: &mut ExporterController<S, P>,
    config: &ExportConfig,
) -> Result<(), AppError>
where
    S: workshop_export::NodeSource,
    P: SinkProvider,
{
    if !config.has_selection_overrides() {
        return Ok(());
    }
    if config.select_none {
        controller.select_all(false);
    }
    let mut unknown = controller.set_selected_by_id(&config.select, true)?;
    unknown.extend(controller.set_selected_by_id(&config.deselect, false)?);
    if !unknown.is_empty() {
        let ids: Vec<String> = unknown.iter().map(ToString::to_string).collect();
        eprintln!("⚠️  Not on this page: {}", ids.join(", "));
    }
    Ok(())
}

fn print_listing<S, P>(
    controller: &ExporterController<S, P>,
    config: &ExportConfig,
) -> anyhow::Result<()>
where
    S: workshop_export::NodeSource,
    P: SinkProvider,
{
    let mut stdout = io::stdout().lock();
    if config.json {
        let visible: Vec<&Entry> = controller
            .visible_entries()
            .into_iter()
            .map(|(_, entry)| entry)
            .collect();
        serde_json::to_writer_pretty(&mut stdout, &visible).map_err(AppError::from)?;
        writeln!(stdout)?;
    } else {
        write_checklist(controller, &mut stdout)?;
    }
    Ok(())
}

fn report_notice<S, P>(controller: &ExporterController<S, P>)
where
    S: workshop_export::NodeSource,
    P: SinkProvider,
{
    if let Some(notice) = controller.notices().latest() {
        eprintln!("{}", notice);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = ExportConfig::resolve(cli)?;

    execute_export(&config)
}
