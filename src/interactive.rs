// src/interactive.rs
//! Terminal checklist session.
//!
//! A line-oriented front-end over [`ExporterController`]: list the collected
//! items, filter them, tick and untick entries, then export or copy. Input and
//! output are generic so sessions can be scripted in tests.

use crate::controller::{ActionOutcome, ExporterController};
use crate::error::AppError;
use crate::output::SinkProvider;
use crate::source::NodeSource;
use crate::types::{ExportFormat, ValidationError};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  list                 show the checklist (respects the filter)
  filter [text]        only list items whose title or id contains text
  toggle N...          flip the given items
  check N...           select the given items
  uncheck N...         deselect the given items
  all | none           select or deselect everything
  format xml|csv       choose the export format
  show | hide          open or close the checklist
  export               save the selection as steam_mods.<format>
  copy                 copy the selection to the clipboard
  rescan               collect the list again (resets selection)
  help                 this text
  quit                 leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Filter(String),
    Toggle(Vec<usize>),
    Check(Vec<usize>, bool),
    All(bool),
    Format(ExportFormat),
    Show,
    Hide,
    Export,
    Copy,
    Rescan,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "list" | "ls" => Self::List,
            "filter" => Self::Filter(rest.to_string()),
            "toggle" => Self::Toggle(parse_positions(rest)?),
            "check" => Self::Check(parse_positions(rest)?, true),
            "uncheck" => Self::Check(parse_positions(rest)?, false),
            "all" => Self::All(true),
            "none" => Self::All(false),
            "format" => Self::Format(
                rest.parse()
                    .map_err(|e: ValidationError| e.to_string())?,
            ),
            "show" => Self::Show,
            "hide" => Self::Hide,
            "export" | "download" => Self::Export,
            "copy" => Self::Copy,
            "rescan" => Self::Rescan,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("Unknown command '{}'. Type 'help' for a list.", other)),
        };
        Ok(Some(command))
    }
}

/// Turns 1-based positions as displayed into store indexes.
fn parse_positions(args: &str) -> Result<Vec<usize>, String> {
    if args.is_empty() {
        return Err("Expected one or more item numbers".to_string());
    }
    args.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n - 1),
            _ => Err(format!("Invalid item number '{}'", s)),
        })
        .collect()
}

/// Runs commands from `input` until `quit` or end of input.
pub fn run_session<S, P, R, W>(
    controller: &mut ExporterController<S, P>,
    input: R,
    mut out: W,
) -> Result<(), AppError>
where
    S: NodeSource,
    P: SinkProvider,
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Workshop Exporter ({} format). Type 'help' for commands.",
        controller.format().label()
    )?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(controller, command, &mut out)?,
            Ok(None) => {}
            Err(message) => writeln!(out, "{}", message)?,
        }

        if let Some(notice) = controller.notices_mut().take_current() {
            writeln!(out, "! {}", notice)?;
        }
        out.flush()?;
    }

    Ok(())
}

fn execute<S, P, W>(
    controller: &mut ExporterController<S, P>,
    command: Command,
    out: &mut W,
) -> Result<(), AppError>
where
    S: NodeSource,
    P: SinkProvider,
    W: Write,
{
    match command {
        Command::List => write_checklist(controller, out)?,
        Command::Filter(query) => {
            controller.set_filter(query);
            write_checklist(controller, out)?;
        }
        Command::Toggle(indexes) => {
            for index in indexes {
                if let Err(e) = controller.toggle(index) {
                    writeln!(out, "{}", e)?;
                }
            }
            print_badge(controller, out)?;
        }
        Command::Check(indexes, selected) => {
            for index in indexes {
                if let Err(e) = controller.set_selected(index, selected) {
                    writeln!(out, "{}", e)?;
                }
            }
            print_badge(controller, out)?;
        }
        Command::All(selected) => {
            controller.select_all(selected);
            print_badge(controller, out)?;
        }
        Command::Format(format) => {
            controller.set_format(format);
            writeln!(out, "Format: {}", format.label())?;
        }
        Command::Show => {
            if !controller.is_list_visible() && !controller.toggle_list() {
                return Ok(());
            }
            write_checklist(controller, out)?;
        }
        Command::Hide => {
            if controller.is_list_visible() {
                controller.toggle_list();
            }
        }
        Command::Export => match controller.export() {
            Ok(ActionOutcome::Delivered { delivery, .. }) => {
                writeln!(out, "Saved {}", delivery.target)?;
            }
            Ok(_) => {}
            Err(e) => writeln!(out, "Export failed: {}", e)?,
        },
        Command::Copy => {
            controller.copy();
        }
        Command::Rescan => {
            if let Some(found) = controller.rescan() {
                writeln!(out, "Found {} items", found)?;
            }
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}

fn print_badge<S, P, W>(controller: &ExporterController<S, P>, out: &mut W) -> Result<(), AppError>
where
    S: NodeSource,
    P: SinkProvider,
    W: Write,
{
    match controller.badge() {
        Some(badge) => writeln!(out, "[{}]", badge)?,
        None => writeln!(out, "List not collected yet. Use 'show' or 'rescan'.")?,
    }
    Ok(())
}

/// Writes the visible checklist lines followed by the count badge.
pub fn write_checklist<S, P, W>(
    controller: &ExporterController<S, P>,
    out: &mut W,
) -> Result<(), AppError>
where
    S: NodeSource,
    P: SinkProvider,
    W: Write,
{
    if controller.store().is_none() {
        writeln!(out, "List not collected yet. Use 'show' or 'rescan'.")?;
        return Ok(());
    }

    for (index, entry) in controller.visible_entries() {
        let mark = if entry.selected { 'x' } else { ' ' };
        writeln!(out, "{:>3}. [{}] {} {}", index + 1, mark, entry.title, entry.id_label())?;
    }
    print_badge(controller, out)
}
