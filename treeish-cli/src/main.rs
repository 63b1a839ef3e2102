//! Browse a directory as a collapsible tree.

mod fs_tree;
mod terminal;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use treeish::{Event, Key, Line, Render, Span, Style, SymbolSet, TreeView};

use crate::fs_tree::{FileNode, LoadOptions};
use crate::terminal::Terminal;

#[derive(Debug, Parser)]
#[command(name = "treeish")]
#[command(about = "Browse a directory as a collapsible tree")]
struct Args {
    /// Directory to show
    #[arg(default_value = "/tmp")]
    path: PathBuf,

    /// Deepest level read below the directory
    #[arg(short, long, default_value_t = 10)]
    depth: usize,

    /// Branch glyphs: normal, thick, rounded, double, edge, thickedge, ascii
    #[arg(short, long, default_value = "normal")]
    style: SymbolSet,

    /// Include dot-files
    #[arg(short, long)]
    all: bool,

    /// File to write logs to
    #[arg(long, value_name = "FILE", default_value = "treeish.log")]
    log_file: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)
        .with_context(|| format!("failed to create {}", args.log_file.display()))?;
    WriteLogger::init(args.log_level, Config::default(), log_file)
        .context("failed to initialize logger")?;

    let options = LoadOptions {
        max_depth: args.depth,
        all: args.all,
    };
    let tree = fs_tree::load(&args.path, options)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    info!("loaded {} entries from {}", tree.len(), args.path.display());

    let mut view = TreeView::new(tree)?.with_symbols(args.style.symbols())?;
    run(&mut view)
}

fn run(view: &mut TreeView<FileNode>) -> Result<()> {
    let mut term = Terminal::new()?;
    let (width, height) = term.size()?;
    view.update(&resize(width, height))?;

    loop {
        term.draw(view.visible_lines(), &status_line(view))?;

        for raw in term.poll(None)? {
            let Some(event) = Event::from_crossterm(&raw) else {
                continue;
            };
            if is_quit(&event) {
                return Ok(());
            }
            let event = match event {
                Event::Resize { width, height } => resize(width, height),
                other => other,
            };
            match view.update(&event)? {
                Render::None => {}
                render => debug!("{event:?} -> {render:?}"),
            }
        }
    }
}

/// The last terminal row holds the status line.
fn resize(width: u16, height: u16) -> Event {
    Event::Resize {
        width,
        height: height.saturating_sub(1),
    }
}

fn is_quit(event: &Event) -> bool {
    match *event {
        Event::Key {
            key: Key::Char('q') | Key::Escape,
            modifiers,
        } => modifiers.none(),
        Event::Key {
            key: Key::Char('c'),
            modifiers,
        } => modifiers.ctrl,
        _ => false,
    }
}

fn status_line(view: &TreeView<FileNode>) -> Line {
    let path = view
        .tree()
        .data(view.current_node())
        .map(|node| node.path.display().to_string())
        .unwrap_or_default();
    let text = format!(
        " {}/{}  {:>3.0}%  {path}",
        view.cursor() + 1,
        view.visible_len(),
        view.scroll_percent() * 100.0
    );
    Line::new(vec![Span::new(text, Style::new().dim())])
}
