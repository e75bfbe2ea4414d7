use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{env, process::ExitCode};

use treepane::kernel::{load_settings_or_default, Action, AppState, ContentView, Store};
use treepane::models::{demo_forest, FileTree, NodeId, NodeRecord};

mod logging;

const USAGE: &str = "usage: treepane [--settings PATH] [--forest PATH] [--filter QUERY] [--expand-all] [--open ID]";

#[derive(Debug, Default)]
struct Args {
    settings: Option<PathBuf>,
    forest: Option<PathBuf>,
    filter: Option<String>,
    expand_all: bool,
    open: Option<NodeId>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => parsed.settings = Some(next_value(&mut args, &arg)?.into()),
            "--forest" => parsed.forest = Some(next_value(&mut args, &arg)?.into()),
            "--filter" => parsed.filter = Some(next_value(&mut args, &arg)?),
            "--expand-all" => parsed.expand_all = true,
            "--open" => {
                let raw = next_value(&mut args, &arg)?;
                let id = raw
                    .parse::<u64>()
                    .map_err(|_| format!("invalid node id: {raw}"))?;
                parsed.open = Some(NodeId::new(id));
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument: {other}\n{USAGE}")),
        }
    }
    Ok(parsed)
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{flag} needs a value"))
}

fn load_forest(path: &Path) -> Result<FileTree, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    let records: Vec<NodeRecord> = serde_json::from_str(&data)?;
    Ok(FileTree::from_records(records)?)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings_or_default(args.settings.as_deref());
    let tree = match &args.forest {
        Some(path) => load_forest(path)?,
        None => demo_forest(),
    };
    tracing::info!(nodes = tree.len(), "forest loaded");

    let mut store = Store::new(AppState::new(tree, settings));
    if let Some(query) = args.filter {
        store.dispatch(Action::FilterChange { query });
    }
    if args.expand_all {
        let folders: Vec<NodeId> = store
            .state()
            .tree
            .tree()
            .iter()
            .filter(|n| n.is_folder())
            .map(|n| n.id())
            .collect();
        for id in folders {
            store.dispatch(Action::SetExpanded { id, expanded: true });
        }
    }
    if let Some(id) = args.open {
        store.dispatch(Action::ClickNode { id });
    }

    let mut out = io::stdout().lock();
    print_rows(&mut out, &store)?;
    if args.open.is_some() {
        writeln!(out)?;
        print_content(&mut out, &store.content_view())?;
    }
    Ok(())
}

fn print_rows(out: &mut impl Write, store: &Store) -> io::Result<()> {
    for row in store.rows() {
        let indent = "  ".repeat(row.depth as usize);
        let icon = match (row.is_folder, row.is_expanded) {
            (true, true) => "📂 ",
            (true, false) => "📁 ",
            (false, _) => "",
        };
        writeln!(out, "{indent}{icon}{} [{}]", row.name, row.id)?;
    }
    Ok(())
}

fn print_content(out: &mut impl Write, view: &ContentView) -> io::Result<()> {
    match view {
        ContentView::Text { name, text, .. } => {
            writeln!(out, "{name}")?;
            writeln!(out, "{text}")?;
            if let Some(label) = view.edit_label() {
                writeln!(out, "[{label}]")?;
            }
        }
        ContentView::Image {
            name, asset_path, ..
        } => writeln!(out, "{name} -> {asset_path}")?,
        ContentView::NothingSelected | ContentView::Unsupported { .. } => {
            writeln!(out, "{}", view.placeholder().unwrap_or_default())?
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    let _logging = logging::init();
    if let Err(error) = run(args) {
        tracing::error!(error = %error, "treepane failed");
        eprintln!("treepane: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
