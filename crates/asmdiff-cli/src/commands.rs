use std::fs;
use std::path::Path;

use anyhow::Context;
use asmdiff_tree::{DiffTree, Directory, Record, RecordKind};
use colored::Colorize;
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Stats(args) => cmd_stats(args),
        Command::Fmt(args) => cmd_fmt(args),
        Command::Changes(args) => cmd_changes(args),
    }
}

fn load_tree(path: &Path) -> anyhow::Result<DiffTree> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let tree = DiffTree::from_json(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(path = %path.display(), "loaded diff tree");
    Ok(tree)
}

fn kind_label(kind: RecordKind) -> colored::ColoredString {
    match kind {
        RecordKind::Exact => kind.as_str().green(),
        RecordKind::Change => kind.as_str().yellow(),
        RecordKind::Remove => kind.as_str().red(),
        RecordKind::Substitute => kind.as_str().cyan(),
    }
}

fn cmd_stats(args: StatsArgs) -> anyhow::Result<()> {
    let tree = load_tree(&args.tree)?;
    println!("Diff tree: {}", tree.root().dir_type().bold());
    for kind in RecordKind::ALL {
        println!("  {:<10} {}", kind_label(kind), tree.count_all(kind));
    }
    if tree.has_diff_records() {
        let differing: usize = [
            RecordKind::Change,
            RecordKind::Remove,
            RecordKind::Substitute,
        ]
        .iter()
        .map(|&k| tree.count_all(k))
        .sum();
        if differing == 0 {
            println!("{} Sides are identical.", "✓".green().bold());
        } else {
            println!("{} {} differing records.", "✗".red().bold(), differing);
        }
    } else {
        println!("Tree is empty.");
    }
    Ok(())
}

fn cmd_fmt(args: FmtArgs) -> anyhow::Result<()> {
    let tree = load_tree(&args.tree)?;
    let text = if args.compact {
        tree.to_json()?
    } else {
        tree.to_json_pretty()?
    };
    match args.output {
        Some(path) => {
            fs::write(&path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("{} Wrote {}", "✓".green(), path.display().to_string().bold());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_changes(args: ChangesArgs) -> anyhow::Result<()> {
    let tree = load_tree(&args.tree)?;
    let wanted: Option<RecordKind> = args.kind.map(Into::into);
    let mut shown = 0usize;

    walk(tree.root(), &mut Vec::new(), &mut |path, record| {
        let listed = match wanted {
            Some(kind) => record.kind() == kind,
            None => record.kind() != RecordKind::Exact,
        };
        if listed {
            shown += 1;
            println!(
                "{:<10} {} [{}] {} → {}",
                kind_label(record.kind()),
                path.join("/").dimmed(),
                record.value_kind(),
                record.left(),
                record.right(),
            );
        }
    });

    if shown == 0 {
        println!("{} No matching records.", "✓".green());
    }
    Ok(())
}

/// Depth-first walk, visiting each record with its directory path.
fn walk<'a>(
    dir: &'a Directory,
    path: &mut Vec<&'a str>,
    visit: &mut impl FnMut(&[&str], &Record),
) {
    path.push(dir.dir_type());
    for record in dir.records() {
        visit(path, record);
    }
    for child in dir.directories() {
        walk(child, path, visit);
    }
    path.pop();
}
