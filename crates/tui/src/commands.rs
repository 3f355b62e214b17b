use std::fmt;
use std::io::Write;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::cli::{CliCommand, ListArgs, StatsArgs};
use crate::config::AppConfig;
use crate::core::TaskBoard;
use crate::model::{Partition, Task};

pub fn execute<W: Write>(config: &AppConfig, command: CliCommand, mut writer: W) -> Result<()> {
    let board = TaskBoard::from_config(config);
    match command {
        CliCommand::List(args) => handle_list(&board, &args, &mut writer),
        CliCommand::Stats(args) => handle_stats(&board, &args, &mut writer),
        CliCommand::Board => Err(anyhow!("launch the interactive board directly")),
    }
}

#[derive(Serialize)]
struct ListGroup<'a> {
    partition: Partition,
    tasks: Vec<&'a Task>,
}

fn handle_list<W: Write>(board: &TaskBoard, args: &ListArgs, mut writer: W) -> Result<()> {
    let groups: Vec<ListGroup> = args
        .partitions()
        .into_iter()
        .map(|partition| ListGroup {
            partition,
            tasks: board
                .partition(partition)
                .into_iter()
                .filter(|task| args.importance.map_or(true, |level| task.importance == level))
                .collect(),
        })
        .collect();

    if args.json {
        serde_json::to_writer_pretty(&mut writer, &groups)?;
        writeln!(writer)?;
        return Ok(());
    }

    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{} ({})", group.partition.title(), group.tasks.len())?;
        if group.tasks.is_empty() {
            writeln!(writer, "  (none)")?;
        }
        for task in &group.tasks {
            writeln!(writer, "  {}", TaskLine(task))?;
        }
    }
    Ok(())
}

fn handle_stats<W: Write>(board: &TaskBoard, args: &StatsArgs, mut writer: W) -> Result<()> {
    let stats = board.stats();
    if args.json {
        serde_json::to_writer_pretty(&mut writer, &stats)?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "Total: {}", stats.total)?;
    writeln!(writer, "Completed: {}", stats.completed)?;
    writeln!(writer, "Not started: {}", stats.not_started)?;
    writeln!(writer, "Progress: {}", stats.progress_label())?;
    Ok(())
}

struct TaskLine<'a>(&'a Task);

impl fmt::Display for TaskLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.0;
        write!(
            f,
            "[{}] {:<6} {} ({})  {}",
            if task.done { "x" } else { " " },
            task.importance.as_str(),
            task.title,
            task.category,
            task.id
        )
    }
}
