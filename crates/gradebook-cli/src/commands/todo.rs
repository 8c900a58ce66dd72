//! The `gradebook todo` command: a line-oriented to-do session on stdin.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::todo::{TodoFilter, TodoId, TodoList};

const HELP: &str = "\
Commands:
  add <text>                     add a pending task
  edit <id> <text>               replace a task's text
  toggle <id>                    mark a task completed or pending
  remove <id>                    delete a task
  list [all|pending|completed]   show tasks
  help                           show this message
  quit                           end the session";

pub fn execute() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(stdin.lock(), &mut stdout.lock())
}

/// Read commands from `input` until EOF or `quit`, writing replies to `output`.
pub fn run_session<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<()> {
    let mut list = TodoList::new();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        match handle(&mut list, line) {
            Ok(reply) => writeln!(output, "{reply}")?,
            Err(e) => writeln!(output, "error: {e}")?,
        }
    }

    output.flush()?;
    Ok(())
}

fn handle(list: &mut TodoList, line: &str) -> Result<String> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "add" => {
            let id = list.add(rest)?;
            Ok(format!("added #{id}"))
        }
        "edit" => {
            let (id, text) = rest.split_once(' ').unwrap_or((rest, ""));
            let id = parse_id(id)?;
            list.edit(id, text)?;
            Ok(format!("edited #{id}"))
        }
        "toggle" | "done" => {
            let id = parse_id(rest)?;
            let completed = list.toggle(id)?;
            let state = if completed { "completed" } else { "pending" };
            Ok(format!("#{id} is now {state}"))
        }
        "remove" | "rm" => {
            let id = parse_id(rest)?;
            let item = list.remove(id)?;
            Ok(format!("removed #{id}: {}", item.text))
        }
        "list" | "ls" => {
            let filter: TodoFilter = if rest.is_empty() {
                TodoFilter::All
            } else {
                rest.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?
            };
            Ok(render(list, filter))
        }
        "help" => Ok(HELP.to_string()),
        other => anyhow::bail!("unknown command: {other} (try `help`)"),
    }
}

fn parse_id(raw: &str) -> Result<TodoId> {
    raw.trim_start_matches('#')
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}", e))
}

fn render(list: &TodoList, filter: TodoFilter) -> String {
    let items = list.view(filter);
    if items.is_empty() {
        return match filter {
            TodoFilter::All => "(no tasks)".to_string(),
            _ => format!("(no {filter} tasks)"),
        };
    }
    items
        .iter()
        .map(|item| format!("#{} {}", item.id, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let mut out = Vec::new();
        run_session(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_toggle_and_filter() {
        let out = session(
            "add buy milk\nadd write report\ntoggle 1\nlist pending\nlist completed\n",
        );
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "added #1");
        assert_eq!(lines[1], "added #2");
        assert_eq!(lines[2], "#1 is now completed");
        assert_eq!(lines[3], "#2 write report");
        assert_eq!(lines[4], "#1 [✔] buy milk");
    }

    #[test]
    fn edit_and_remove_by_id() {
        let out = session("add a\nadd b\nedit #2 bee\nremove 1\nlist\n");
        assert!(out.contains("edited #2"));
        assert!(out.contains("removed #1: a"));
        assert!(out.trim_end().ends_with("#2 bee"));
    }

    #[test]
    fn errors_do_not_end_session() {
        let out = session("add\ntoggle 9\nfly away\nlist someday\nadd still here\n");
        assert!(out.contains("error: task text cannot be empty"));
        assert!(out.contains("error: no task with id 9"));
        assert!(out.contains("error: unknown command: fly"));
        assert!(out.contains("error: unknown filter: someday"));
        assert!(out.contains("added #1"));
    }

    #[test]
    fn quit_stops_reading() {
        let out = session("add first\nquit\nadd second\n");
        assert!(out.contains("added #1"));
        assert!(!out.contains("added #2"));
    }

    #[test]
    fn empty_views() {
        let out = session("list\nlist completed\n");
        assert!(out.contains("(no tasks)"));
        assert!(out.contains("(no completed tasks)"));
    }
}
