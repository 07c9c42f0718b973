//! Terminal front end
//!
//! Display surfaces that print to a terminal, the line-oriented session loop
//! and the prompts it needs.

use crate::controller::{Confirm, Tab, Tracker};
use crate::entry::EntryId;
use crate::notify::{NoticeEvent, PlacedNotice};
use crate::render::{RenderResult, SurfaceId, Surfaces};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::broadcast::{self, error::RecvError};

pub const HELP: &str = "\
Type an item and press Enter to log it.
  /delete <#n>   delete the entry numbered n
  /delete <id>   delete one entry by id
  /clear         delete every entry
  /today         show today's list
  /overview      show every entry with the total
  /reload        load entries again
  /help          show this help
  /quit          leave";

/// Surfaces that print their content when it changes
pub struct TerminalSurfaces<W: Write> {
    out: W,
    input: String,
    submit_enabled: bool,
    shown: HashMap<SurfaceId, String>,
    printed: u64,
}

impl<W: Write> TerminalSurfaces<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: String::new(),
            submit_enabled: false,
            shown: HashMap::new(),
            printed: 0,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Print a surface again even if it did not change
    pub fn show(&mut self, id: SurfaceId) {
        let content = self.shown.get(&id).cloned().unwrap_or_default();
        self.print(id, &content);
    }

    fn print(&mut self, id: SurfaceId, content: &str) {
        self.printed += 1;
        let result = match id {
            SurfaceId::DateDisplay => writeln!(self.out, "{}", content),
            SurfaceId::TodayList => writeln!(self.out, "\n-- Today --\n{}", content),
            SurfaceId::TotalCount => writeln!(self.out, "\n-- Overview: {} --", content),
            SurfaceId::AllEntries => writeln!(self.out, "{}", content),
            SurfaceId::Input | SurfaceId::SubmitButton => Ok(()),
        };
        if let Err(e) = result.and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write {}: {}", id, e);
        }
    }
}

impl<W: Write> Surfaces for TerminalSurfaces<W> {
    fn has(&self, _id: SurfaceId) -> bool {
        true
    }

    fn write(&mut self, id: SurfaceId, content: &str) -> RenderResult<()> {
        match id {
            SurfaceId::Input => self.input = content.to_string(),
            SurfaceId::SubmitButton => {}
            _ => {
                if self.shown.get(&id).map(String::as_str) != Some(content) {
                    self.print(id, content);
                    self.shown.insert(id, content.to_string());
                }
            }
        }
        Ok(())
    }

    fn read(&self, id: SurfaceId) -> RenderResult<String> {
        Ok(match id {
            SurfaceId::Input => self.input.clone(),
            _ => self.shown.get(&id).cloned().unwrap_or_default(),
        })
    }

    fn set_enabled(&mut self, id: SurfaceId, enabled: bool) -> RenderResult<()> {
        if id == SurfaceId::SubmitButton {
            self.submit_enabled = enabled;
        }
        Ok(())
    }
}

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Submit(String),
    Delete(EntryId),
    /// 1-based position among all entries, newest first
    DeleteAt(usize),
    Clear,
    Today,
    Overview,
    Reload,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix('/') else {
            return SessionCommand::Submit(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match (name.to_ascii_lowercase().as_str(), arg) {
            ("delete" | "del" | "rm", target) if !target.is_empty() => match target.strip_prefix('#') {
                Some(number) => match number.parse::<usize>() {
                    Ok(n) if n > 0 => SessionCommand::DeleteAt(n),
                    _ => SessionCommand::Unknown(trimmed.to_string()),
                },
                None => SessionCommand::Delete(EntryId::new(target)),
            },
            ("clear", "") => SessionCommand::Clear,
            ("today", "") => SessionCommand::Today,
            ("overview" | "all", "") => SessionCommand::Overview,
            ("reload", "") => SessionCommand::Reload,
            ("help" | "?", "") => SessionCommand::Help,
            ("quit" | "exit" | "q", "") => SessionCommand::Quit,
            _ => SessionCommand::Unknown(trimmed.to_string()),
        }
    }
}

/// Yes/no prompt answered on the session's own input
pub struct LinePrompt<'a, R, W> {
    lines: &'a mut Lines<R>,
    out: &'a mut W,
}

impl<'a, R, W> LinePrompt<'a, R, W> {
    pub fn new(lines: &'a mut Lines<R>, out: &'a mut W) -> Self {
        Self { lines, out }
    }
}

#[async_trait]
impl<'a, R, W> Confirm for LinePrompt<'a, R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.out, "{} (y/N): ", prompt).and_then(|_| self.out.flush()).is_err() {
            return false;
        }

        match self.lines.next_line().await {
            Ok(Some(answer)) => {
                let answer = answer.trim();
                answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
            }
            _ => false,
        }
    }
}

/// Run the interactive loop until `/quit` or end of input
pub async fn run_session<R, W, P>(
    tracker: &mut Tracker<TerminalSurfaces<W>>,
    reader: R,
    mut prompt_out: P,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write,
    P: Write + Send,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        match SessionCommand::parse(&line) {
            SessionCommand::Submit(text) => {
                tracker.on_input(&text);
                tracker.submit(&text).await;
            }
            SessionCommand::Delete(id) => {
                if !tracker.delete(&id).await {
                    writeln!(prompt_out, "No entry with id {}", id)?;
                }
            }
            SessionCommand::DeleteAt(n) => {
                let id = tracker.store().newest_first().get(n - 1).map(|entry| entry.id.clone());
                match id {
                    Some(id) => {
                        tracker.delete(&id).await;
                    }
                    None => writeln!(prompt_out, "No entry #{}", n)?,
                }
            }
            SessionCommand::Clear => {
                let mut prompt = LinePrompt::new(&mut lines, &mut prompt_out);
                tracker.clear_all(&mut prompt).await;
            }
            SessionCommand::Today => {
                tracker.switch_tab(Tab::Track);
                tracker.surfaces_mut().show(SurfaceId::TodayList);
            }
            SessionCommand::Overview => {
                let printed = tracker.surfaces().printed;
                tracker.switch_tab(Tab::Overview);
                // Unchanged content is not printed by the render; show it anyway
                if tracker.surfaces().printed == printed {
                    tracker.surfaces_mut().show(SurfaceId::TotalCount);
                    tracker.surfaces_mut().show(SurfaceId::AllEntries);
                }
            }
            SessionCommand::Reload => {
                tracker.load().await;
            }
            SessionCommand::Help => writeln!(prompt_out, "{}", HELP)?,
            SessionCommand::Quit => break,
            SessionCommand::Unknown(command) => {
                writeln!(prompt_out, "Unknown command: {} (try /help)", command)?
            }
        }
        prompt_out.flush()?;
    }

    Ok(())
}

/// One printed line for a shown notice
pub fn format_notice(placed: &PlacedNotice) -> String {
    format!("[{}] {}", placed.notice.severity, placed.notice.message)
}

/// Print notices as they are shown, until the center goes away
pub async fn print_notices<W: Write>(mut events: broadcast::Receiver<NoticeEvent>, mut out: W) -> W {
    loop {
        match events.recv().await {
            Ok(NoticeEvent::Shown(placed)) => {
                if writeln!(out, "{}", format_notice(&placed)).and_then(|_| out.flush()).is_err() {
                    break;
                }
            }
            Ok(NoticeEvent::Dismissed(id)) => tracing::trace!(id = %id, "Notice gone"),
            Err(RecvError::Lagged(skipped)) => tracing::warn!("Skipped {} notices", skipped),
            Err(RecvError::Closed) => break,
        }
    }
    out
}
