use std::process::{Command, Stdio};

use super::snapshot::ProcessEntry;
use super::source::ProcessLister;

/// Lists processes by resident size through a synchronous `ps` call.
///
/// The call blocks the control thread until `ps` exits; it has no timeout.
#[derive(Debug, Clone)]
pub struct PsProcessLister {
    program: String,
}

impl Default for PsProcessLister {
    fn default() -> Self {
        Self::new("ps")
    }
}

impl PsProcessLister {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self) -> Option<String> {
        let output = Command::new(&self.program)
            .args(["-axo", "rss=,comm="])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => {
                tracing::warn!(status = %output.status, "process listing exited unsuccessfully");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, program = %self.program, "failed to spawn process listing");
                None
            }
        }
    }
}

impl ProcessLister for PsProcessLister {
    fn top_processes(&mut self, limit: usize) -> Vec<ProcessEntry> {
        let _span = tracing::debug_span!("process.top_processes", limit).entered();
        match self.run() {
            Some(text) => parse_ps_output(&text, limit),
            None => Vec::new(),
        }
    }
}

/// Parses `rss comm` lines, largest first; malformed lines are skipped.
pub fn parse_ps_output(text: &str, limit: usize) -> Vec<ProcessEntry> {
    let mut entries: Vec<ProcessEntry> = text.lines().filter_map(parse_line).collect();
    entries.sort_by(|a, b| b.resident_kb.cmp(&a.resident_kb));
    entries.truncate(limit);
    entries
}

fn parse_line(line: &str) -> Option<ProcessEntry> {
    let line = line.trim();
    let (rss, command) = line.split_once(char::is_whitespace)?;
    let resident_kb = rss.parse::<u64>().ok()?;
    let name = display_name(command.trim());
    if name.is_empty() {
        return None;
    }
    Some(ProcessEntry {
        name: name.to_string(),
        resident_kb,
    })
}

/// Final path component of a command; the whole string if it has no `/`.
pub fn display_name(command: &str) -> &str {
    let trimmed = command.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_sorts() {
        let text = "\
  1200 /usr/sbin/syslogd
 98000 /Applications/Google Chrome.app/Contents/MacOS/Google Chrome
   540 launchd
";
        let entries = parse_ps_output(text, 10);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Google Chrome");
        assert_eq!(entries[0].resident_kb, 98_000);
        assert_eq!(entries[1].name, "syslogd");
        assert_eq!(entries[2].name, "launchd");
    }

    #[test]
    fn skips_malformed_lines() {
        let text = "RSS COMM\n\n  abc /bin/zsh\n  42\n  77 /bin/zsh\n 12 /\n";
        let entries = parse_ps_output(text, 10);
        assert_eq!(
            entries,
            vec![ProcessEntry {
                name: "zsh".to_string(),
                resident_kb: 77
            }]
        );
    }

    #[test]
    fn truncates_to_limit() {
        let text = "1 a\n2 b\n3 c\n4 d\n";
        let entries = parse_ps_output(text, 2);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["d", "c"]);
        assert!(parse_ps_output(text, 0).is_empty());
    }

    #[test]
    fn display_name_keeps_last_component() {
        assert_eq!(display_name("/usr/bin/python3"), "python3");
        assert_eq!(display_name("kworker/0:1"), "0:1");
        assert_eq!(display_name("bash"), "bash");
        assert_eq!(display_name("/opt/tool/"), "tool");
    }

    #[test]
    fn missing_program_yields_empty_list() {
        let mut lister = PsProcessLister::new("/nonexistent/definitely-not-ps");
        assert!(lister.top_processes(5).is_empty());
    }
}
